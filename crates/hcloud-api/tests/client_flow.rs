//! End-to-end client tests against a mock API.

use std::fs;
use std::path::PathBuf;

use hcloud_api::{
    Action, ActionStatus, Error, HcloudClient, HcloudClientBuilder, KeyCase, ListParams, Meta,
    ServerId,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture at {}: {}", path.display(), e));
    serde_json::from_str(&raw).unwrap()
}

fn kebab_client(server: &MockServer) -> anyhow::Result<HcloudClient> {
    let client = HcloudClientBuilder::with_endpoint(format!("{}/v1", server.uri()))?
        .with_token("flow-token")
        .with_key_case(KeyCase::Kebab)
        .build()?;
    Ok(client)
}

#[tokio::test]
async fn kebab_client_round_trip() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/servers"))
        .and(header("Authorization", "Bearer flow-token"))
        .and(body_json(json!({
            "name": "my-resource",
            "server_type": "cx22",
            "image": "ubuntu-24.04",
            "start_after_create": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(fixture("server.json")))
        .mount(&server)
        .await;

    let client = kebab_client(&server)?;
    let created = client
        .create_server(&json!({
            "name": "my-resource",
            "server-type": "cx22",
            "image": "ubuntu-24.04",
            "start-after-create": true
        }))
        .await?;

    let server_doc = &created["server"];
    assert_eq!(server_doc["public-net"]["ipv4"]["dns-ptr"], "server01.example.com");
    assert_eq!(server_doc["public-net"]["ipv6"]["dns-ptr"][0]["dns-ptr"], "server.example.com");
    assert_eq!(server_doc["server-type"]["cpu-type"], "shared");
    assert_eq!(server_doc["primary-disk-size"], 40);
    assert!(server_doc.get("public_net").is_none());
    // Values are never rewritten
    assert_eq!(server_doc["backup-window"], "22-02");
    assert_eq!(server_doc["labels"]["example.com/my"], "label");
    // Label keys are user data and keep their separators
    assert_eq!(server_doc["labels"]["app-tier"], "web");
    assert_eq!(server_doc["labels"]["build_id"], "1234");
    Ok(())
}

#[tokio::test]
async fn kebab_error_document() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/servers/42/actions/change_type"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {
                "code": "invalid_input",
                "message": "invalid input in field 'server_type'",
                "details": {"fields": [{"name": "server_type", "messages": ["is invalid"]}]}
            }
        })))
        .mount(&server)
        .await;

    let client = kebab_client(&server)?;
    let err = client
        .change_server_type(ServerId::new(42), &json!({"server-type": "nope"}))
        .await
        .unwrap_err();

    let api = match err {
        Error::Api(api) => api,
        other => panic!("expected an API error, got {other:?}"),
    };
    assert_eq!(api.status(), 422);
    assert_eq!(api.code(), Some("invalid_input"));
    assert_eq!(api.as_value()["status"], 422);
    assert_eq!(
        api.as_value()["error"]["details"]["fields"][0]["messages"],
        json!(["is invalid"])
    );
    Ok(())
}

#[tokio::test]
async fn follow_action_until_finished() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/servers/42/actions/poweron"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "action": {
                "id": 13,
                "command": "start_server",
                "status": "running",
                "progress": 0,
                "started": "2016-01-30T23:55:00+00:00",
                "finished": null,
                "resources": [{"id": 42, "type": "server"}],
                "error": null
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/actions/13"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": {
                "id": 13,
                "command": "start_server",
                "status": "success",
                "progress": 100,
                "started": "2016-01-30T23:55:00+00:00",
                "finished": "2016-01-30T23:56:00+00:00",
                "resources": [{"id": 42, "type": "server"}],
                "error": null
            }
        })))
        .mount(&server)
        .await;

    let client = HcloudClientBuilder::with_endpoint(format!("{}/v1", server.uri()))?
        .with_token("flow-token")
        .build()?;

    let started = client.poweron_server(42.into()).await?;
    let action: Action = serde_json::from_value(started["action"].clone())?;
    assert_eq!(action.status, ActionStatus::Running);

    let polled = client.get_action(action.id).await?;
    let action: Action = serde_json::from_value(polled["action"].clone())?;
    assert!(action.status.is_finished());
    assert_eq!(action.status, ActionStatus::Success);
    Ok(())
}

#[tokio::test]
async fn paged_listing_is_passed_through() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/servers/42/actions"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixture("server_actions_page.json")),
        )
        .mount(&server)
        .await;

    let client = HcloudClientBuilder::with_endpoint(format!("{}/v1", server.uri()))?.build()?;
    let page = client
        .list_actions_for_server(42.into(), &ListParams::new().with_page(1).with_per_page(3))
        .await?;

    assert_eq!(page["actions"].as_array().map(Vec::len), Some(3));
    assert_eq!(page["meta"]["pagination"]["next_page"], 2);
    Ok(())
}

#[tokio::test]
async fn kebab_listing_decodes_into_models() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/servers/actions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixture("server_actions_page.json")),
        )
        .mount(&server)
        .await;

    let client = kebab_client(&server)?;
    let page = client.list_server_actions(&ListParams::new()).await?;
    assert_eq!(page["meta"]["pagination"]["per-page"], 3);

    let meta: Meta = serde_json::from_value(page["meta"].clone())?;
    assert_eq!(meta.pagination.per_page, 3);
    assert_eq!(meta.pagination.next_page, Some(2));
    assert_eq!(meta.pagination.total_entries, Some(5));

    let actions: Vec<Action> = serde_json::from_value(page["actions"].clone())?;
    assert_eq!(actions.len(), 3);
    Ok(())
}
