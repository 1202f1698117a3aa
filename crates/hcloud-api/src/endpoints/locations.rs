//! Locations.

use hcloud_core::id::LocationId;
use hcloud_core::types::Resource;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

impl HcloudClient {
    /// List locations.
    pub async fn list_locations(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(Resource::Locations, params).await
    }

    /// Fetch a location.
    pub async fn get_location(&self, id: LocationId) -> Result<Value> {
        self.get_resource(Resource::Locations, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::test_client;
    use crate::KeyCase;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_location_kebab() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/locations/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "location": {"id": 1, "name": "fsn1", "network_zone": "eu-central"}
            })))
            .mount(&server)
            .await;

        let client = crate::HcloudClientBuilder::with_endpoint(format!("{}/v1", server.uri()))
            .unwrap()
            .with_key_case(KeyCase::Kebab)
            .build()
            .unwrap();
        let value = client.get_location(1.into()).await.unwrap();
        assert_eq!(value["location"]["network-zone"], "eu-central");

        let snake = test_client(&server);
        let value = snake.get_location(1.into()).await.unwrap();
        assert_eq!(value["location"]["network_zone"], "eu-central");
    }
}
