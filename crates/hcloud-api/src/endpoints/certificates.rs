//! TLS certificates, uploaded or managed by Let's Encrypt.

use hcloud_core::id::{ActionId, CertificateId};
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const CERTIFICATES: Resource = Resource::Certificates;

impl HcloudClient {
    /// List certificates. Accepts a `type` filter (`uploaded`, `managed`).
    pub async fn list_certificates(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(CERTIFICATES, params).await
    }

    /// Create a certificate.
    ///
    /// Uploaded certificates need `certificate` and `private_key`; managed
    /// ones need `type: managed` and `domain_names`.
    pub async fn create_certificate<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.create_resource(CERTIFICATES, body).await
    }

    /// Fetch a certificate.
    pub async fn get_certificate(&self, id: CertificateId) -> Result<Value> {
        self.get_resource(CERTIFICATES, id).await
    }

    /// Update a certificate's `name` or `labels`.
    pub async fn update_certificate<B>(&self, id: CertificateId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(CERTIFICATES, id, body).await
    }

    /// Delete a certificate.
    pub async fn delete_certificate(&self, id: CertificateId) -> Result<Value> {
        self.delete_resource(CERTIFICATES, id).await
    }

    /// Retry issuance of a failed managed certificate.
    pub async fn retry_certificate(&self, id: CertificateId) -> Result<Value> {
        self.run_action::<()>(CERTIFICATES, id, "retry", None).await
    }

    /// List actions across all certificates.
    pub async fn list_certificate_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(CERTIFICATES, params).await
    }

    /// Fetch a certificate action.
    pub async fn get_certificate_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(CERTIFICATES, action_id).await
    }

    /// List the actions of one certificate.
    pub async fn list_actions_for_certificate(
        &self,
        id: CertificateId,
        params: &ListParams,
    ) -> Result<Value> {
        self.list_item_actions(CERTIFICATES, id, params).await
    }

    /// Fetch one action of a certificate.
    pub async fn get_action_for_certificate(
        &self,
        id: CertificateId,
        action_id: ActionId,
    ) -> Result<Value> {
        self.get_item_action(CERTIFICATES, id, action_id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::test_client;
    use crate::ListParams;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_managed_certificate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/certificates"))
            .and(body_json(json!({
                "name": "my website cert",
                "type": "managed",
                "domain_names": ["example.com", "webmail.example.com"]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "certificate": {"id": 897, "type": "managed", "status": {"issuance": "pending"}},
                "action": {"id": 14, "command": "create_certificate"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client
            .create_certificate(&json!({
                "name": "my website cert",
                "type": "managed",
                "domain-names": ["example.com", "webmail.example.com"]
            }))
            .await
            .unwrap();
        assert_eq!(value["certificate"]["status"]["issuance"], "pending");
    }

    #[tokio::test]
    async fn delete_returns_null_on_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/certificates/897"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client.delete_certificate(897.into()).await.unwrap();
        assert!(value.is_null());
    }

    #[tokio::test]
    async fn retry_and_list_actions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/certificates/897/actions/retry"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "action": {"id": 15, "command": "issue_certificate"}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/certificates/897/actions"))
            .and(query_param("status", "running"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"actions": []})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client.retry_certificate(897.into()).await.unwrap();
        assert_eq!(value["action"]["command"], "issue_certificate");

        let value = client
            .list_actions_for_certificate(897.into(), &ListParams::new().with_status("running"))
            .await
            .unwrap();
        assert_eq!(value["actions"], json!([]));
    }
}
