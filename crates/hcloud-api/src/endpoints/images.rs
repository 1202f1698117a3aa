//! Images: system images, snapshots, backups and app images.
//!
//! Images cannot be created here; snapshots come from
//! [`HcloudClient::create_server_image`].

use hcloud_core::id::{ActionId, ImageId};
use hcloud_core::types::Resource;
use serde::Serialize;
use serde_json::Value;

use crate::client::HcloudClient;
use crate::models::ListParams;
use crate::Result;

const IMAGES: Resource = Resource::Images;

impl HcloudClient {
    /// List images.
    ///
    /// Useful filters are `type`, `bound_to`, `include_deprecated` and
    /// `architecture`.
    pub async fn list_images(&self, params: &ListParams) -> Result<Value> {
        self.list_resource(IMAGES, params).await
    }

    /// Fetch an image.
    pub async fn get_image(&self, id: ImageId) -> Result<Value> {
        self.get_resource(IMAGES, id).await
    }

    /// Update `description`, `type` or `labels` of a snapshot or backup.
    pub async fn update_image<B>(&self, id: ImageId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.update_resource(IMAGES, id, body).await
    }

    /// Delete a snapshot or backup.
    pub async fn delete_image(&self, id: ImageId) -> Result<Value> {
        self.delete_resource(IMAGES, id).await
    }

    /// Change `delete` protection.
    pub async fn change_image_protection<B>(&self, id: ImageId, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.run_action(IMAGES, id, "change_protection", Some(body))
            .await
    }

    /// List actions across all images.
    pub async fn list_image_actions(&self, params: &ListParams) -> Result<Value> {
        self.list_resource_actions(IMAGES, params).await
    }

    /// Fetch an image action.
    pub async fn get_image_action(&self, action_id: ActionId) -> Result<Value> {
        self.get_resource_action(IMAGES, action_id).await
    }

    /// List the actions of one image.
    pub async fn list_actions_for_image(&self, id: ImageId, params: &ListParams) -> Result<Value> {
        self.list_item_actions(IMAGES, id, params).await
    }

    /// Fetch one action of an image.
    pub async fn get_action_for_image(&self, id: ImageId, action_id: ActionId) -> Result<Value> {
        self.get_item_action(IMAGES, id, action_id).await
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
    async fn list_snapshots_including_deprecated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/images"))
            .and(query_param("type", "snapshot"))
            .and(query_param("include_deprecated", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "images": [{"id": 4711, "type": "snapshot", "os_flavor": "ubuntu", "rapid_deploy": false}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = ListParams::new()
            .with_filter("type", "snapshot")
            .with_filter("include-deprecated", true);
        let value = client.list_images(&params).await.unwrap();
        assert_eq!(value["images"][0]["os_flavor"], "ubuntu");
    }

    #[tokio::test]
    async fn update_image_description() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v1/images/4711"))
            .and(body_json(json!({"description": "before upgrade", "type": "snapshot"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "image": {"id": 4711, "description": "before upgrade"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client
            .update_image(4711.into(), &json!({"description": "before upgrade", "type": "snapshot"}))
            .await
            .unwrap();
        assert_eq!(value["image"]["description"], "before upgrade");
    }
}
