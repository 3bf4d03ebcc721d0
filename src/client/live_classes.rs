use reqwest::Method;
use serde::Serialize;

use crate::models::LiveClass;

use super::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_live_classes(&self) -> ClientResult<Vec<LiveClass>> {
        let (items, _) = self
            .get_list("/admin/live-classes", &[], "live classes")
            .await?;
        Ok(items)
    }

    /// JSON create, used when the submission carries no files
    pub async fn create_live_class<B: Serialize>(&self, payload: &B) -> ClientResult<LiveClass> {
        self.post_json("/admin/live-classes", payload, "live class")
            .await
    }

    pub async fn create_live_class_form(
        &self,
        form: reqwest::multipart::Form,
    ) -> ClientResult<LiveClass> {
        self.send_multipart(Method::POST, "/admin/live-classes", form, "live class")
            .await
    }

    pub async fn update_live_class<B: Serialize>(
        &self,
        id: &str,
        payload: &B,
    ) -> ClientResult<LiveClass> {
        self.put_json(&format!("/admin/live-classes/{id}"), payload, "live class")
            .await
    }

    pub async fn update_live_class_form(
        &self,
        id: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<LiveClass> {
        self.send_multipart(
            Method::PUT,
            &format!("/admin/live-classes/{id}"),
            form,
            "live class",
        )
        .await
    }

    pub async fn delete_live_class(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/live-classes/{id}"), "live class")
            .await
    }
}
