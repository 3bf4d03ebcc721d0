use reqwest::Method;
use serde::Serialize;

use crate::models::{CurrentAffairs, CurrentAffairsCategory};

use super::{ApiClient, ClientResult};

impl ApiClient {
    /// List current affairs. The unfiltered listing comes back grouped
    /// by category; the envelope decoder flattens it, so callers always
    /// receive a flat list.
    pub async fn list_current_affairs(
        &self,
        category: Option<&str>,
    ) -> ClientResult<Vec<CurrentAffairs>> {
        let mut query = Vec::new();
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }
        let (items, _) = self
            .get_list("/admin/current-affairs", &query, "current affairs")
            .await?;
        Ok(items)
    }

    /// JSON create, used when the submission carries no files
    pub async fn create_current_affairs<B: Serialize>(
        &self,
        payload: &B,
    ) -> ClientResult<CurrentAffairs> {
        self.post_json("/admin/current-affairs", payload, "current affairs")
            .await
    }

    pub async fn create_current_affairs_form(
        &self,
        form: reqwest::multipart::Form,
    ) -> ClientResult<CurrentAffairs> {
        self.send_multipart(Method::POST, "/admin/current-affairs", form, "current affairs")
            .await
    }

    pub async fn update_current_affairs<B: Serialize>(
        &self,
        id: &str,
        payload: &B,
    ) -> ClientResult<CurrentAffairs> {
        self.put_json(
            &format!("/admin/current-affairs/{id}"),
            payload,
            "current affairs",
        )
        .await
    }

    pub async fn update_current_affairs_form(
        &self,
        id: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<CurrentAffairs> {
        self.send_multipart(
            Method::PUT,
            &format!("/admin/current-affairs/{id}"),
            form,
            "current affairs",
        )
        .await
    }

    pub async fn delete_current_affairs(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/current-affairs/{id}"), "current affairs")
            .await
    }

    pub async fn list_current_affairs_categories(
        &self,
    ) -> ClientResult<Vec<CurrentAffairsCategory>> {
        let (items, _) = self
            .get_list(
                "/admin/current-affairs-categories",
                &[],
                "current affairs categories",
            )
            .await?;
        Ok(items)
    }

    pub async fn create_current_affairs_category(
        &self,
        name: &str,
    ) -> ClientResult<CurrentAffairsCategory> {
        let payload = serde_json::json!({ "name": name });
        self.post_json(
            "/admin/current-affairs-categories",
            &payload,
            "current affairs category",
        )
        .await
    }

    pub async fn delete_current_affairs_category(&self, id: &str) -> ClientResult<()> {
        self.delete(
            &format!("/admin/current-affairs-categories/{id}"),
            "current affairs category",
        )
        .await
    }
}
