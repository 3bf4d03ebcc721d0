use crate::models::{Category, CategoryCreateRequest};

use super::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let (items, _) = self
            .get_list("/admin/categories", &[], "categories")
            .await?;
        Ok(items)
    }

    pub async fn create_category(&self, request: &CategoryCreateRequest) -> ClientResult<Category> {
        self.post_json("/admin/categories", request, "category")
            .await
    }

    pub async fn update_category(
        &self,
        id: &str,
        request: &CategoryCreateRequest,
    ) -> ClientResult<Category> {
        self.put_json(&format!("/admin/categories/{id}"), request, "category")
            .await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/categories/{id}"), "category")
            .await
    }
}
