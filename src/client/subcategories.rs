use crate::models::{SubCategory, SubCategoryCreateRequest};

use super::{ApiClient, ClientResult};

impl ApiClient {
    /// List subcategories, optionally restricted to one parent category
    pub async fn list_sub_categories(
        &self,
        category: Option<&str>,
    ) -> ClientResult<Vec<SubCategory>> {
        let mut query = Vec::new();
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }
        let (items, _) = self
            .get_list("/admin/subcategories", &query, "subcategories")
            .await?;
        Ok(items)
    }

    pub async fn create_sub_category(
        &self,
        request: &SubCategoryCreateRequest,
    ) -> ClientResult<SubCategory> {
        self.post_json("/admin/subcategories", request, "subcategory")
            .await
    }

    pub async fn update_sub_category(
        &self,
        id: &str,
        request: &SubCategoryCreateRequest,
    ) -> ClientResult<SubCategory> {
        self.put_json(&format!("/admin/subcategories/{id}"), request, "subcategory")
            .await
    }

    pub async fn delete_sub_category(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/subcategories/{id}"), "subcategory")
            .await
    }
}
