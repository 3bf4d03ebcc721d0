use crate::models::{Language, LanguageCreateRequest};

use super::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_languages(&self) -> ClientResult<Vec<Language>> {
        let (items, _) = self.get_list("/admin/languages", &[], "languages").await?;
        Ok(items)
    }

    pub async fn create_language(&self, request: &LanguageCreateRequest) -> ClientResult<Language> {
        self.post_json("/admin/languages", request, "language").await
    }

    pub async fn update_language(
        &self,
        id: &str,
        request: &LanguageCreateRequest,
    ) -> ClientResult<Language> {
        self.put_json(&format!("/admin/languages/{id}"), request, "language")
            .await
    }

    pub async fn delete_language(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/languages/{id}"), "language")
            .await
    }
}
