use reqwest::Method;
use serde::Serialize;

use crate::models::EBook;

use super::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_ebooks(&self) -> ClientResult<Vec<EBook>> {
        let (items, _) = self.get_list("/admin/ebooks", &[], "ebooks").await?;
        Ok(items)
    }

    /// JSON create, used when the submission carries no files
    pub async fn create_ebook<B: Serialize>(&self, payload: &B) -> ClientResult<EBook> {
        self.post_json("/admin/ebooks", payload, "ebook").await
    }

    /// Multipart create, used when the book file or thumbnail is
    /// attached
    pub async fn create_ebook_form(&self, form: reqwest::multipart::Form) -> ClientResult<EBook> {
        self.send_multipart(Method::POST, "/admin/ebooks", form, "ebook")
            .await
    }

    pub async fn update_ebook<B: Serialize>(&self, id: &str, payload: &B) -> ClientResult<EBook> {
        self.put_json(&format!("/admin/ebooks/{id}"), payload, "ebook")
            .await
    }

    pub async fn update_ebook_form(
        &self,
        id: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<EBook> {
        self.send_multipart(Method::PUT, &format!("/admin/ebooks/{id}"), form, "ebook")
            .await
    }

    pub async fn delete_ebook(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/ebooks/{id}"), "ebook").await
    }
}
