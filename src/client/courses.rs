use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::models::Course;

use super::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_courses(&self) -> ClientResult<Vec<Course>> {
        let (items, _) = self.get_list("/admin/courses", &[], "courses").await?;
        Ok(items)
    }

    /// The `/full` listing populates every classification reference
    pub async fn list_courses_full(&self) -> ClientResult<Vec<Course>> {
        let (items, _) = self.get_list("/admin/courses/full", &[], "courses").await?;
        Ok(items)
    }

    /// Aggregate fetch: the course plus its attached live classes,
    /// test series and e-books in one payload. The shape varies with
    /// backend population, so it stays a raw JSON value.
    pub async fn get_course_all_in_one(&self, id: &str) -> ClientResult<Value> {
        self.get_entity(&format!("/admin/courses/{id}/all-in-one"), "course")
            .await
    }

    /// JSON create, used when the submission carries no files
    pub async fn create_course<B: Serialize>(&self, payload: &B) -> ClientResult<Course> {
        self.post_json("/admin/courses", payload, "course").await
    }

    /// Multipart create, used when a thumbnail or intro video is
    /// attached
    pub async fn create_course_form(
        &self,
        form: reqwest::multipart::Form,
    ) -> ClientResult<Course> {
        self.send_multipart(Method::POST, "/admin/courses", form, "course")
            .await
    }

    pub async fn update_course<B: Serialize>(&self, id: &str, payload: &B) -> ClientResult<Course> {
        self.put_json(&format!("/admin/courses/{id}"), payload, "course")
            .await
    }

    pub async fn update_course_form(
        &self,
        id: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<Course> {
        self.send_multipart(Method::PUT, &format!("/admin/courses/{id}"), form, "course")
            .await
    }

    pub async fn delete_course(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/courses/{id}"), "course").await
    }
}
