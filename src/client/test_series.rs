//! Test-series client calls, including the deep nested routes for
//! tests, sections and questions
//! (`/admin/test-series/{id}/tests/{id}/sections/{id}/questions/{id}`).

use crate::models::{
    Test, TestCreateRequest, TestQuestion, TestQuestionCreateRequest, TestQuestionUpdateRequest,
    TestSection, TestSectionCreateRequest, TestSeries, TestSeriesCreateRequest,
    TestSeriesUpdateRequest, TestUpdateRequest,
};

use super::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_test_series(&self) -> ClientResult<Vec<TestSeries>> {
        let (items, _) = self
            .get_list("/admin/test-series", &[], "test series")
            .await?;
        Ok(items)
    }

    pub async fn get_test_series(&self, id: &str) -> ClientResult<TestSeries> {
        self.get_entity(&format!("/admin/test-series/{id}"), "test series")
            .await
    }

    pub async fn create_test_series(
        &self,
        request: &TestSeriesCreateRequest,
    ) -> ClientResult<TestSeries> {
        self.post_json("/admin/test-series", request, "test series")
            .await
    }

    pub async fn update_test_series(
        &self,
        id: &str,
        request: &TestSeriesUpdateRequest,
    ) -> ClientResult<TestSeries> {
        self.put_json(&format!("/admin/test-series/{id}"), request, "test series")
            .await
    }

    pub async fn delete_test_series(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/test-series/{id}"), "test series")
            .await
    }

    pub async fn add_test(&self, series_id: &str, request: &TestCreateRequest) -> ClientResult<Test> {
        self.post_json(
            &format!("/admin/test-series/{series_id}/tests"),
            request,
            "test",
        )
        .await
    }

    pub async fn update_test(
        &self,
        series_id: &str,
        test_id: &str,
        request: &TestUpdateRequest,
    ) -> ClientResult<Test> {
        self.put_json(
            &format!("/admin/test-series/{series_id}/tests/{test_id}"),
            request,
            "test",
        )
        .await
    }

    pub async fn delete_test(&self, series_id: &str, test_id: &str) -> ClientResult<()> {
        self.delete(
            &format!("/admin/test-series/{series_id}/tests/{test_id}"),
            "test",
        )
        .await
    }

    pub async fn add_section(
        &self,
        series_id: &str,
        test_id: &str,
        request: &TestSectionCreateRequest,
    ) -> ClientResult<TestSection> {
        self.post_json(
            &format!("/admin/test-series/{series_id}/tests/{test_id}/sections"),
            request,
            "section",
        )
        .await
    }

    pub async fn update_section(
        &self,
        series_id: &str,
        test_id: &str,
        section_id: &str,
        request: &TestSectionCreateRequest,
    ) -> ClientResult<TestSection> {
        self.put_json(
            &format!("/admin/test-series/{series_id}/tests/{test_id}/sections/{section_id}"),
            request,
            "section",
        )
        .await
    }

    pub async fn delete_section(
        &self,
        series_id: &str,
        test_id: &str,
        section_id: &str,
    ) -> ClientResult<()> {
        self.delete(
            &format!("/admin/test-series/{series_id}/tests/{test_id}/sections/{section_id}"),
            "section",
        )
        .await
    }

    pub async fn add_question(
        &self,
        series_id: &str,
        test_id: &str,
        section_id: &str,
        request: &TestQuestionCreateRequest,
    ) -> ClientResult<TestQuestion> {
        self.post_json(
            &format!(
                "/admin/test-series/{series_id}/tests/{test_id}/sections/{section_id}/questions"
            ),
            request,
            "question",
        )
        .await
    }

    pub async fn update_question(
        &self,
        series_id: &str,
        test_id: &str,
        section_id: &str,
        question_id: &str,
        request: &TestQuestionUpdateRequest,
    ) -> ClientResult<TestQuestion> {
        self.put_json(
            &format!(
                "/admin/test-series/{series_id}/tests/{test_id}/sections/{section_id}/questions/{question_id}"
            ),
            request,
            "question",
        )
        .await
    }

    pub async fn delete_question(
        &self,
        series_id: &str,
        test_id: &str,
        section_id: &str,
        question_id: &str,
    ) -> ClientResult<()> {
        self.delete(
            &format!(
                "/admin/test-series/{series_id}/tests/{test_id}/sections/{section_id}/questions/{question_id}"
            ),
            "question",
        )
        .await
    }
}
