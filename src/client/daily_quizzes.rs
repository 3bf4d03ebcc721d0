use crate::models::{DailyQuiz, DailyQuizCreateRequest};

use super::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_daily_quizzes(&self) -> ClientResult<Vec<DailyQuiz>> {
        let (items, _) = self
            .get_list("/admin/daily-quizzes", &[], "daily quizzes")
            .await?;
        Ok(items)
    }

    pub async fn create_daily_quiz(
        &self,
        request: &DailyQuizCreateRequest,
    ) -> ClientResult<DailyQuiz> {
        self.post_json("/admin/daily-quizzes", request, "daily quiz")
            .await
    }

    pub async fn update_daily_quiz(
        &self,
        id: &str,
        request: &DailyQuizCreateRequest,
    ) -> ClientResult<DailyQuiz> {
        self.put_json(&format!("/admin/daily-quizzes/{id}"), request, "daily quiz")
            .await
    }

    pub async fn delete_daily_quiz(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/daily-quizzes/{id}"), "daily quiz")
            .await
    }
}
