use crate::models::{Validity, ValidityCreateRequest};

use super::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_validities(&self) -> ClientResult<Vec<Validity>> {
        let (items, _) = self
            .get_list("/admin/validities", &[], "validities")
            .await?;
        Ok(items)
    }

    pub async fn create_validity(&self, request: &ValidityCreateRequest) -> ClientResult<Validity> {
        self.post_json("/admin/validities", request, "validity")
            .await
    }

    pub async fn update_validity(
        &self,
        id: &str,
        request: &ValidityCreateRequest,
    ) -> ClientResult<Validity> {
        self.put_json(&format!("/admin/validities/{id}"), request, "validity")
            .await
    }

    pub async fn delete_validity(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/admin/validities/{id}"), "validity")
            .await
    }
}
