use crate::models::{Coupon, CouponCreateRequest};

use super::{ApiClient, ClientResult, ListResult};

impl ApiClient {
    /// Coupons are paginated upstream (`docs`/`totalDocs` envelope);
    /// page, limit and search are forwarded verbatim.
    pub async fn list_coupons(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> ListResult<Coupon> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search {
            if !search.is_empty() {
                query.push(("search", search.to_string()));
            }
        }
        self.get_list("/v1/admin/coupons", &query, "coupons").await
    }

    pub async fn create_coupon(&self, request: &CouponCreateRequest) -> ClientResult<Coupon> {
        self.post_json("/v1/admin/coupons", request, "coupon").await
    }

    pub async fn update_coupon(
        &self,
        id: &str,
        request: &CouponCreateRequest,
    ) -> ClientResult<Coupon> {
        self.put_json(&format!("/v1/admin/coupons/{id}"), request, "coupon")
            .await
    }

    pub async fn delete_coupon(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/v1/admin/coupons/{id}"), "coupon")
            .await
    }
}
