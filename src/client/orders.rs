use crate::models::{Order, OrderStatusUpdateRequest};

use super::{ApiClient, ClientResult, ListResult};

impl ApiClient {
    /// Orders are paginated upstream (`orders`/`total` envelope)
    pub async fn list_orders(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
        status: Option<&str>,
    ) -> ListResult<Order> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search {
            if !search.is_empty() {
                query.push(("search", search.to_string()));
            }
        }
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get_list("/admin/orders", &query, "orders").await
    }

    pub async fn get_order(&self, id: &str) -> ClientResult<Order> {
        self.get_entity(&format!("/admin/orders/{id}"), "order")
            .await
    }

    pub async fn update_order_status(
        &self,
        id: &str,
        request: &OrderStatusUpdateRequest,
    ) -> ClientResult<Order> {
        self.patch_json(&format!("/admin/orders/{id}"), request, "order")
            .await
    }
}
