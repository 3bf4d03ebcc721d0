//! Typed decoders for the upstream API's response envelopes
//!
//! The upstream API is not consistent about list shapes: most
//! endpoints return a bare array, coupons return a
//! `{docs, totalDocs, page, totalPages}` page, orders return
//! `{orders, total, page, totalPages}`, and the current-affairs
//! listing returns an object grouped by category when unfiltered.
//! Every shape is normalized here, at the API-module boundary, to
//! `(Vec<T>, Option<PageInfo>)` so stores and handlers only ever see
//! flat lists.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::PageInfo;

/// Single-entity responses arrive as `{ "data": ... }`; some endpoints
/// skip the wrapper, so both forms decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Enveloped { data: T },
    Bare(T),
}

impl<T> ResponseBody<T> {
    pub fn into_inner(self) -> T {
        match self {
            ResponseBody::Enveloped { data } => data,
            ResponseBody::Bare(inner) => inner,
        }
    }
}

/// Every list shape the upstream API produces.
///
/// Untagged variant order matters: the paginated objects are tried
/// before the grouped map, and the bare array before both objects
/// cannot match it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Docs {
        docs: Vec<T>,
        #[serde(rename = "totalDocs")]
        total_docs: u64,
        #[serde(default = "default_page")]
        page: u32,
        #[serde(rename = "totalPages", default)]
        total_pages: u32,
        #[serde(default)]
        limit: Option<u32>,
    },
    Paged {
        orders: Vec<T>,
        total: u64,
        #[serde(default = "default_page")]
        page: u32,
        #[serde(rename = "totalPages", default)]
        total_pages: u32,
        #[serde(default)]
        limit: Option<u32>,
    },
    Plain(Vec<T>),
    /// Grouped-by-key object (current affairs grouped by category).
    /// Flattened in key order, which keeps the output deterministic.
    Grouped(BTreeMap<String, Vec<T>>),
}

fn default_page() -> u32 {
    1
}

impl<T> ListBody<T> {
    /// Flatten to `(items, pagination)`. Bare and grouped shapes carry
    /// no pagination metadata; the caller paginates client-side.
    pub fn normalize(self, default_limit: u32) -> (Vec<T>, Option<PageInfo>) {
        match self {
            ListBody::Docs {
                docs,
                total_docs,
                page,
                total_pages,
                limit,
            } => {
                let info = PageInfo {
                    page,
                    limit: limit.unwrap_or(default_limit),
                    total: total_docs,
                    total_pages,
                };
                (docs, Some(info))
            }
            ListBody::Paged {
                orders,
                total,
                page,
                total_pages,
                limit,
            } => {
                let info = PageInfo {
                    page,
                    limit: limit.unwrap_or(default_limit),
                    total,
                    total_pages,
                };
                (orders, Some(info))
            }
            ListBody::Plain(items) => (items, None),
            ListBody::Grouped(groups) => {
                let items = groups.into_values().flatten().collect();
                (items, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coupon, CurrentAffairs, Order};

    #[test]
    fn bare_array_has_no_pagination() {
        let body: ListBody<serde_json::Value> = serde_json::from_str(r#"[{"a":1},{"a":2}]"#).unwrap();
        let (items, info) = body.normalize(20);
        assert_eq!(items.len(), 2);
        assert!(info.is_none());
    }

    #[test]
    fn docs_envelope_carries_pagination() {
        let body: ListBody<Coupon> = serde_json::from_str(
            r#"{"docs":[{"_id":"c1","code":"SAVE10","discountType":"PERCENTAGE","discountValue":10}],
                "totalDocs":41,"page":2,"totalPages":3,"limit":20}"#,
        )
        .unwrap();
        let (items, info) = body.normalize(20);
        assert_eq!(items[0].code, "SAVE10");
        let info = info.unwrap();
        assert_eq!(info.page, 2);
        assert_eq!(info.total, 41);
        assert_eq!(info.total_pages, 3);
    }

    #[test]
    fn orders_envelope_carries_pagination() {
        let body: ListBody<Order> = serde_json::from_str(
            r#"{"orders":[{"_id":"o1","user":"u1","amount":499.0,"status":"PAID"}],
                "total":7,"page":1,"totalPages":1}"#,
        )
        .unwrap();
        let (items, info) = body.normalize(20);
        assert_eq!(items[0].amount, 499.0);
        assert_eq!(info.unwrap().total, 7);
    }

    #[test]
    fn grouped_object_flattens_in_key_order() {
        let body: ListBody<CurrentAffairs> = serde_json::from_str(
            r#"{"Economy":[{"_id":"e1","title":"Budget 2026"}],
                "Defence":[{"_id":"d1","title":"Exercise Update"}]}"#,
        )
        .unwrap();
        let (items, info) = body.normalize(20);
        assert!(info.is_none());
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "e1"]);
    }

    #[test]
    fn data_wrapper_unwraps_single_entities() {
        let body: ResponseBody<serde_json::Value> =
            serde_json::from_str(r#"{"data":{"_id":"x"}}"#).unwrap();
        assert_eq!(body.into_inner()["_id"], "x");

        let bare: ResponseBody<serde_json::Value> =
            serde_json::from_str(r#"{"_id":"y"}"#).unwrap();
        assert_eq!(bare.into_inner()["_id"], "y");
    }
}
