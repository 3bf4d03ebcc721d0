//! Form-schema handlers
//!
//! The admin frontend renders every create/edit modal from a schema
//! served here. Select options are filled from the sibling resource
//! stores, so dropdowns reflect whatever the stores last fetched;
//! enum-backed fields carry their fixed options inline.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::errors::{AppError, AppResult};
use crate::forms::{schemas, FieldKind, FormSchema, SelectOption};
use crate::store::Stores;
use crate::web::responses::ok;
use crate::web::AppState;

pub async fn get_form_schema(
    Path(entity): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    let mut schema = match entity.as_str() {
        "category" => schemas::category(),
        "subcategory" => schemas::sub_category(),
        "course" => schemas::course(),
        "coupon" => schemas::coupon(),
        "current-affairs" => schemas::current_affairs(),
        "daily-quiz" => schemas::daily_quiz(),
        "ebook" => schemas::ebook(),
        "live-class" => schemas::live_class(),
        "test-series" => schemas::test_series(),
        "order" => schemas::order_details(),
        _ => return Err(AppError::not_found("form schema", entity)),
    };
    populate_options(&mut schema, &state.stores).await;
    Ok(ok(schema))
}

fn static_options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// Fill every select field's options from the store (or enum) that
/// backs it
pub(crate) async fn populate_options(schema: &mut FormSchema, stores: &Stores) {
    let entity = schema.entity;
    for field in &mut schema.fields {
        if field.kind != FieldKind::Select {
            continue;
        }
        field.options = match field.name {
            // Current-affairs items reference their own category set
            "category" if entity == "current affairs" => stores
                .current_affairs_categories
                .snapshot()
                .await
                .items
                .iter()
                .map(|c| SelectOption {
                    value: c.id.clone(),
                    label: c.name.clone(),
                })
                .collect(),
            "category" => stores
                .categories
                .snapshot()
                .await
                .items
                .iter()
                .map(|c| SelectOption {
                    value: c.id.clone(),
                    label: c.name.clone(),
                })
                .collect(),
            "subCategory" => stores
                .sub_categories
                .snapshot()
                .await
                .items
                .iter()
                .map(|s| SelectOption {
                    value: s.id.clone(),
                    label: s.name.clone(),
                })
                .collect(),
            "language" => stores
                .languages
                .snapshot()
                .await
                .items
                .iter()
                .map(|l| SelectOption {
                    value: l.id.clone(),
                    label: l.name.clone(),
                })
                .collect(),
            "validity" => stores
                .validities
                .snapshot()
                .await
                .items
                .iter()
                .map(|v| SelectOption {
                    value: v.id.clone(),
                    label: v.name.clone(),
                })
                .collect(),
            "course" => stores
                .courses
                .snapshot()
                .await
                .items
                .iter()
                .map(|c| SelectOption {
                    value: c.id.clone(),
                    label: c.title.clone(),
                })
                .collect(),
            "accessType" => static_options(&[("FREE", "Free"), ("PAID", "Paid")]),
            "discountType" => static_options(&[("PERCENTAGE", "Percentage"), ("FLAT", "Flat")]),
            "status" => static_options(&[
                ("PENDING", "Pending"),
                ("PAID", "Paid"),
                ("FAILED", "Failed"),
                ("REFUNDED", "Refunded"),
            ]),
            _ => Vec::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CurrentAffairsCategory};

    #[tokio::test]
    async fn select_options_come_from_sibling_stores() {
        let stores = Stores::new();
        stores
            .categories
            .upsert(Category {
                id: "cat-1".to_string(),
                name: "UPSC".to_string(),
                thumbnail_url: None,
                created_at: None,
                updated_at: None,
            })
            .await;

        let mut schema = schemas::course();
        populate_options(&mut schema, &stores).await;

        let category = schema.field("category").unwrap();
        assert_eq!(category.options.len(), 1);
        assert_eq!(category.options[0].value, "cat-1");
        assert_eq!(category.options[0].label, "UPSC");

        let access = schema.field("accessType").unwrap();
        assert_eq!(access.options.len(), 2);
        assert_eq!(access.options[0].value, "FREE");
    }

    #[tokio::test]
    async fn current_affairs_category_uses_its_own_store() {
        let stores = Stores::new();
        stores
            .current_affairs_categories
            .upsert(CurrentAffairsCategory {
                id: "ca-cat-1".to_string(),
                name: "International".to_string(),
            })
            .await;

        let mut schema = schemas::current_affairs();
        populate_options(&mut schema, &stores).await;
        let category = schema.field("category").unwrap();
        assert_eq!(category.options.len(), 1);
        assert_eq!(category.options[0].value, "ca-cat-1");
    }
}
