//! Request extractors and validation
//!
//! Listing parameters are validated at the boundary so handlers only
//! ever see a page >= 1 and a limit from the configured options. The
//! defaults and the limit menu come from `config.listing`, not from
//! compile-time constants.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::responses::ApiResponse;
use super::AppState;
use crate::config::ListingConfig;
use crate::table::TableState;

/// Raw query-string shape before defaults and validation are applied
#[derive(Debug, Clone, Deserialize)]
struct RawTableQuery {
    page: Option<u32>,
    limit: Option<u32>,
    search: Option<String>,
}

/// Validated listing parameters: page, limit and the free-text search
/// term
#[derive(Debug, Clone)]
pub struct TableQueryParams {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
}

impl TableQueryParams {
    fn resolve(raw: RawTableQuery, listing: &ListingConfig) -> Result<Self, String> {
        let page = raw.page.unwrap_or(1);
        if page < 1 {
            return Err("Page must be >= 1".to_string());
        }
        let limit = raw.limit.unwrap_or(listing.default_limit);
        if !listing.limit_options.contains(&limit) {
            return Err(format!("Limit must be one of {:?}", listing.limit_options));
        }
        Ok(Self {
            page,
            limit,
            search: raw.search,
        })
    }

    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    /// Local table state for a client-mode listing. The search term is
    /// applied before the page so an explicit page within a search
    /// still lands where the caller asked.
    pub fn table_state(&self) -> TableState {
        let mut state = TableState::new();
        state.set_limit(self.limit);
        if let Some(search) = &self.search {
            state.set_search(search.clone());
        }
        state.set_page(self.page);
        state
    }
}

#[async_trait]
impl FromRequestParts<AppState> for TableQueryParams {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(raw): Query<RawTableQuery> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(
                        "Invalid listing parameters".to_string(),
                    )),
                )
                    .into_response()
            })?;

        Self::resolve(raw, &state.config.listing).map_err(|message| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(message)),
            )
                .into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> ListingConfig {
        ListingConfig {
            default_limit: 20,
            limit_options: vec![20, 50, 100],
        }
    }

    fn raw(page: Option<u32>, limit: Option<u32>) -> RawTableQuery {
        RawTableQuery {
            page,
            limit,
            search: None,
        }
    }

    #[test]
    fn defaults_come_from_listing_config() {
        let params = TableQueryParams::resolve(raw(None, None), &listing()).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
    }

    #[test]
    fn off_menu_limits_are_rejected() {
        assert!(TableQueryParams::resolve(raw(None, Some(37)), &listing()).is_err());
        assert!(TableQueryParams::resolve(raw(Some(0), None), &listing()).is_err());
    }

    #[test]
    fn configured_options_are_honored() {
        let custom = ListingConfig {
            default_limit: 25,
            limit_options: vec![25, 200],
        };
        let params = TableQueryParams::resolve(raw(None, None), &custom).unwrap();
        assert_eq!(params.limit, 25);
        assert!(TableQueryParams::resolve(raw(None, Some(200)), &custom).is_ok());
        assert!(TableQueryParams::resolve(raw(None, Some(20)), &custom).is_err());
    }

    #[test]
    fn table_state_applies_search_before_page() {
        let params = TableQueryParams {
            page: 3,
            limit: 50,
            search: Some("history".to_string()),
        };
        let state = params.table_state();
        assert_eq!(state.page(), 3);
        assert_eq!(state.limit(), 50);
        assert_eq!(state.search(), "history");
    }
}
