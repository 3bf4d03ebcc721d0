//! Web layer module
//!
//! HTTP interface for the admin service. Handlers are thin: they
//! delegate to the API client and the resource stores, and every list
//! endpoint goes through the shared table engine so pagination, search
//! and page-window behavior are identical everywhere.

use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::client::ApiClient;
use crate::config::Config;
use crate::store::Stores;
use crate::theme::ThemeStore;

pub mod extractors;
pub mod handlers;
pub mod responses;

// Re-export commonly used types
pub use extractors::TableQueryParams;
pub use responses::{handle_error, ApiResponse, PaginatedResponse};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: ApiClient,
    pub stores: Stores,
    pub theme: ThemeStore,
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(
        config: Config,
        client: ApiClient,
        stores: Stores,
        theme: ThemeStore,
    ) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = Self::create_router(AppState {
            config,
            client,
            stores,
            theme,
        });

        Ok(Self { app, addr })
    }

    /// Create the router with all routes and middleware
    pub fn create_router(state: AppState) -> Router {
        Router::new()
            // Health check endpoint (no auth required)
            .route("/health", get(handlers::health::health))
            // API v1 routes
            .nest("/api/v1", Self::api_v1_routes())
            // Middleware (applied in reverse order)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            // Shared state
            .with_state(state)
    }

    fn api_v1_routes() -> Router<AppState> {
        Router::new()
            // Catalog taxonomy
            .route(
                "/categories",
                get(handlers::catalog::list_categories).post(handlers::catalog::create_category),
            )
            .route(
                "/categories/:id",
                put(handlers::catalog::update_category).delete(handlers::catalog::delete_category),
            )
            .route(
                "/subcategories",
                get(handlers::catalog::list_sub_categories)
                    .post(handlers::catalog::create_sub_category),
            )
            .route(
                "/subcategories/:id",
                put(handlers::catalog::update_sub_category)
                    .delete(handlers::catalog::delete_sub_category),
            )
            .route(
                "/languages",
                get(handlers::catalog::list_languages).post(handlers::catalog::create_language),
            )
            .route(
                "/languages/:id",
                put(handlers::catalog::update_language).delete(handlers::catalog::delete_language),
            )
            .route(
                "/validities",
                get(handlers::catalog::list_validities).post(handlers::catalog::create_validity),
            )
            .route(
                "/validities/:id",
                put(handlers::catalog::update_validity).delete(handlers::catalog::delete_validity),
            )
            // Courses
            .route(
                "/courses",
                get(handlers::content::list_courses).post(handlers::content::create_course),
            )
            .route(
                "/courses/:id",
                put(handlers::content::update_course).delete(handlers::content::delete_course),
            )
            .route(
                "/courses/:id/all-in-one",
                get(handlers::content::get_course_all_in_one),
            )
            // E-books
            .route(
                "/ebooks",
                get(handlers::content::list_ebooks).post(handlers::content::create_ebook),
            )
            .route(
                "/ebooks/:id",
                put(handlers::content::update_ebook).delete(handlers::content::delete_ebook),
            )
            // Live classes
            .route(
                "/live-classes",
                get(handlers::content::list_live_classes)
                    .post(handlers::content::create_live_class),
            )
            .route(
                "/live-classes/:id",
                put(handlers::content::update_live_class)
                    .delete(handlers::content::delete_live_class),
            )
            // Current affairs
            .route(
                "/current-affairs",
                get(handlers::content::list_current_affairs)
                    .post(handlers::content::create_current_affairs),
            )
            .route(
                "/current-affairs/:id",
                put(handlers::content::update_current_affairs)
                    .delete(handlers::content::delete_current_affairs),
            )
            .route(
                "/current-affairs-categories",
                get(handlers::content::list_current_affairs_categories)
                    .post(handlers::content::create_current_affairs_category),
            )
            .route(
                "/current-affairs-categories/:id",
                axum::routing::delete(handlers::content::delete_current_affairs_category),
            )
            // Daily quizzes
            .route(
                "/daily-quizzes",
                get(handlers::content::list_daily_quizzes)
                    .post(handlers::content::create_daily_quiz),
            )
            .route(
                "/daily-quizzes/:id",
                put(handlers::content::update_daily_quiz)
                    .delete(handlers::content::delete_daily_quiz),
            )
            // Test series and its nested tree
            .route(
                "/test-series",
                get(handlers::test_series::list_test_series)
                    .post(handlers::test_series::create_test_series),
            )
            .route(
                "/test-series/:id",
                get(handlers::test_series::get_test_series)
                    .put(handlers::test_series::update_test_series)
                    .delete(handlers::test_series::delete_test_series),
            )
            .route(
                "/test-series/:id/tests",
                post(handlers::test_series::add_test),
            )
            .route(
                "/test-series/:id/tests/:test_id",
                put(handlers::test_series::update_test)
                    .delete(handlers::test_series::delete_test),
            )
            .route(
                "/test-series/:id/tests/:test_id/sections",
                post(handlers::test_series::add_section),
            )
            .route(
                "/test-series/:id/tests/:test_id/sections/:section_id",
                put(handlers::test_series::update_section)
                    .delete(handlers::test_series::delete_section),
            )
            .route(
                "/test-series/:id/tests/:test_id/sections/:section_id/questions",
                post(handlers::test_series::add_question),
            )
            .route(
                "/test-series/:id/tests/:test_id/sections/:section_id/questions/:question_id",
                put(handlers::test_series::update_question)
                    .delete(handlers::test_series::delete_question),
            )
            // Commerce
            .route(
                "/coupons",
                get(handlers::commerce::list_coupons).post(handlers::commerce::create_coupon),
            )
            .route(
                "/coupons/:id",
                put(handlers::commerce::update_coupon).delete(handlers::commerce::delete_coupon),
            )
            .route("/orders", get(handlers::commerce::list_orders))
            .route(
                "/orders/:id",
                get(handlers::commerce::get_order)
                    .patch(handlers::commerce::update_order_status),
            )
            // Form schemas for the admin modals
            .route("/forms/:entity", get(handlers::forms::get_form_schema))
            // Theme
            .route(
                "/theme",
                get(handlers::theme::get_theme).put(handlers::theme::put_theme),
            )
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        info!("Web server listening on {}", self.addr);
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }
}
