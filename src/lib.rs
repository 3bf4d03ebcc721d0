//! BrainBuzz admin service
//!
//! Back-office HTTP service for an educational content platform. It
//! fronts the platform's REST API with a uniform admin surface: every
//! resource listing runs through one table engine (client-side search
//! and slicing for whole-collection endpoints, pass-through for
//! upstream-paginated ones), create/edit payloads are driven by
//! declarative form schemas, and visual theme state lives in a single
//! persisted store.

pub mod client;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod store;
pub mod table;
pub mod theme;
pub mod web;
