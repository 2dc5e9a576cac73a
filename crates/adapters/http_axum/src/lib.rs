//! # rolodex-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for the `people` resource
//!   (`/people`, `/people/{id}`) plus a `/health` probe
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON bodies, plain-text errors)
//!
//! ## Dependency rule
//! Depends on `rolodex-app` (for port traits and services) and `rolodex-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
