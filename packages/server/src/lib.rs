//! Thin HTTP wrapper around the query engine.
//!
//! Everything with real logic lives in the `engine` crate; this
//! crate only marshals requests and responses, applies CORS, and
//! truncates result lists for display.

pub mod app;
pub mod config;
pub mod routes;

pub use app::build_app;
pub use config::Config;
