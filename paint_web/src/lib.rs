//! # paint_web - Estimate Form Server
//!
//! Thin HTTP front end over `paint_core`. It serves the blank estimate
//! form, coerces a submitted form into an [`paint_core::EstimateRequest`],
//! prices it, and renders the result page. Rejected submissions come back
//! as the form, pre-filled, with a 400 status and the error shown.
//!
//! ## Modules
//!
//! - [`config`] - Bind address and log level from flags/environment
//! - [`router`] - Routes, handlers, and shared state
//! - [`pages`] - Server-rendered HTML
//! - [`error`] - Error responses

pub mod config;
pub mod error;
pub mod pages;
pub mod router;

pub use config::ServerConfig;
pub use router::{build_router, AppState};
