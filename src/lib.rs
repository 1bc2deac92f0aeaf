//! Typed view layer over the space-data REST API.
//!
//! [`clients::SpaceApiClient`] fetches and decodes upstream records,
//! [`views`] holds the latest snapshots behind stale-response guards, and
//! [`filter`], [`pagination`], [`metrics`] and [`layout`] derive what each page
//! shows. [`routes::build_router`] serves those views as JSON.

pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod layout;
pub mod metrics;
pub mod pagination;
pub mod routes;
pub mod utils;
pub mod views;
