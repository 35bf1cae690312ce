//! Upstream catalog API client.
//!
//! Defines the [`UpstreamApi`] trait that the token manager and catalog
//! service talk through, and the reqwest-backed [`HttpUpstream`]
//! implementation. Tests substitute their own implementation to script
//! upstream behavior.

pub mod client;

pub use client::{ApiResponse, HttpUpstream, UpstreamApi, XAPP_TOKEN_HEADER};
