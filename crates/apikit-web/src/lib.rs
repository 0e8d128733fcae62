//! # apikit-web
//!
//! Axum integration for Apikit services: trace-id propagation and
//! request/response logging middleware, a validated-JSON extractor, and the
//! shared route/role constants. The response envelopes and the
//! error-to-response translation live in [`apikit_core`].

pub mod constant;
pub mod extractors;
pub mod middleware;

pub use extractors::ValidatedJson;
