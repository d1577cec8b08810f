//! StyleSwitch - Rust Implementation
//!
//! A small storefront site with three switchable visual themes.
//!
//! This library provides:
//! - Theme selection with a persisted preference and a delayed commit
//! - Home, About and Contact pages (Dioxus, compiled to WASM)
//! - Featured products fetched from a public catalog
//! - A static host that serves the compiled client bundle

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between native tests and the WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
