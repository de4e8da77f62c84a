//! Shared primitives: geometry re-exports, tour keys, errors and provider configuration.

pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod error;
