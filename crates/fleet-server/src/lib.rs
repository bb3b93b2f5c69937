//! Shared library surface for fleet server utilities and tests.

pub mod api;
pub mod config;
pub mod loops;
pub mod seed;
pub mod state;
