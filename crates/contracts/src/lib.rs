//! Shared domain types for the pedidos client.
//!
//! Everything here is platform-neutral: the frontend crate compiles it to
//! wasm, tests run it natively.

pub mod domain;
