//! Core types and policy for the Lustre listing engine.
//!
//! Everything in this crate is a pure, synchronous function over an
//! externally-supplied job record and an injectable "current time" — no HTTP,
//! no database, no hidden state. All other crates depend on it; it depends on
//! nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod job;
pub mod route;
pub mod slug;
pub mod source;
pub mod visibility;
