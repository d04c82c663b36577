//! Core types and trait definitions for the Enquete poll service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::PollStore`]; the server depends on
//! that abstraction and on the pure tally functions in [`tally`].

// We intentionally use native `async fn` in traits.
#![allow(async_fn_in_trait)]

pub mod candidate;
pub mod chart;
pub mod config;
pub mod error;
pub mod store;
pub mod tally;
pub mod token;

pub use error::{Error, Result};
