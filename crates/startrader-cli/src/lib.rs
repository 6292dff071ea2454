//! Star Trader CLI library.
//!
//! This crate provides the interactive shell around `startrader-lib`: the
//! raw-input tokenizer, plain-text rendering of engine results, and the
//! command loop that runs a game to completion.

pub mod command;
pub mod output;
pub mod session;
