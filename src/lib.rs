//! # expkit — stimulus sampling and session persistence
//!
//! Two independent pieces of a phrase-rating experiment:
//!
//! | Component | Binary | Module | Description |
//! |-----------|--------|--------|-------------|
//! | Stimulus sampler | `expkit-sample` | [`sampler`] | Draw N stimuli, label each with a balanced condition, write the test list |
//! | Session saver | `expkit-server` | [`server`] | `POST /save-json` writes each payload to `session-<uuid>.json` |
//!
//! The two share nothing at runtime. They only share this crate's file helpers
//! ([`storage`]), error types ([`error`]) and environment reads ([`env_config`]).
//!
//! ## Condition balancing
//!
//! The sampler builds a label pool of `N / 3` copies of each
//! [`types::Condition`], shuffles the stimuli and the pool independently,
//! keeps the first N stimuli and zips them with the pool. A pool shorter than
//! N (N not divisible by 3), or fewer than N stimuli, is an
//! [`error::DataError::IndexOutOfRange`] and nothing is written.

pub mod constants;
pub mod env_config;
pub mod error;
pub mod sampler;
pub mod server;
pub mod storage;
pub mod types;
