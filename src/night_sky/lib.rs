//! # night-sky
//!
//! A stand-in image generator for pipelines and fixture builds. It writes the
//! same small PNG to whatever path `--output` names, and accepts (and ignores)
//! any other `--flag value` pairs a runner passes along.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  main.rs                                             │
//! │  - logging setup, stderr diagnostics, exit status    │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │  api::run                                            │
//! │  - args → require --output → output::write_output    │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api` inward writes to stdout/stderr or exits the process.
//! This lib target is there so the binary and tests share code; it is not a
//! published API.
//!
//! - [`args`]: flag scanning into an [`args::ArgMap`]
//! - [`payload`]: the embedded PNG bytes
//! - [`output`]: writing the payload to disk
//! - [`api`]: the validate-and-execute entry point
//! - [`error`]: error types

pub mod api;
pub mod args;
pub mod error;
pub mod output;
pub mod payload;
