// ABOUTME: Structured logging setup for the progression engine
// ABOUTME: tracing-subscriber initialization driven by RUST_LOG
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Repset

//! # Logging
//!
//! Thin tracing setup for binaries that embed this crate. The engine itself
//! only emits `tracing` events; installing a subscriber is the embedder's
//! call, and these helpers make the common case one line.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize compact stdout logging, honoring `RUST_LOG`
///
/// Falls back to `info` when `RUST_LOG` is unset. Fails if a global
/// subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

/// Initialize logging at a fixed level, ignoring the environment
pub fn init_with_level(level: tracing::Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
