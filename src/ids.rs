// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record identifier generation.
//!
//! Identifiers look like `debate_1704103200000_k3j9x0qzp`: a prefix, the
//! creation time in epoch milliseconds and a random base36 suffix.

use ring::rand::{SecureRandom, SystemRandom};

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Prefix for debate identifiers.
pub const DEBATE_PREFIX: &str = "debate";
/// Prefix for chat message identifiers.
pub const MESSAGE_PREFIX: &str = "msg";

/// Errors that can occur while generating identifiers.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("System random number generator failed")]
    Rng,
}

/// Generate a fresh identifier for a record created at `now_millis`.
pub fn generate(prefix: &str, now_millis: i64) -> Result<String, IdError> {
    let mut bytes = [0u8; SUFFIX_LEN];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| IdError::Rng)?;

    let suffix: String = bytes
        .iter()
        .map(|b| BASE36[(*b as usize) % BASE36.len()] as char)
        .collect();

    Ok(format!("{}_{}_{}", prefix, now_millis, suffix))
}
