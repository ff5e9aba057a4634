// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/pipeline.rs
// Version: 1.0.0
//
// This file implements the double-hash digest pipeline compared against the
// target: keccak256(keccak256(candidate)).
//
// Tree Location:
// - src/core/pipeline.rs (digest pipeline)
// - Depends on: core/keccak

use crate::core::error::{Result, SearchError};
use crate::core::keccak::{self, HashMode};
use crate::core::types::{DIGEST_LEN, Digest};
use tracing::debug;

const LOG_TARGET: &str = "sha3run::pipeline";

/// Double Keccak-256 of a candidate
#[inline]
pub fn pipeline(candidate: &[u8]) -> Digest {
    let first = keccak::keccak256(candidate);
    keccak::keccak256(&first)
}

/// Configured pipeline; checked against the primitive once at startup
#[derive(Debug, Clone, Copy)]
pub struct DigestPipeline {
    bits: usize,
    mode: HashMode,
}

impl DigestPipeline {
    pub fn new(bits: usize, mode: HashMode) -> Result<Self> {
        // The comparison buffer is a fixed 32-byte digest
        if bits != DIGEST_LEN * 8 {
            return Err(SearchError::HashPrimitive { bits });
        }
        keccak::hash(&[], bits, mode)?;
        debug!(target: LOG_TARGET, "Digest pipeline ready: {} bits, {:?}", bits, mode);
        Ok(Self { bits, mode })
    }

    /// The pipeline used by the search: Keccak mode, 256-bit output
    pub fn keccak256() -> Self {
        Self {
            bits: 256,
            mode: HashMode::Keccak,
        }
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn mode(&self) -> HashMode {
        self.mode
    }

    #[inline]
    pub fn digest(&self, candidate: &[u8]) -> Digest {
        match self.mode {
            HashMode::Keccak => pipeline(candidate),
            HashMode::Standard => {
                use sha3::{Digest as _, Sha3_256};
                let first = Sha3_256::digest(candidate);
                let mut out = [0u8; DIGEST_LEN];
                out.copy_from_slice(&Sha3_256::digest(first));
                out
            }
        }
    }
}

impl Default for DigestPipeline {
    fn default() -> Self {
        Self::keccak256()
    }
}
