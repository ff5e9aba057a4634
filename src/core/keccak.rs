// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/keccak.rs
// Version: 1.0.1
//
// This file wraps the sha3 crate behind the small hash interface the search
// needs: a selectable output size and a selectable padding mode (standard
// FIPS-202 SHA3 or the original "pure" Keccak submission padding).
//
// Tree Location:
// - src/core/keccak.rs (hash primitive adapter)
// - Depends on: sha3 crate

use crate::core::error::{Result, SearchError};
use crate::core::types::{DIGEST_LEN, Digest};
use sha3::{Digest as _, Keccak256, Keccak384, Keccak512, Sha3_256, Sha3_384, Sha3_512};

/// Output sizes supported by the primitive
pub const SUPPORTED_BITS: [usize; 3] = [256, 384, 512];

/// Padding mode of the sponge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMode {
    /// FIPS-202 SHA3 (domain separation suffix 0x06)
    Standard,
    /// Keccak submission padding (suffix 0x01), as used by Ethereum
    Keccak,
}

/// Hash `input` with the requested output size and padding mode
pub fn hash(input: &[u8], bits: usize, mode: HashMode) -> Result<Vec<u8>> {
    let out = match (mode, bits) {
        (HashMode::Standard, 256) => Sha3_256::digest(input).to_vec(),
        (HashMode::Standard, 384) => Sha3_384::digest(input).to_vec(),
        (HashMode::Standard, 512) => Sha3_512::digest(input).to_vec(),
        (HashMode::Keccak, 256) => Keccak256::digest(input).to_vec(),
        (HashMode::Keccak, 384) => Keccak384::digest(input).to_vec(),
        (HashMode::Keccak, 512) => Keccak512::digest(input).to_vec(),
        _ => return Err(SearchError::HashPrimitive { bits }),
    };
    Ok(out)
}

/// Keccak-256 into a fixed array, no heap allocation
#[inline]
pub fn keccak256(input: &[u8]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Keccak256::digest(input));
    out
}


// Changelog:
// - v1.0.1: Added keccak256 fast path returning a fixed array for the hot loop.
// - v1.0.0: Initial hash adapter with SHA3 and Keccak modes at 256/384/512 bits.
