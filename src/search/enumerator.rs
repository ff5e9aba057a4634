// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/search/enumerator.rs
// Version: 1.1.0
//
// This file implements candidate enumeration as a mixed-radix odometer. Byte 0
// walks the assigned range; bytes 1.. walk the whole printable alphabet with
// the last byte moving fastest. Byte 0 never receives a carry, it is stepped
// only once every free position has rolled over.
//
// Tree Location:
// - src/search/enumerator.rs (odometer enumeration)
// - Depends on: core/types

use crate::core::error::{Result, SearchError};
use crate::core::types::{ALPHABET_HIGH, ALPHABET_LOW, ALPHABET_SIZE, SearchRange};

const FIRST: u8 = ALPHABET_LOW as u8;
const LAST: u8 = (ALPHABET_HIGH - 1) as u8;

/// Enumeration state: the candidate buffer is the only position counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odometer {
    range: SearchRange,
    buf: Vec<u8>,
    exhausted: bool,
}

impl Odometer {
    /// Start at the first candidate of `range`
    pub fn new(range: SearchRange, length: usize) -> Result<Self> {
        check_range(range)?;
        if length == 0 {
            return Err(SearchError::invalid("candidate length must be at least 1"));
        }
        let mut buf = vec![FIRST; length];
        buf[0] = range.start as u8;
        Ok(Self {
            range,
            buf,
            exhausted: false,
        })
    }

    /// Continue from a previously emitted candidate
    pub fn resume(range: SearchRange, candidate: &[u8]) -> Result<Self> {
        check_range(range)?;
        if candidate.is_empty() {
            return Err(SearchError::invalid("candidate length must be at least 1"));
        }
        if !range.contains(candidate[0]) {
            return Err(SearchError::invalid(format!(
                "first byte {} is outside {}",
                candidate[0], range
            )));
        }
        if let Some(b) = candidate[1..].iter().find(|b| !(FIRST..=LAST).contains(*b)) {
            return Err(SearchError::invalid(format!("byte {} is not printable ASCII", b)));
        }
        Ok(Self {
            range,
            buf: candidate.to_vec(),
            exhausted: false,
        })
    }

    #[inline]
    pub fn current(&self) -> &[u8] {
        &self.buf
    }

    pub fn range(&self) -> SearchRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Step to the next candidate in place. Returns false once the range is
    /// exhausted; the buffer then still holds the last candidate.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        if let Some(pos) = self.buf[1..].iter().rposition(|&b| b < LAST) {
            let pos = pos + 1;
            self.buf[pos] += 1;
            self.buf[pos + 1..].fill(FIRST);
            return true;
        }

        if (self.buf[0] as u16) + 1 < self.range.end {
            self.buf[0] += 1;
            self.buf[1..].fill(FIRST);
            return true;
        }

        self.exhausted = true;
        false
    }

    /// Candidates this odometer visits from its first position
    pub fn expected_count(&self) -> u64 {
        expected_count(self.range, self.buf.len())
    }
}

/// `(end - start) * 95^(length - 1)`, saturating at u64::MAX
pub fn expected_count(range: SearchRange, length: usize) -> u64 {
    let free = length.saturating_sub(1) as u32;
    ALPHABET_SIZE
        .checked_pow(free)
        .and_then(|n| n.checked_mul(range.width() as u64))
        .unwrap_or(u64::MAX)
}

/// The candidate following `candidate`, or None at the end of `range`
pub fn next_candidate(range: SearchRange, candidate: &[u8]) -> Option<Vec<u8>> {
    let mut odometer = Odometer::resume(range, candidate).ok()?;
    if odometer.advance() {
        Some(odometer.buf)
    } else {
        None
    }
}

/// Owned iterator over every candidate of a range
pub struct Candidates {
    odometer: Odometer,
    started: bool,
}

impl Iterator for Candidates {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            if !self.odometer.advance() {
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.odometer.current().to_vec())
    }
}

/// Lazy sequence of all candidates for `(range, length)` in odometer order
pub fn enumerate(range: SearchRange, length: usize) -> Result<Candidates> {
    Ok(Candidates {
        odometer: Odometer::new(range, length)?,
        started: false,
    })
}

fn check_range(range: SearchRange) -> Result<()> {
    SearchRange::new(range.start, range.end).map(|_| ())
}


// Changelog:
// - v1.1.0: Added resume/next_candidate for restarting from any emitted candidate.
// - v1.0.0: Length-generic odometer, buffer allocated once and mutated in place.
