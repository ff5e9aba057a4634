// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.1
//
// This file provides utility functions for formatting rates, durations and
// large counts in log output.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting search statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format hashrate in appropriate units (H/s, KH/s, MH/s, GH/s)
    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000_000.0 {
            format!("{:.2} GH/s", hashrate / 1_000_000_000.0)
        } else if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{:.2} KH/s", hashrate / 1_000.0)
        } else {
            format!("{:.2} H/s", hashrate)
        }
    }

    /// Format an estimate in seconds as days/hours/minutes/seconds
    pub fn format_eta(seconds: f64) -> String {
        if !seconds.is_finite() {
            return "unknown".to_string();
        }
        let secs = seconds.max(0.0).round() as u64;
        let (days, rem) = (secs / 86_400, secs % 86_400);
        let (hours, rem) = (rem / 3600, rem % 3600);
        let (mins, secs) = (rem / 60, rem % 60);
        if days > 0 {
            format!("{}d {}h {}m", days, hours, mins)
        } else if hours > 0 {
            format!("{}h {}m {}s", hours, mins, secs)
        } else if mins > 0 {
            format!("{}m {}s", mins, secs)
        } else {
            format!("{}s", secs)
        }
    }

    /// Format an elapsed duration the same way as an estimate
    pub fn format_duration(duration: Duration) -> String {
        Self::format_eta(duration.as_secs_f64())
    }

    /// Format large numbers with suffixes (K, M, B, T)
    pub fn format_number(num: f64) -> String {
        if num >= 1_000_000_000_000.0 {
            format!("{:.1}T", num / 1_000_000_000_000.0)
        } else if num >= 1_000_000_000.0 {
            format!("{:.1}B", num / 1_000_000_000.0)
        } else if num >= 1_000_000.0 {
            format!("{:.1}M", num / 1_000_000.0)
        } else if num >= 1_000.0 {
            format!("{:.1}K", num / 1_000.0)
        } else {
            format!("{:.0}", num)
        }
    }
}


// Changelog:
// - v1.0.1: Added format_eta; counts take f64 since estimates exceed u64 for long candidates.
// - v1.0.0: Hashrate, duration and number formatting.
