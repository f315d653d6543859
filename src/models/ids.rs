//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are numeric and time-based: milliseconds since the Unix epoch at
//! creation time, bumped so that they stay strictly increasing in creation
//! order. Newtype wrappers keep account and transaction ids from mixing.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw numeric id
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying number
            pub const fn as_u64(&self) -> u64 {
                self.0
            }

            /// Allocate a time-based id strictly greater than `after`
            pub fn next_after(after: Option<Self>) -> Self {
                Self(next_time_based(after.map(|id| id.0)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(TransactionId, "txn-");

/// Current wall-clock milliseconds, bumped past `last` when the clock lags
fn next_time_based(last: Option<u64>) -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    match last {
        Some(last) if now <= last => last + 1,
        _ => now,
    }
}
