//! ID types for the Fantasy Premier League API.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for classic mini-league IDs.
///
/// Ensures league IDs are handled consistently throughout the application
/// and provides type safety to prevent mixing up league IDs with entry IDs.
///
/// # Examples
///
/// ```rust
/// use fpl_mini_league::LeagueId;
///
/// let league_id: LeagueId = "314159".parse().unwrap();
/// assert_eq!(league_id.as_u32(), 314159);
/// assert_eq!(league_id.to_string(), "314159");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub u32);

impl LeagueId {
    /// Create a new LeagueId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<u32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(FplError::InvalidLeagueId {
                input: trimmed.to_string(),
            }),
        }
    }
}

/// Type-safe wrapper for entry (team) IDs, the key for every per-manager lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standings page number (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(pub u32);

impl PageNumber {
    pub fn new(page: u32) -> Self {
        Self(page)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageNumber {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<u32>() {
            Ok(page) if page > 0 => Ok(Self(page)),
            _ => Err(FplError::InvalidPage {
                input: s.to_string(),
            }),
        }
    }
}
