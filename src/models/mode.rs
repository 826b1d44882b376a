use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::question::BatchId;

/// Batches tracked for completion and offered as practice modes.
pub const TRACKED_BATCHES: [BatchId; 3] = [1, 2, 3];

/// Which subset of the bank is being practiced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Full,
    Batch1,
    Batch2,
    Batch3,
    /// Only questions that were attempted and never answered correctly.
    Review,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mode: {0}. Expected full, batch-1, batch-2, batch-3 or review.")]
pub struct InvalidModeError(pub String);

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Full,
        Mode::Batch1,
        Mode::Batch2,
        Mode::Batch3,
        Mode::Review,
    ];

    /// The batch this mode is restricted to, if any.
    pub fn batch_id(self) -> Option<BatchId> {
        match self {
            Mode::Batch1 => Some(1),
            Mode::Batch2 => Some(2),
            Mode::Batch3 => Some(3),
            Mode::Full | Mode::Review => None,
        }
    }

    /// Human readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Full => "Full test",
            Mode::Batch1 => "Batch 1",
            Mode::Batch2 => "Batch 2",
            Mode::Batch3 => "Batch 3",
            Mode::Review => "Review (failed only)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.batch_id() {
            Some(id) => write!(f, "batch-{}", id),
            None if *self == Mode::Full => write!(f, "full"),
            None => write!(f, "review"),
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "full" => Ok(Mode::Full),
            "review" => Ok(Mode::Review),
            "batch-1" | "lote1" => Ok(Mode::Batch1),
            "batch-2" | "lote2" => Ok(Mode::Batch2),
            "batch-3" | "lote3" => Ok(Mode::Batch3),
            _ => Err(InvalidModeError(s.to_string())),
        }
    }
}
