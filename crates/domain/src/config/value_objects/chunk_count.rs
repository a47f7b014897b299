use std::{fmt, num::NonZeroUsize};

use chunky_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Number of chunks requested for one run. Always between one and [`ChunkCount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct ChunkCount(NonZeroUsize);

impl ChunkCount {
    /// Upper bound on artifacts per run; every chunk is allocated up front.
    pub const MAX: usize = 100_000;

    pub fn new(count: usize) -> DomainResult<Self> {
        if count > Self::MAX {
            return Err(DomainError::configuration(format!(
                "chunk count must be at most {}, got {count}",
                Self::MAX
            )));
        }
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or_else(|| DomainError::configuration("chunk count must be a positive integer, got 0"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for ChunkCount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let count = usize::try_from(value).map_err(|_| {
            DomainError::configuration(format!("chunk count must be a positive integer, got {value}"))
        })?;
        Self::new(count)
    }
}

impl From<ChunkCount> for usize {
    fn from(count: ChunkCount) -> Self {
        count.get()
    }
}

impl fmt::Display for ChunkCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
