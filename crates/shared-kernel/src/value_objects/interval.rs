use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use super::counts::LineCount;
use crate::error::PresentationError;

/// Number of lines between two progress notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressInterval(NonZeroU64);

impl ProgressInterval {
    pub const DEFAULT_LINES: u64 = 100_000;

    pub const fn new(lines: NonZeroU64) -> Self {
        Self(lines)
    }

    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// `true` when `count` is a non-zero multiple of the interval.
    pub const fn is_due(self, count: LineCount) -> bool {
        let n = count.value();
        n != 0 && n % self.0.get() == 0
    }
}

impl Default for ProgressInterval {
    fn default() -> Self {
        Self(NonZeroU64::MIN.saturating_add(Self::DEFAULT_LINES - 1))
    }
}

impl FromStr for ProgressInterval {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| PresentationError::InvalidValue {
            flag: "--progress-interval".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let n: u64 = s.trim().replace('_', "").parse().map_err(|_| invalid("not a number"))?;
        NonZeroU64::new(n).map(Self).ok_or_else(|| invalid("must be greater than zero"))
    }
}

impl fmt::Display for ProgressInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
