use core::fmt::{self, Display};

/// A percentage kept in hundredths, i.e. rounded to two decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(u32);

impl Percent {
    pub const ZERO: Self = Self(0);

    /// Computes `part / whole * 100`, rounding half-up to two decimals. A zero
    /// `whole` yields zero rather than an arithmetic error.
    pub fn ratio(part: u64, whole: u64) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let doubled = part.saturating_mul(2 * 100 * 100);
        let hundredths = (doubled + whole) / (2 * whole);
        Self(u32::try_from(hundredths).unwrap_or(u32::MAX))
    }

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Summary of a finished session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub score: i32,
    /// Number of questions in the session.
    pub total: usize,
    pub correct: u32,
    pub incorrect: u32,
    /// Share of all questions answered correctly.
    pub accuracy: Percent,
    /// Share of the time limit left on the clock.
    pub speed: Percent,
}

impl Report {
    pub fn new(score: i32, total: usize, correct: u32, incorrect: u32, remaining: u32, limit: u32) -> Self {
        let total_u64 = u64::try_from(total).unwrap_or(u64::MAX);
        Self {
            score,
            total,
            correct,
            incorrect,
            accuracy: Percent::ratio(correct.into(), total_u64),
            speed: Percent::ratio(remaining.into(), limit.into()),
        }
    }
}
