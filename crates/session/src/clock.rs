//! Tick-driven countdowns. Both are advanced by an external one-second timer, which
//! keeps them deterministic under test.

use core::fmt::{self, Display};

/// Labels shown by the [`EntryCountdown`], one per tick.
pub const ENTRY_SEQUENCE: [&str; 4] = ["3", "2", "1", "Go"];

/// Default overall time limit: fifteen minutes.
pub const TIME_LIMIT: u32 = 15 * 60;

/// Remaining seconds, displayed as `MM:SS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Clock(pub u32);

impl Clock {
    pub const fn minutes(self) -> u32 {
        self.0 / 60
    }

    pub const fn seconds(self) -> u32 {
        self.0 % 60
    }
}

impl Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Entry {
    Show(&'static str),
    Done,
}

/// The "3, 2, 1, Go" countdown before the quiz. The tick after "Go" completes it;
/// it cannot be restarted.
#[derive(Debug, Default)]
pub struct EntryCountdown {
    ticks: usize,
}

impl EntryCountdown {
    pub fn tick(&mut self) -> Option<Entry> {
        let step = self.ticks;
        if step > ENTRY_SEQUENCE.len() {
            return None;
        }
        self.ticks += 1;
        Some(match ENTRY_SEQUENCE.get(step) {
            Some(&label) => Entry::Show(label),
            None => Entry::Done,
        })
    }

    pub const fn is_done(&self) -> bool {
        self.ticks > ENTRY_SEQUENCE.len()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Overall {
    Remaining(Clock),
    Expired,
}

/// The session-wide countdown. Stops itself upon expiry.
#[derive(Debug)]
pub struct OverallCountdown {
    remaining: u32,
    running: bool,
}

impl OverallCountdown {
    pub const fn new(limit: u32) -> Self {
        Self { remaining: limit, running: false }
    }

    pub fn start(&mut self) {
        self.running = self.remaining > 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn remaining(&self) -> Clock {
        Clock(self.remaining)
    }

    pub fn tick(&mut self) -> Option<Overall> {
        if !self.running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return Some(Overall::Remaining(Clock(self.remaining)));
        }

        self.running = false;
        Some(Overall::Expired)
    }
}
