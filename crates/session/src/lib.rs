#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod clock;
pub mod error;
pub mod metrics;
pub mod view;

use alloc::vec::Vec;
use clock::{Clock, Entry, EntryCountdown, Overall, OverallCountdown};
use metrics::{Percent, Report};
use model::Question;
use view::QuestionView;

pub use error::{Error, Result};

/// Points awarded for a correct answer.
pub const REWARD: i32 = 4;
/// Points deducted for an incorrect answer.
pub const PENALTY: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    /// The entry countdown is running.
    Counting,
    Active,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    /// Correct answers deserve a celebration.
    pub const fn celebrates(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Outcome of a single clock tick.
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    /// Next label of the entry countdown.
    Countdown(&'static str),
    /// The entry countdown completed and the first question is up.
    Begin,
    Remaining(Clock),
    /// Time ran out. The session is now finished.
    Expired,
}

/// A single attempt at a quiz, from the start screen to the final report.
pub struct Session {
    questions: Vec<Question>,
    index: usize,
    score: i32,
    correct: u32,
    incorrect: u32,
    limit: u32,
    phase: Phase,
    entry: EntryCountdown,
    overall: OverallCountdown,
    report: Option<Report>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(clock::TIME_LIMIT)
    }
}

impl Session {
    /// Creates an empty session with the given overall time limit (in seconds).
    pub fn new(limit: u32) -> Self {
        Self {
            questions: Vec::new(),
            index: 0,
            score: 0,
            correct: 0,
            incorrect: 0,
            limit,
            phase: Phase::NotStarted,
            entry: EntryCountdown::default(),
            overall: OverallCountdown::new(limit),
            report: None,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn score(&self) -> i32 {
        self.score
    }

    pub const fn correct(&self) -> u32 {
        self.correct
    }

    pub const fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub const fn remaining(&self) -> Clock {
        self.overall.remaining()
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Final metrics. Only available once the session is finished.
    pub const fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Populates the question set. An empty set may be replaced later; a non-empty one is final.
    pub fn load(&mut self, questions: Vec<Question>) -> Result<()> {
        if self.phase != Phase::NotStarted || !self.questions.is_empty() {
            return Err(Error::AlreadyLoaded);
        }
        log::info!("Loaded {} questions into the session.", questions.len());
        self.questions = questions;
        Ok(())
    }

    /// Leaves the start screen and begins the entry countdown.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != Phase::NotStarted {
            return Err(Error::AlreadyStarted);
        }
        if self.questions.is_empty() {
            log::debug!("Start requested before any question arrived.");
            return Err(Error::PrematureStart);
        }
        self.phase = Phase::Counting;
        Ok(())
    }

    /// Advances whichever countdown the current phase runs.
    pub fn tick(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Counting => match self.entry.tick()? {
                Entry::Show(label) => Some(Event::Countdown(label)),
                Entry::Done => {
                    self.begin();
                    Some(Event::Begin)
                }
            },
            Phase::Active => match self.overall.tick()? {
                Overall::Remaining(clock) => Some(Event::Remaining(clock)),
                Overall::Expired => {
                    log::info!("Time expired on question {}.", self.index + 1);
                    self.conclude();
                    Some(Event::Expired)
                }
            },
            Phase::NotStarted | Phase::Finished => None,
        }
    }

    fn begin(&mut self) {
        self.phase = Phase::Active;
        self.index = 0;
        self.overall.start();
        log::info!("Quiz started with {} seconds on the clock.", self.limit);
    }

    /// Enters the terminal phase. The clock is stopped before anything else.
    fn conclude(&mut self) -> &Report {
        self.overall.stop();
        self.phase = Phase::Finished;
        let report = Report::new(
            self.score,
            self.questions.len(),
            self.correct,
            self.incorrect,
            self.overall.remaining().0,
            self.limit,
        );
        log::info!("Quiz finished with a score of {}.", report.score);
        self.report.insert(report)
    }

    fn ensure_active(&self) -> Result<()> {
        if self.phase == Phase::Active {
            Ok(())
        } else {
            Err(Error::Inactive)
        }
    }

    /// Moves one question back or forth. Stays put at either end.
    pub fn navigate(&mut self, direction: Direction) -> Result<usize> {
        self.ensure_active()?;
        match direction {
            Direction::Previous if self.index > 0 => self.index -= 1,
            Direction::Next if self.index + 1 < self.questions.len() => self.index += 1,
            _ => (),
        }
        Ok(self.index)
    }

    /// Answers the question at `question` with the option at `option`. Only the first
    /// answer to a question counts; later attempts yield `None` and change nothing.
    pub fn submit_answer(&mut self, question: usize, option: usize) -> Result<Option<Feedback>> {
        self.ensure_active()?;
        let target = self.questions.get_mut(question).ok_or(Error::UnknownQuestion)?;
        if option >= target.options().len() {
            return Err(Error::UnknownOption);
        }

        let Some(is_correct) = target.select(option) else {
            log::debug!("Ignoring repeated answer to question {}.", question + 1);
            return Ok(None);
        };

        Ok(Some(if is_correct {
            self.score += REWARD;
            self.correct += 1;
            Feedback::Correct
        } else {
            self.score -= PENALTY;
            self.incorrect += 1;
            Feedback::Incorrect
        }))
    }

    /// Answers the question currently on display.
    pub fn answer(&mut self, option: usize) -> Result<Option<Feedback>> {
        self.submit_answer(self.index, option)
    }

    /// Submits the quiz early (or on the last question) and computes the report.
    pub fn finish(&mut self) -> Result<&Report> {
        self.ensure_active()?;
        Ok(self.conclude())
    }

    pub fn progress(&self) -> Percent {
        view::progress(self.index, self.questions.len())
    }

    /// Snapshot of the question on display.
    pub fn view(&self) -> Result<QuestionView<'_>> {
        self.ensure_active()?;
        let question = self.questions.get(self.index).ok_or(Error::MalformedQuestion)?;
        view::render(question, self.index, self.questions.len())
    }
}
