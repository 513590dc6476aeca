use core::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The question set has not arrived yet (or arrived empty).
    PrematureStart,
    /// The question set can only be loaded once per session.
    AlreadyLoaded,
    /// The session has already left the start screen.
    AlreadyStarted,
    /// The operation is only available while the quiz is running.
    Inactive,
    UnknownQuestion,
    UnknownOption,
    /// The current question lacks its prompt or options.
    MalformedQuestion,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PrematureStart => "Quiz data is still loading. Please wait...",
            Self::AlreadyLoaded => "Quiz data has already been loaded.",
            Self::AlreadyStarted => "The quiz has already started.",
            Self::Inactive => "The quiz is not running.",
            Self::UnknownQuestion => "No such question.",
            Self::UnknownOption => "No such option for this question.",
            Self::MalformedQuestion => "An error occurred while loading the question. Please try restarting.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
