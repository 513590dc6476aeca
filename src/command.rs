use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A single line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Previous,
    Next,
    Submit,
    Restart,
    Help,
    Quit,
    /// Answer the current question with the option at this index.
    Choose(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCommand;

impl Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unknown command. Type `help` for the list of commands.")
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let word = line.trim().to_ascii_lowercase();
        Ok(match word.as_str() {
            "start" => Self::Start,
            "prev" | "previous" | "<" => Self::Previous,
            "next" | ">" => Self::Next,
            "submit" => Self::Submit,
            "restart" => Self::Restart,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                // Single letters pick the option with that label.
                let &[letter] = other.as_bytes() else {
                    return Err(UnknownCommand);
                };
                if !letter.is_ascii_lowercase() {
                    return Err(UnknownCommand);
                }
                Self::Choose(usize::from(letter - b'a'))
            }
        })
    }
}

pub const HELP: &str = "\
Commands:
  start        begin the quiz
  a, b, c, ... answer the current question
  prev, <      previous question
  next, >      next question
  submit       finish the quiz and show the results
  restart      start over with a fresh question set
  quit         leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_controls() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start));
        assert_eq!(" Next ".parse::<Command>(), Ok(Command::Next));
        assert_eq!(">".parse::<Command>(), Ok(Command::Next));
        assert_eq!("prev".parse::<Command>(), Ok(Command::Previous));
        assert_eq!("<".parse::<Command>(), Ok(Command::Previous));
        assert_eq!("SUBMIT".parse::<Command>(), Ok(Command::Submit));
        assert_eq!("restart".parse::<Command>(), Ok(Command::Restart));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parses_option_letters() {
        assert_eq!("a".parse::<Command>(), Ok(Command::Choose(0)));
        assert_eq!("D".parse::<Command>(), Ok(Command::Choose(3)));
        assert_eq!("z".parse::<Command>(), Ok(Command::Choose(25)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(UnknownCommand));
        assert_eq!("ab".parse::<Command>(), Err(UnknownCommand));
        assert_eq!("1".parse::<Command>(), Err(UnknownCommand));
        assert_eq!("é".parse::<Command>(), Err(UnknownCommand));
    }
}
