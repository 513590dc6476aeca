//! Plain-text rendering of the session for a line-oriented terminal.

use core::fmt::Display;
use session::{
    clock::Clock,
    metrics::{Percent, Report},
    view::{Mark, QuestionView},
    Feedback, PENALTY, REWARD,
};
use std::io::{self, Write};

const BAR_WIDTH: u32 = 20;

pub fn progress_bar(progress: Percent) -> String {
    let filled = (progress.hundredths().min(100 * 100) * BAR_WIDTH / (100 * 100)) as usize;
    let empty = BAR_WIDTH as usize - filled;
    format!("[{}{}] {progress}%", "#".repeat(filled), "-".repeat(empty))
}

pub fn question(out: &mut impl Write, view: &QuestionView<'_>) -> io::Result<()> {
    writeln!(out, "{}", progress_bar(view.progress))?;
    writeln!(out, "Question {}/{}: {}", view.number, view.total, view.prompt)?;
    for option in &view.options {
        let mark = match option.mark {
            Mark::Plain => "",
            Mark::Correct => "  [correct]",
            Mark::Wrong => "  [wrong]",
        };
        writeln!(out, "  {}. {}{mark}", option.label, option.text)?;
    }

    let mut controls = Vec::with_capacity(3);
    let answerable = view.options.iter().any(|option| option.enabled);
    let last = view.options.last().map(|option| option.label.to_ascii_lowercase());
    let range = match last {
        Some('a') => String::from("a"),
        Some(last) => format!("a-{last}"),
        None => String::new(),
    };
    if answerable {
        controls.push(range);
    }
    if view.has_previous {
        controls.push(String::from("prev"));
    }
    controls.push(String::from(if view.is_last { "submit" } else { "next" }));
    writeln!(out, "({})", controls.join(" | "))
}

pub fn countdown(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{label}")
}

pub fn clock(out: &mut impl Write, clock: Clock) -> io::Result<()> {
    writeln!(out, "Time Left: {clock}")
}

/// Announcing every second would drown the question, so only whole minutes and
/// the final ten seconds are shown.
pub const fn should_announce(clock: Clock) -> bool {
    clock.seconds() == 0 || clock.0 <= 10
}

pub fn feedback(out: &mut impl Write, feedback: Feedback) -> io::Result<()> {
    match feedback {
        Feedback::Correct => writeln!(out, "Correct! +{REWARD}"),
        Feedback::Incorrect => writeln!(out, "Wrong! -{PENALTY}"),
    }?;
    if feedback.celebrates() {
        writeln!(out, "*  .  *  CONGRATULATIONS  *  .  *")?;
    }
    Ok(())
}

pub fn report(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "Accuracy: {}%", report.accuracy)?;
    writeln!(out, "Speed: {}/100", report.speed)?;
    writeln!(out, "Total Score: {}", report.score)?;
    writeln!(out, "Questions: {}", report.total)?;
    writeln!(out, "Correct: {}", report.correct)?;
    writeln!(out, "Incorrect: {}", report.incorrect)?;
    writeln!(out, "Type `restart` to play again or `quit` to leave.")
}

pub fn message(out: &mut impl Write, message: impl Display) -> io::Result<()> {
    writeln!(out, "! {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::view::OptionView;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn option(label: char, text: &str, mark: Mark, enabled: bool) -> OptionView<'_> {
        OptionView { label, text, mark, enabled }
    }

    #[test]
    fn draws_progress_bar() {
        assert_eq!(progress_bar(Percent::ZERO), "[--------------------] 0.00%");
        assert_eq!(progress_bar(Percent::ratio(1, 2)), "[##########----------] 50.00%");
        assert_eq!(progress_bar(Percent::ratio(1, 1)), "[####################] 100.00%");
    }

    #[test]
    fn renders_unanswered_question() {
        let view = QuestionView {
            number: 1,
            total: 3,
            prompt: "Capital of France?",
            options: vec![
                option('A', "Paris", Mark::Plain, true),
                option('B', "Lyon", Mark::Plain, true),
                option('C', "Nice", Mark::Plain, true),
            ],
            progress: Percent::ratio(1, 3),
            has_previous: false,
            is_last: false,
        };
        let text = render(|out| question(out, &view));
        assert!(text.contains("Question 1/3: Capital of France?"));
        assert!(text.contains("  A. Paris\n"));
        assert!(text.contains("(a-c | next)"));
    }

    #[test]
    fn renders_answered_last_question() {
        let view = QuestionView {
            number: 2,
            total: 2,
            prompt: "Capital of Italy?",
            options: vec![option('A', "Rome", Mark::Correct, false), option('B', "Milan", Mark::Wrong, false)],
            progress: Percent::ratio(2, 2),
            has_previous: true,
            is_last: true,
        };
        let text = render(|out| question(out, &view));
        assert!(text.contains("  A. Rome  [correct]\n"));
        assert!(text.contains("  B. Milan  [wrong]\n"));
        assert!(text.contains("(prev | submit)"));
    }

    #[test]
    fn announces_minutes_and_final_seconds() {
        assert!(should_announce(Clock(900)));
        assert!(should_announce(Clock(840)));
        assert!(!should_announce(Clock(899)));
        assert!(!should_announce(Clock(11)));
        assert!(should_announce(Clock(10)));
        assert!(should_announce(Clock(1)));
    }

    #[test]
    fn celebrates_correct_answers_only() {
        let correct = render(|out| feedback(out, Feedback::Correct));
        assert!(correct.starts_with("Correct! +4\n"));
        assert!(correct.contains("CONGRATULATIONS"));
        let wrong = render(|out| feedback(out, Feedback::Incorrect));
        assert_eq!(wrong, "Wrong! -1\n");
    }

    #[test]
    fn renders_report() {
        let report = Report::new(3, 2, 1, 1, 450, 900);
        let text = render(|out| super::report(out, &report));
        assert!(text.contains("Accuracy: 50.00%\n"));
        assert!(text.contains("Speed: 50.00/100\n"));
        assert!(text.contains("Total Score: 3\n"));
        assert!(text.contains("Questions: 2\nCorrect: 1\nIncorrect: 1\n"));
    }
}
