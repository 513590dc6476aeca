//! Render-ready snapshot of the current question.

use crate::{error, metrics::Percent};
use alloc::vec::Vec;
use model::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Plain,
    /// The option holds the correct answer of an answered question.
    Correct,
    /// The user picked this option and it differs from the correct one.
    Wrong,
}

#[derive(Debug, PartialEq, Eq)]
pub struct OptionView<'s> {
    pub label: char,
    pub text: &'s str,
    pub mark: Mark,
    /// Whether selecting this option still counts.
    pub enabled: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct QuestionView<'s> {
    /// One-based position of the question.
    pub number: usize,
    pub total: usize,
    pub prompt: &'s str,
    pub options: Vec<OptionView<'s>>,
    pub progress: Percent,
    /// Whether there is a previous question to go back to.
    pub has_previous: bool,
    /// Whether this is the last question, at which point "Submit" replaces "Next".
    pub is_last: bool,
}

/// Fraction of the quiz reached when displaying the question at `index`.
pub fn progress(index: usize, total: usize) -> Percent {
    let reached = u64::try_from(index).map_or(u64::MAX, |index| index.saturating_add(1));
    let total = u64::try_from(total).unwrap_or(u64::MAX);
    Percent::ratio(reached.min(total), total)
}

pub(crate) fn render(question: &Question, index: usize, total: usize) -> error::Result<QuestionView<'_>> {
    if question.prompt().is_empty() || question.options().is_empty() {
        return Err(error::Error::MalformedQuestion);
    }

    let answered = question.is_answered();
    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let mark = if !answered {
                Mark::Plain
            } else if question.is_correct(i) {
                Mark::Correct
            } else if question.selected() == Some(i) {
                Mark::Wrong
            } else {
                Mark::Plain
            };
            let label = Question::label(i).ok_or(error::Error::MalformedQuestion)?;
            Ok(OptionView { label, text, mark, enabled: !answered })
        })
        .collect::<error::Result<_>>()?;

    Ok(QuestionView {
        number: index + 1,
        total,
        prompt: question.prompt(),
        options,
        progress: progress(index, total),
        has_previous: index > 0,
        is_last: index + 1 >= total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::String, vec};

    fn question() -> Question {
        let options = vec![String::from("1"), String::from("2"), String::from("4")];
        Question::new(String::from("2 + 2?"), options, Some(2))
    }

    #[test]
    fn progress_counts_current_question() {
        assert_eq!(progress(0, 4).to_string(), "25.00");
        assert_eq!(progress(3, 4).to_string(), "100.00");
        assert_eq!(progress(0, 3).to_string(), "33.33");
    }

    #[test]
    fn progress_guards_against_empty_quiz() {
        assert_eq!(progress(0, 0), Percent::ZERO);
    }

    #[test]
    fn unanswered_options_are_enabled() {
        let question = question();
        let view = render(&question, 0, 2).unwrap();
        assert_eq!(view.number, 1);
        assert!(!view.has_previous);
        assert!(!view.is_last);
        assert!(view.options.iter().all(|opt| opt.enabled && opt.mark == Mark::Plain));
        let labels: Vec<_> = view.options.iter().map(|opt| opt.label).collect();
        assert_eq!(labels, ['A', 'B', 'C']);
    }

    #[test]
    fn wrong_answer_marks_both_options() {
        let mut question = question();
        question.select(0);
        let view = render(&question, 1, 2).unwrap();
        assert!(view.has_previous);
        assert!(view.is_last);
        let marks: Vec<_> = view.options.iter().map(|opt| opt.mark).collect();
        assert_eq!(marks, [Mark::Wrong, Mark::Plain, Mark::Correct]);
        assert!(view.options.iter().all(|opt| !opt.enabled));
    }

    #[test]
    fn correct_answer_marks_only_correct_option() {
        let mut question = question();
        question.select(2);
        let view = render(&question, 0, 1).unwrap();
        let marks: Vec<_> = view.options.iter().map(|opt| opt.mark).collect();
        assert_eq!(marks, [Mark::Plain, Mark::Plain, Mark::Correct]);
    }

    #[test]
    fn rejects_missing_prompt_or_options() {
        let blank = Question::new(String::new(), vec![String::from("a")], Some(0));
        assert_eq!(render(&blank, 0, 1), Err(error::Error::MalformedQuestion));
        let empty = Question::new(String::from("Why?"), vec![], None);
        assert_eq!(render(&empty, 0, 1), Err(error::Error::MalformedQuestion));
    }
}
