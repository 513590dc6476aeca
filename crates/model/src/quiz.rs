//! Wire schema of the remote question set.

use crate::Question;
use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// Acceptable schema for a question set.
#[derive(Deserialize, Serialize)]
pub struct Quiz {
    /// Questions in the order they should be presented.
    pub questions: Vec<Entry>,
}

/// A single question record as sent by the provider.
#[derive(Deserialize, Serialize)]
pub struct Entry {
    /// Question to be displayed. Some providers omit this field entirely.
    #[serde(default)]
    pub description: String,
    /// Possible answers to select from.
    #[serde(default)]
    pub options: Vec<Choice>,
}

/// One possible answer of an [`Entry`].
#[derive(Deserialize, Serialize)]
pub struct Choice {
    pub description: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl From<Entry> for Question {
    fn from(Entry { description, options }: Entry) -> Self {
        // Only the first flagged choice counts as the answer.
        let correct = options.iter().position(|choice| choice.is_correct);
        let options = options.into_iter().map(|choice| choice.description).collect();
        Question::new(description, options, correct)
    }
}

impl From<Quiz> for Vec<Question> {
    fn from(Quiz { questions }: Quiz) -> Self {
        questions.into_iter().map(Question::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn choice(text: &str, is_correct: bool) -> Choice {
        Choice { description: text.into(), is_correct }
    }

    #[test]
    fn converts_entry_into_question() {
        let entry = Entry {
            description: "Largest planet?".into(),
            options: vec![choice("Mars", false), choice("Jupiter", true), choice("Venus", false)],
        };
        let question = Question::from(entry);
        assert_eq!(question.prompt(), "Largest planet?");
        assert_eq!(question.options(), ["Mars", "Jupiter", "Venus"]);
        assert_eq!(question.correct_option(), Some("Jupiter"));
        assert!(!question.is_answered());
    }

    #[test]
    fn keeps_first_flagged_choice() {
        let entry = Entry {
            description: "Pick".into(),
            options: vec![choice("x", false), choice("y", true), choice("z", true)],
        };
        assert_eq!(Question::from(entry).correct_option(), Some("y"));
    }

    #[test]
    fn tolerates_missing_answer_flag() {
        let entry = Entry { description: "Pick".into(), options: vec![choice("x", false)] };
        assert_eq!(Question::from(entry).correct_option(), None);
    }
}
