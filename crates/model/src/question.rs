use alloc::{string::String, vec::Vec};

/// A question with its options and the user's (single) selection.
///
/// Everything except the selection is immutable once constructed. The
/// selection can only be made once: the first answer is final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    /// Index of the option holding the correct answer.
    correct: Option<usize>,
    /// Index of the option picked by the user.
    selected: Option<usize>,
}

impl Question {
    pub fn new(prompt: String, options: Vec<String>, correct: Option<usize>) -> Self {
        let correct = correct.filter(|&index| index < options.len());
        Self { prompt, options, correct, selected: None }
    }

    /// Positional label of an option, starting from `A`.
    pub fn label(index: usize) -> Option<char> {
        let offset = u8::try_from(index).ok().filter(|&offset| offset < 26)?;
        Some(char::from(b'A' + offset))
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option(&self) -> Option<&str> {
        let index = self.correct?;
        Some(self.options[index].as_str())
    }

    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&str> {
        let index = self.selected?;
        Some(self.options[index].as_str())
    }

    pub const fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Checks whether the option at `index` carries the correct value. Options are
    /// compared by value, so a duplicate of the correct text is also correct.
    pub fn is_correct(&self, index: usize) -> bool {
        match (self.correct_option(), self.options.get(index)) {
            (Some(correct), Some(option)) => option == correct,
            _ => false,
        }
    }

    /// Records the user's selection. Returns whether it is correct, or `None` if the
    /// question was already answered or the option does not exist.
    pub fn select(&mut self, index: usize) -> Option<bool> {
        if self.selected.is_some() || index >= self.options.len() {
            return None;
        }
        self.selected = Some(index);
        Some(self.is_correct(index))
    }
}
