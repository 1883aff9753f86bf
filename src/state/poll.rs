//! Poll draft state machine for the inline poll builder.
//!
//! DESIGN
//! ======
//! The draft is an explicit state object rather than closure-captured
//! variables: every transition the widget can make (toggle, add, remove,
//! clear, focus) is a method here, and the submission gate is a pure
//! `validate` call the compose form runs before navigating away.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

/// Maximum number of answer options a poll may carry.
pub const MAX_ANSWERS: usize = 10;

/// Minimum number of answer options required to submit an open poll.
pub const MIN_ANSWERS: usize = 2;

/// In-progress poll attached to the compose form.
///
/// Lives only while the sub-form is open; every route out of the open state
/// (toggle-off, explicit removal, successful submission) resets it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PollDraft {
    /// Whether the poll sub-form is open.
    pub active: bool,
    /// Poll topic text, as typed.
    pub topic: String,
    /// Accepted answer options: unique, non-empty, at most [`MAX_ANSWERS`].
    pub answers: Vec<String>,
    /// Current answer input value, as typed.
    pub input: String,
    /// Duplicate-answer error indicator on the answer input.
    pub input_error: bool,
}

/// Result of an [`PollDraft::add_answer`] attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddAnswerOutcome {
    /// The trimmed input was appended and the input cleared.
    Added,
    /// The trimmed input was empty; nothing changed.
    EmptyInput,
    /// The trimmed input already exists in the list; error indicator set.
    Duplicate,
    /// The list already holds [`MAX_ANSWERS`] entries; nothing changed.
    ListFull,
}

/// Submission-gate failure for an open poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PollValidationError {
    #[error("Пожалуйста, введите тему опроса!")]
    EmptyTopic,
    #[error("Добавьте минимум два варианта ответа для опроса!")]
    TooFewAnswers,
}

impl PollDraft {
    /// Flip the sub-form between open and closed. Both directions reset the
    /// topic, the answer list, and the input.
    pub fn toggle(&mut self) {
        let open = !self.active;
        self.reset();
        self.active = open;
    }

    /// Close the sub-form and discard the draft (the "remove poll" action).
    pub fn remove(&mut self) {
        self.reset();
    }

    /// Discard the draft entirely: closed, empty topic, no answers.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_topic(&mut self, value: String) {
        self.topic = value;
    }

    /// Update the answer input and recompute the duplicate indicator.
    pub fn set_input(&mut self, value: String) {
        self.input = value;
        self.refresh_input_error();
    }

    /// Focusing the answer input clears any error indicator.
    pub fn focus_input(&mut self) {
        self.input_error = false;
    }

    /// Whether the add action would currently succeed.
    pub fn can_add(&self) -> bool {
        let value = self.input.trim();
        !value.is_empty()
            && !self.answers.iter().any(|a| a == value)
            && self.answers.len() < MAX_ANSWERS
    }

    /// Try to append the trimmed input as a new answer option.
    pub fn add_answer(&mut self) -> AddAnswerOutcome {
        let value = self.input.trim().to_owned();
        if value.is_empty() {
            return AddAnswerOutcome::EmptyInput;
        }
        if self.answers.contains(&value) {
            self.input_error = true;
            return AddAnswerOutcome::Duplicate;
        }
        if self.answers.len() >= MAX_ANSWERS {
            return AddAnswerOutcome::ListFull;
        }
        self.answers.push(value);
        self.input.clear();
        self.refresh_input_error();
        AddAnswerOutcome::Added
    }

    /// Remove the answer at `index`, preserving the order of the rest.
    /// Out-of-range indices are ignored.
    pub fn remove_answer(&mut self, index: usize) {
        if index < self.answers.len() {
            self.answers.remove(index);
            self.refresh_input_error();
        }
    }

    /// Drop every answer option but keep the poll open and the topic intact.
    pub fn clear_answers(&mut self) {
        self.answers.clear();
        self.refresh_input_error();
    }

    /// Submission gate. A closed poll always passes; an open one needs a
    /// non-empty topic and at least [`MIN_ANSWERS`] answers.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, in topic-then-answers order.
    pub fn validate(&self) -> Result<(), PollValidationError> {
        if !self.active {
            return Ok(());
        }
        if self.topic.trim().is_empty() {
            return Err(PollValidationError::EmptyTopic);
        }
        if self.answers.len() < MIN_ANSWERS {
            return Err(PollValidationError::TooFewAnswers);
        }
        Ok(())
    }

    // The indicator mirrors the current input against the answer list, the
    // same rule the add button uses for its disabled state.
    fn refresh_input_error(&mut self) {
        let value = self.input.trim();
        self.input_error = !value.is_empty() && self.answers.iter().any(|a| a == value);
    }
}
