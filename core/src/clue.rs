use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Text shown in a cell whose clue has not been revealed yet.
pub const PLACEHOLDER_TEXT: &str = "?";

/// Reveal state of a single clue, only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueState {
    Hidden,
    Question,
    Answer,
}

impl ClueState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for ClueState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowQuestion => true,
            ShowAnswer => true,
        }
    }
}

/// Presentation hint passed to the display along with the cell text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStyle {
    Placeholder,
    Question,
    Answer,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellContent<'a> {
    pub text: &'a str,
    pub style: CellStyle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: ClueState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: ClueState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> ClueState {
        self.showing
    }

    /// Advances the reveal state by one step.
    ///
    /// Hidden shows the question, Question shows the answer, and an already
    /// answered clue ignores the activation.
    pub fn activate(&mut self) -> RevealOutcome {
        use ClueState::*;
        match self.showing {
            Hidden => {
                self.showing = Question;
                RevealOutcome::ShowQuestion
            }
            Question => {
                self.showing = Answer;
                RevealOutcome::ShowAnswer
            }
            Answer => RevealOutcome::NoChange,
        }
    }

    pub fn content(&self) -> CellContent<'_> {
        match self.showing {
            ClueState::Hidden => CellContent {
                text: PLACEHOLDER_TEXT,
                style: CellStyle::Placeholder,
            },
            ClueState::Question => CellContent {
                text: &self.question,
                style: CellStyle::Question,
            },
            ClueState::Answer => CellContent {
                text: &self.answer,
                style: CellStyle::Answer,
            },
        }
    }
}
