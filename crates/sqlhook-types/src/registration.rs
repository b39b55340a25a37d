//! Registration identity sent to the webhook generation endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /hiring/generateWebhook/JAVA`.
///
/// Serialized with the exact keys the hiring API expects:
/// `{"name", "regNo", "email"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub name: String,
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub email: String,
}

impl GenerationRequest {
    pub fn new(
        name: impl Into<String>,
        reg_no: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            reg_no: reg_no.into(),
            email: email.into(),
        }
    }

    /// Question set this registration number is assigned to.
    pub fn question_set(&self) -> Option<QuestionSet> {
        QuestionSet::for_reg_no(&self.reg_no)
    }
}

/// Which question the hiring service hands out.
///
/// Decided by the last two digits of the registration number: odd numbers get
/// question 1, even numbers question 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSet {
    One,
    Two,
}

impl QuestionSet {
    /// Derive the question set from the trailing digits of `reg_no`.
    ///
    /// Returns `None` when the registration number does not end in a digit.
    pub fn for_reg_no(reg_no: &str) -> Option<Self> {
        let trailing: Vec<u32> = reg_no
            .trim()
            .chars()
            .rev()
            .map_while(|c| c.to_digit(10))
            .take(2)
            .collect();

        let last_two = match trailing.as_slice() {
            [ones] => *ones,
            [ones, tens] => tens * 10 + ones,
            _ => return None,
        };

        if last_two % 2 == 1 {
            Some(Self::One)
        } else {
            Some(Self::Two)
        }
    }
}

impl std::fmt::Display for QuestionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "question 1"),
            Self::Two => write!(f, "question 2"),
        }
    }
}
