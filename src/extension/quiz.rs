use crate::hir::Token;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// The qualifier selecting a review status: `is:due`.
pub const FIELD: &str = "is";

/// Review status of an entry, from the spaced-repetition record of a user.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuizStatus {
    /// Due for review.
    Due,
    /// Never reviewed.
    New,
    /// Failed repeatedly.
    Leech,
}

impl QuizStatus {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword.to_ascii_lowercase().as_str() {
            "due" => Self::Due,
            "new" => Self::New,
            "leech" => Self::Leech,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Due => "due",
            Self::New => "new",
            Self::Leech => "leech",
        }
    }
}

impl Display for QuizStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review status conditions of a user.
///
/// Matches entries having any of the statuses: `due new` selects everything to study. Evaluating
/// this requires joining the review records into the query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFilter<'a> {
    pub user: &'a str,
    pub statuses: BTreeSet<QuizStatus>,
}

/// Claim review status keywords from the tokens.
///
/// Keywords are recognized as unquoted bare terms (`due`) or using the `is:` qualifier (`is:due`).
/// A quoted term is never a keyword. An unknown `is:` keyword continues as a bare term.
///
/// Returns the filter, if any keyword was found, and all tokens which were not claimed.
pub fn resolve_quiz_filter<'a>(
    tokens: Vec<Token<'a>>,
    user: &'a str,
) -> (Option<QuizFilter<'a>>, Vec<Token<'a>>) {
    let mut statuses = BTreeSet::new();
    let mut remaining = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.is_field(FIELD) {
            match QuizStatus::from_keyword(&token.value) {
                Some(status) => {
                    statuses.insert(status);
                }
                None => {
                    tracing::debug!(keyword = %token.value, "unknown review status");
                    remaining.push(Token {
                        field: None,
                        ..token
                    });
                }
            }
        } else if token.is_bare() && !token.quoted {
            match QuizStatus::from_keyword(&token.value) {
                Some(status) => {
                    statuses.insert(status);
                }
                None => remaining.push(token),
            }
        } else {
            remaining.push(token);
        }
    }

    let filter = match statuses.is_empty() {
        true => None,
        false => Some(QuizFilter { user, statuses }),
    };

    (filter, remaining)
}

/// The signal to join the review records.
pub fn requires_join(filter: Option<&QuizFilter>) -> bool {
    filter.is_some()
}
