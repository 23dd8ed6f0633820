use std::borrow::Cow;

/// A single token of a raw query.
///
/// Without a `field`, the token is a bare term and gets resolved through the default fields of a
/// registry. The field name is always lower-cased.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub field: Option<Cow<'a, str>>,
    pub value: Cow<'a, str>,
    /// Whether the value was written in quotes.
    pub quoted: bool,
}

impl<'a> Token<'a> {
    pub fn bare(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            field: None,
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            field: None,
            value: value.into(),
            quoted: true,
        }
    }

    pub fn qualified(field: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            field: Some(field.into()),
            value: value.into(),
            quoted: false,
        }
    }

    /// Mark the value of the token as quoted.
    pub fn into_quoted(mut self) -> Self {
        self.quoted = true;
        self
    }

    pub fn is_bare(&self) -> bool {
        self.field.is_none()
    }

    /// Check if this token qualifies the given field.
    pub fn is_field(&self, name: &str) -> bool {
        matches!(&self.field, Some(field) if field.eq_ignore_ascii_case(name))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Query<'a> {
    pub tokens: Vec<Token<'a>>,
}
