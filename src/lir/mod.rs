use crate::extension::Extensions;
use crate::hir::Token;
use crate::script::{classify, ScriptClass};
use crate::search::{self, Compiled, Options};
use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// A predicate tree.
///
/// Leaves are matches against a single field, as produced by the registry `R`. The tree never gets
/// interpreted again, it only gets composed and finally translated into the storage layer's
/// expression type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term<R> {
    Match(R),
    Or(Vec<Term<R>>),
    And(Vec<Term<R>>),
}

impl<R> Term<R> {
    pub fn compact(self) -> Self {
        match self {
            Self::Or(mut terms) | Self::And(mut terms) if terms.len() == 1 => terms.remove(0),
            _ => self,
        }
    }
}

/// The field registry of an entity type.
///
/// The implementing type is the match itself, typically an enum with one variant per field,
/// carrying the (normalized) value to match against. Implementations are normally generated using
/// `#[derive(FieldRegistry)]`.
pub trait FieldRegistry<'a>: Sized {
    /// Selector of a field, without a value.
    type Field: Copy + Eq + Hash + Debug + 'static;

    /// All known field names, lower case, including aliases.
    const FIELDS: &'static [(&'static str, Self::Field)];

    /// Structural extensions applying to this entity.
    const EXTENSIONS: Extensions = Extensions::NONE;

    /// Fields to fan out to for a bare term of the given script class.
    fn default_fields(script: ScriptClass) -> &'static [Self::Field];

    /// Build the match of a field.
    ///
    /// Any normalization of the value happens here, through the [`FromValue`] implementation of the
    /// field's value type.
    fn matcher(field: Self::Field, value: Cow<'a, str>) -> Self;

    fn lookup(name: &str) -> Option<Self::Field> {
        Self::FIELDS
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, field)| *field)
    }

    /// Compile a raw query, scoped to a user.
    fn search(raw: &'a str, user: &'a str) -> Compiled<'a, Self> {
        Self::search_with(raw, user, &Options::default())
    }

    fn search_with(raw: &'a str, user: &'a str, options: &Options) -> Compiled<'a, Self> {
        search::search(raw, user, options)
    }
}

/// Conversion of a raw value into the value of a field.
///
/// This never fails, values which can't be understood must be carried as they are.
pub trait FromValue<'a>: Sized {
    fn from_value(value: Cow<'a, str>) -> Self;
}

impl<'a> FromValue<'a> for Cow<'a, str> {
    fn from_value(value: Cow<'a, str>) -> Self {
        value
    }
}

impl<'a> FromValue<'a> for String {
    fn from_value(value: Cow<'a, str>) -> Self {
        value.into_owned()
    }
}

/// Resolve a single token into a predicate.
///
/// Qualified tokens resolve to the matcher of their field. An unknown field resolves to `None`,
/// the token gets dropped. Bare terms fan out to the default fields of the registry, selected by
/// the script of the value.
pub fn resolve<'a, R>(token: &Token<'a>) -> Option<Term<R>>
where
    R: FieldRegistry<'a>,
{
    if token.value.is_empty() {
        return None;
    }

    match &token.field {
        Some(name) => match R::lookup(name) {
            Some(field) => Some(Term::Match(R::matcher(field, token.value.clone()))),
            None => {
                tracing::debug!(field = %name, "ignoring unknown field");
                None
            }
        },
        None => {
            let terms = R::default_fields(classify(&token.value))
                .iter()
                .map(|field| Term::Match(R::matcher(*field, token.value.clone())))
                .collect::<Vec<_>>();

            match terms.is_empty() {
                true => None,
                false => Some(Term::Or(terms).compact()),
            }
        }
    }
}

/// Compile a list of tokens into a single predicate.
///
/// All resolved tokens are combined using AND, keeping the order of the tokens. If no token
/// resolved to a predicate, the result is `None`, which means: no restriction.
pub fn compile<'a, R>(tokens: &[Token<'a>]) -> Option<Term<R>>
where
    R: FieldRegistry<'a>,
{
    let terms = tokens.iter().filter_map(resolve::<R>).collect::<Vec<_>>();

    match terms.is_empty() {
        true => None,
        false => Some(Term::And(terms).compact()),
    }
}
