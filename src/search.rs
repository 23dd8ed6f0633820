use crate::extension::quiz::{self, QuizFilter};
use crate::extension::tag::{self, TagFilter};
use crate::lir::{compile, FieldRegistry, Term};
use crate::parser::tokenize;

/// Compiler options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of field tokens to consider, any further ones are ignored.
    ///
    /// Tag and review status tokens are claimed before, and are not limited by this.
    pub max_tokens: usize,
}

impl Options {
    pub const DEFAULT_MAX_TOKENS: usize = 64;
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        }
    }
}

/// The compiled query of a single request.
///
/// All parts are combined using AND. A part which is `None` does not restrict the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled<'a, R> {
    pub term: Option<Term<R>>,
    pub tags: Option<TagFilter<'a>>,
    pub quiz: Option<QuizFilter<'a>>,
}

impl<'a, R> Compiled<'a, R> {
    pub fn is_unrestricted(&self) -> bool {
        self.term.is_none() && self.tags.is_none() && self.quiz.is_none()
    }

    /// Check if the review records must be joined into the query.
    ///
    /// If this is `false`, the join must be omitted, as it would duplicate rows.
    pub fn requires_join(&self) -> bool {
        quiz::requires_join(self.quiz.as_ref())
    }
}

/// Compile a raw query for the registry `R`.
///
/// The user is only used to scope the structural extensions.
pub fn search<'a, R>(raw: &'a str, user: &'a str, options: &Options) -> Compiled<'a, R>
where
    R: FieldRegistry<'a>,
{
    let mut tokens = tokenize(raw);

    let extensions = R::EXTENSIONS;

    let quiz = match extensions.quiz {
        true => {
            let (filter, remaining) = quiz::resolve_quiz_filter(tokens, user);
            tokens = remaining;
            filter
        }
        false => None,
    };

    let tags = match extensions.tags {
        true => {
            let filter = tag::resolve_tag_filter(&tokens, user);
            tokens.retain(|token| !tag::is_tag(token));
            filter
        }
        false => None,
    };

    if tokens.len() > options.max_tokens {
        tracing::debug!(
            tokens = tokens.len(),
            max = options.max_tokens,
            "ignoring excess tokens"
        );
        tokens.truncate(options.max_tokens);
    }

    let compiled = Compiled {
        term: compile(&tokens),
        tags,
        quiz,
    };

    tracing::trace!(
        raw,
        unrestricted = compiled.is_unrestricted(),
        join = compiled.requires_join(),
        "compiled query"
    );

    compiled
}
