extern crate self as zhquery;

pub mod entity;
pub mod extension;
pub mod hir;
pub mod lir;
pub mod page;
pub mod parser;
pub mod script;
pub mod search;

#[cfg(feature = "sea-orm")]
pub mod sea_orm;

pub mod prelude {
    pub use crate::entity::{EntryType, Extra, ExtraField, Library, LibraryField};
    pub use crate::extension::quiz::{QuizFilter, QuizStatus};
    pub use crate::extension::tag::TagFilter;
    pub use crate::extension::Extensions;
    pub use crate::hir::Token;
    pub use crate::lir::{FieldRegistry, FromValue, Term};
    pub use crate::page::Page;
    pub use crate::parser::tokenize;
    pub use crate::script::ScriptClass;
    pub use crate::search::{Compiled, Options};
    pub use zhquery_macros::FieldRegistry;
}

pub use zhquery_macros::FieldRegistry;

pub use ::chumsky;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid page: {0}, pages start at 1")]
    InvalidPage(u64),
    #[error("Invalid limit: {0}")]
    InvalidLimit(u64),
}
