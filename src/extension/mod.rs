//! Structural extensions.
//!
//! These resolve tokens into predicates which need relations beyond the entity's own table, and
//! are therefore kept apart from the field registry.

pub mod quiz;
pub mod tag;

/// The structural extensions enabled for an entity.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Extensions {
    pub tags: bool,
    pub quiz: bool,
}

impl Extensions {
    pub const NONE: Self = Self {
        tags: false,
        quiz: false,
    };
}
