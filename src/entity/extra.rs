use super::EntryType;
use crate::FieldRegistry;
use std::borrow::Cow;

/// Extra entries of a user.
///
/// A bare term searches all default fields, or only `entry` and `description` if it is written in
/// Han characters. Supports `tag:` and the review status keywords.
#[derive(FieldRegistry, Clone, Debug, PartialEq, Eq)]
#[search(tags, quiz)]
pub enum Extra<'a> {
    /// `entry:你好`
    #[search(default, logographic)]
    Entry(Cow<'a, str>),
    /// `reading:ni3hao3`, or `pinyin:ni3hao3`
    #[search(default, alias = "pinyin")]
    Reading(Cow<'a, str>),
    /// `english:hello`
    #[search(default)]
    English(Cow<'a, str>),
    /// `type:character`
    #[search(default)]
    Type(EntryType<'a>),
    /// `description:greeting`
    #[search(default, logographic)]
    Description(Cow<'a, str>),
}
