use crate::hir::Token;
use std::borrow::Cow;
use std::collections::BTreeSet;

/// The qualifier selecting tags.
pub const FIELD: &str = "tag";

/// Tag membership of an entry.
///
/// An entry matches if it is tagged with *all* tags, visible to the user. Tags without an owner are
/// visible to everyone, tags of other users are not visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagFilter<'a> {
    pub user: &'a str,
    pub tags: BTreeSet<Cow<'a, str>>,
}

pub fn is_tag(token: &Token) -> bool {
    token.is_field(FIELD)
}

/// Collect all `tag:` qualifiers into a filter.
///
/// Duplicates collapse, the order of the tags has no meaning. Returns `None` if there are no tags.
pub fn resolve_tag_filter<'a>(tokens: &[Token<'a>], user: &'a str) -> Option<TagFilter<'a>> {
    let tags = tokens
        .iter()
        .filter(|token| is_tag(token) && !token.value.is_empty())
        .map(|token| token.value.clone())
        .collect::<BTreeSet<_>>();

    match tags.is_empty() {
        true => None,
        false => Some(TagFilter { user, tags }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::tokenize;

    #[test]
    fn test_none() {
        assert_eq!(resolve_tag_filter(&tokenize("foo entry:bar"), "u1"), None);
        assert_eq!(resolve_tag_filter(&tokenize(r#"tag:"""#), "u1"), None);
    }

    #[test]
    fn test_set() {
        let filter = resolve_tag_filter(&tokenize("tag:b foo tag:a tag:b"), "u1").unwrap();
        assert_eq!(filter.user, "u1");
        assert_eq!(
            filter.tags.iter().map(|tag| tag.as_ref()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_order_insensitive() {
        assert_eq!(
            resolve_tag_filter(&tokenize("tag:a tag:b"), "u1"),
            resolve_tag_filter(&tokenize("tag:b tag:a"), "u1"),
        );
    }

    #[test]
    fn test_case_insensitive_field() {
        assert!(resolve_tag_filter(&tokenize("TAG:HSK1"), "u1").is_some());
    }
}
