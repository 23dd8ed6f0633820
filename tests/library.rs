use pretty_assertions::assert_eq;
use zhquery::prelude::*;

fn search(q: &str) -> Compiled<'_, Library<'_>> {
    Library::search(q, "user-1")
}

#[test]
fn test_type_alias() {
    assert_eq!(search("type:hanzi"), search("type:character"));
    assert_eq!(search("type:kanji"), search("type:character"));
    assert_eq!(
        search("type:hanzi").term,
        Some(Term::Match(Library::Type(EntryType::Character)))
    );
}

#[test]
fn test_type_passthrough() {
    assert_eq!(
        search("type:grammar").term,
        Some(Term::Match(Library::Type(EntryType::Other("grammar".into()))))
    );
}

#[test]
fn test_default() {
    let expected = |value: &'static str| {
        Some(Term::Or(vec![
            Term::Match(Library::Entry(value.into())),
            Term::Match(Library::Title(value.into())),
            Term::Match(Library::Description(value.into())),
            Term::Match(Library::Tag(value.into())),
        ]))
    };

    assert_eq!(search("hsk").term, expected("hsk"));
    // no restriction for Han input
    assert_eq!(search("你好").term, expected("你好"));
}

#[test]
fn test_tag_is_a_field() {
    let compiled = search("tag:hsk");
    assert_eq!(compiled.tags, None);
    assert_eq!(
        compiled.term,
        Some(Term::Match(Library::Tag("hsk".into())))
    );
}

#[test]
fn test_no_quiz() {
    let compiled = search("is:due");
    assert!(!compiled.requires_join());
    // `is` is not a field of the library
    assert!(compiled.is_unrestricted());
}

#[test]
fn test_unknown_field() {
    assert_eq!(search("bogus:xyz title:foo"), search("title:foo"));
}
