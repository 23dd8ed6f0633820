use super::EntryType;
use crate::FieldRegistry;
use std::borrow::Cow;

/// Library vocabulary collections.
///
/// Here `tag` is a plain text field of the collection, there are no structural extensions.
#[derive(FieldRegistry, Clone, Debug, PartialEq, Eq)]
pub enum Library<'a> {
    #[search(default)]
    Entry(Cow<'a, str>),
    #[search(default)]
    Title(Cow<'a, str>),
    /// `type:hanzi` is the same as `type:character`
    Type(EntryType<'a>),
    #[search(default)]
    Description(Cow<'a, str>),
    #[search(default)]
    Tag(Cow<'a, str>),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lir::FieldRegistry;
    use crate::script::ScriptClass;

    #[test]
    fn test_default_fields() {
        let expected = &[
            LibraryField::Entry,
            LibraryField::Title,
            LibraryField::Description,
            LibraryField::Tag,
        ];
        assert_eq!(Library::default_fields(ScriptClass::General), expected);
        assert_eq!(Library::default_fields(ScriptClass::Logographic), expected);
    }

    #[test]
    fn test_extensions() {
        assert!(!Library::EXTENSIONS.tags);
        assert!(!Library::EXTENSIONS.quiz);
    }
}
