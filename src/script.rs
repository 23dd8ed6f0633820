//! Classification of search values by their script.
//!
//! Bare terms get resolved against a different set of fields, depending on the script they are
//! written in. A reading or English matcher will never find a term written in Han characters, so
//! registries may restrict the fan-out for such input.

use unicode_script::{Script, UnicodeScript};

/// Script category of a search value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScriptClass {
    /// Every character is a Han ideograph.
    Logographic,
    /// Anything else, including mixed input.
    #[default]
    General,
}

/// Classify a value.
///
/// A value is only logographic if it is non-empty and consists of Han characters only. Whitespace
/// or punctuation makes it a general value.
pub fn classify(value: &str) -> ScriptClass {
    if !value.is_empty() && value.chars().all(|c| c.script() == Script::Han) {
        ScriptClass::Logographic
    } else {
        ScriptClass::General
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_han() {
        assert_eq!(classify("中"), ScriptClass::Logographic);
        assert_eq!(classify("你好"), ScriptClass::Logographic);
        assert_eq!(classify("漢字"), ScriptClass::Logographic);
    }

    #[test]
    fn test_general() {
        assert_eq!(classify(""), ScriptClass::General);
        assert_eq!(classify("ni3hao3"), ScriptClass::General);
        assert_eq!(classify("hello"), ScriptClass::General);
    }

    #[test]
    fn test_mixed() {
        assert_eq!(classify("你好a"), ScriptClass::General);
        assert_eq!(classify("你 好"), ScriptClass::General);
        assert_eq!(classify("你好！"), ScriptClass::General);
        // kana is not Han
        assert_eq!(classify("ひらがな"), ScriptClass::General);
    }
}
