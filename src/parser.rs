use crate::hir::{Query, Token};
use chumsky::prelude::*;
use std::borrow::Cow;

pub fn ident<'a>() -> impl Parser<'a, &'a str, &'a str, extra::Err<Simple<'a, char>>> {
    any()
        .filter(|c: &char| c.is_alphanumeric() || c == &'_')
        .repeated()
        .at_least(1)
        .to_slice().map(|s| s)
}

/// A double quoted string, a backslash escapes the next character.
pub fn quoted_string<'a>() -> impl Parser<'a, &'a str, Cow<'a, str>, extra::Err<Simple<'a, char>>> {
    just('"')
        .ignore_then(
            none_of(['\\', '"'])
                .or(just('\\').ignore_then(any()))
                .repeated()
                .to_slice().map(unescape),
        )
        .then_ignore(just('"'))
}

/// Anything up to the next whitespace, taken literally.
pub fn raw_string<'a>() -> impl Parser<'a, &'a str, &'a str, extra::Err<Simple<'a, char>>> {
    any()
        .filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .to_slice().map(|s| s)
}

/// Like [`raw_string`], but must not start with a quote.
pub fn unquoted_string<'a>() -> impl Parser<'a, &'a str, &'a str, extra::Err<Simple<'a, char>>> {
    any()
        .filter(|c: &char| !(c.is_whitespace() || c == &'"'))
        .then(any().filter(|c: &char| !c.is_whitespace()).repeated())
        .to_slice().map(|s| s)
}

/// The end of a token: whitespace or the end of the input, without consuming it.
fn boundary<'a>() -> impl Parser<'a, &'a str, (), extra::Err<Simple<'a, char>>> {
    any()
        .filter(|c: &char| c.is_whitespace())
        .ignored()
        .or(end())
        .rewind()
}

/// A quoted string which spans the whole token.
pub fn quoted_token<'a>() -> impl Parser<'a, &'a str, Cow<'a, str>, extra::Err<Simple<'a, char>>> {
    quoted_string().then_ignore(boundary())
}

pub fn value<'a>() -> impl Parser<'a, &'a str, (Cow<'a, str>, bool), extra::Err<Simple<'a, char>>>
{
    quoted_token()
        .map(|value| (value, true))
        .or(unquoted_string().map(|value| (Cow::Borrowed(value), false)))
}

pub fn qualified<'a>() -> impl Parser<'a, &'a str, Token<'a>, extra::Err<Simple<'a, char>>> {
    ident()
        .then_ignore(just(':'))
        .then(value())
        .map(|(field, (value, quoted))| Token {
            field: Some(lowercase(field)),
            value,
            quoted,
        })
}

pub fn bare<'a>() -> impl Parser<'a, &'a str, Token<'a>, extra::Err<Simple<'a, char>>> {
    quoted_token()
        .map(Token::quoted)
        .or(raw_string().map(Token::bare))
}

pub fn token<'a>() -> impl Parser<'a, &'a str, Token<'a>, extra::Err<Simple<'a, char>>> {
    qualified().or(bare())
}

pub fn parser<'a>() -> impl Parser<'a, &'a str, Query<'a>, extra::Err<Simple<'a, char>>> {
    token()
        .padded()
        .repeated()
        .collect()
        .padded()
        .map(|tokens| Query { tokens })
}

/// Split a raw query into its tokens.
///
/// This never fails. Anything which doesn't form a proper `field:value` pair ends up as a bare
/// term, containing the literal text.
pub fn tokenize(raw: &str) -> Vec<Token<'_>> {
    match parser().parse(raw).into_result() {
        Ok(query) => query.tokens,
        Err(errors) => {
            tracing::warn!(?errors, "unable to tokenize query, splitting on whitespace");
            raw.split_whitespace().map(Token::bare).collect()
        }
    }
}

fn lowercase(s: &str) -> Cow<'_, str> {
    match s.chars().any(char::is_uppercase) {
        true => Cow::Owned(s.to_lowercase()),
        false => Cow::Borrowed(s),
    }
}

fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('\\') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            }
            c => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_parse(query: &str, expected: Vec<Token>) {
        let result = parser().parse(query).into_result().unwrap();

        assert_eq!(result.tokens, expected);
        assert_eq!(tokenize(query), expected);
    }

    #[test]
    fn test_empty() {
        assert_parse("", vec![]);
        assert_parse("   ", vec![]);
        assert_parse("\t\n ", vec![]);
    }

    #[test]
    fn test_one() {
        assert_parse("entry:foo", vec![Token::qualified("entry", "foo")])
    }

    #[test]
    fn test_two() {
        assert_parse(
            "entry:foo type:character",
            vec![
                Token::qualified("entry", "foo"),
                Token::qualified("type", "character"),
            ],
        )
    }

    #[test]
    fn test_with_bare() {
        assert_parse(
            "foo entry:bar baz",
            vec![
                Token::bare("foo"),
                Token::qualified("entry", "bar"),
                Token::bare("baz"),
            ],
        )
    }

    #[test]
    fn test_lowercase_field() {
        assert_parse("Entry:Foo", vec![Token::qualified("entry", "Foo")])
    }

    #[test]
    fn test_with_quotes() {
        assert_parse(
            r#"english:"to be" tag:"HSK 1" "a b""#,
            vec![
                Token::qualified("english", "to be").into_quoted(),
                Token::qualified("tag", "HSK 1").into_quoted(),
                Token::quoted("a b"),
            ],
        )
    }

    #[test]
    fn test_quoted_colon() {
        assert_parse(
            r#"description:"a:b" "c:d""#,
            vec![
                Token::qualified("description", "a:b").into_quoted(),
                Token::quoted("c:d"),
            ],
        )
    }

    #[test]
    fn test_escape() {
        assert_parse(
            r#"english:"say \"hi\"" "back\\slash""#,
            vec![
                Token::qualified("english", r#"say "hi""#).into_quoted(),
                Token::quoted(r"back\slash"),
            ],
        )
    }

    #[test]
    fn test_value_with_colon() {
        assert_parse("entry:a:b", vec![Token::qualified("entry", "a:b")])
    }

    #[test]
    fn test_trailing_colon() {
        assert_parse("foo:", vec![Token::bare("foo:")])
    }

    #[test]
    fn test_leading_colon() {
        assert_parse(":foo", vec![Token::bare(":foo")])
    }

    #[test]
    fn test_space_after_colon() {
        assert_parse("foo: bar", vec![Token::bare("foo:"), Token::bare("bar")])
    }

    #[test]
    fn test_with_no_value_quoted() {
        assert_parse(
            r#"foo:"""#,
            vec![Token::qualified("foo", "").into_quoted()],
        )
    }

    #[test]
    fn test_unterminated_quote() {
        assert_parse(
            r#"entry:"foo bar"#,
            vec![Token::bare(r#"entry:"foo"#), Token::bare("bar")],
        )
    }

    #[test]
    fn test_quote_in_value() {
        assert_parse(
            r#"entry:foo"bar baz"#,
            vec![Token::qualified("entry", r#"foo"bar"#), Token::bare("baz")],
        )
    }

    #[test]
    fn test_text_after_closing_quote() {
        assert_parse(
            r#"entry:"foo"bar baz"#,
            vec![Token::bare(r#"entry:"foo"bar"#), Token::bare("baz")],
        );
        assert_parse(r#""foo"bar"#, vec![Token::bare(r#""foo"bar"#)]);
    }

    #[test]
    fn test_control_in_value() {
        assert_parse("entry:a\u{7}b", vec![Token::qualified("entry", "a\u{7}b")])
    }

    #[test]
    fn test_han() {
        assert_parse(
            "你好 entry:中文",
            vec![Token::bare("你好"), Token::qualified("entry", "中文")],
        )
    }

    #[test]
    fn test_sql_metacharacters() {
        assert_parse(
            "entry:';--",
            vec![Token::qualified("entry", "';--")],
        )
    }

    #[test]
    fn test_borrowed() {
        let tokens = tokenize("entry:foo bar");
        assert!(tokens
            .iter()
            .all(|token| matches!(token.value, Cow::Borrowed(_))));
    }
}
