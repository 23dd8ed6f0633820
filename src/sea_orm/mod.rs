//! Translation into SeaORM (sea-query) expressions.
//!
//! All user input ends up as bound values, never as part of the SQL text. The SQL snippets in here
//! are constant, apart from generated placeholder numbers.

pub mod extra;
pub mod library;

use crate::extension::quiz::{QuizFilter, QuizStatus};
use crate::extension::tag::TagFilter;
use crate::lir::Term;
use crate::search::Compiled;
use ::sea_orm::sea_query::{Condition, Expr, IntoCondition, SimpleExpr, Value};

/// Number of failed reviews in a row, making an entry a leech.
pub const LEECH_THRESHOLD: i32 = 3;

/// Translate a term into a condition.
///
/// This function takes care of all the basic transformation and leaves the actual mapping to the
/// provided translate function.
pub fn translate_term<R, F, FO>(term: &Term<R>, translate: &F) -> Condition
where
    F: Fn(&R) -> FO,
    FO: IntoCondition,
{
    match term {
        Term::Or(terms) => {
            let mut result = Condition::any();
            for term in terms {
                result = result.add(translate_term(term, translate));
            }
            result
        }
        Term::And(terms) => {
            let mut result = Condition::all();
            for term in terms {
                result = result.add(translate_term(term, translate));
            }
            result
        }
        Term::Match(m) => translate(m).into_condition(),
    }
}

/// `<target> &@ $1`, the full-text match operator.
///
/// The target must be trusted SQL, the value gets bound.
pub fn full_text(target: &str, value: &str) -> SimpleExpr {
    Expr::cust_with_values(format!("{target} &@ $1"), [value.to_string()])
}

/// `<target> = $1`
pub fn equals(target: &str, value: &str) -> SimpleExpr {
    Expr::cust_with_values(format!("{target} = $1"), [value.to_string()])
}

/// Require the key set `keys` to contain all keys tagged with every tag of the filter.
///
/// Tags without an owner are visible to every user. If no key carries all tags, the subquery
/// yields `NULL` and nothing matches.
pub fn translate_tags(filter: &TagFilter, keys: &str) -> SimpleExpr {
    let num = filter.tags.len();

    let placeholders = (0..num)
        .map(|i| format!("${}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        concat!(
            r#"{keys} @> (SELECT array_agg(t1."key") FROM (SELECT t0."key" "#,
            r#"FROM entry_tag, unnest(entry_tag."entry") AS t0("key") "#,
            r#"WHERE (entry_tag."userId" IS NULL OR entry_tag."userId" = $1) "#,
            r#"AND entry_tag."tag" IN ({placeholders}) "#,
            r#"GROUP BY t0."key" HAVING COUNT(DISTINCT entry_tag."tag") = ${count}) t1)"#,
        ),
        keys = keys,
        placeholders = placeholders,
        count = num + 2
    );

    let mut values = Vec::with_capacity(num + 2);
    values.push(Value::from(filter.user.to_string()));
    values.extend(filter.tags.iter().map(|tag| Value::from(tag.to_string())));
    values.push(Value::from(num as i64));

    Expr::cust_with_values(sql, values)
}

/// The condition joining the review records of the user to an extra entry.
pub fn quiz_join(filter: &QuizFilter) -> SimpleExpr {
    Expr::cust_with_values(
        r#"quiz."userId" = $1 AND quiz."entry" = extra."entry"[1] AND quiz."type" = extra."type""#,
        [filter.user.to_string()],
    )
}

pub fn translate_quiz_status(status: QuizStatus) -> SimpleExpr {
    match status {
        QuizStatus::Due => Expr::cust(r#"quiz."nextReview" <= NOW()"#),
        QuizStatus::New => Expr::cust(r#"quiz."id" IS NULL"#),
        QuizStatus::Leech => {
            Expr::cust_with_values(r#"quiz."wrongStreak" >= $1"#, [LEECH_THRESHOLD])
        }
    }
}

/// Translate the review conditions, requires the join of [`quiz_join`].
///
/// An entry matches if it has any of the statuses.
pub fn translate_quiz(filter: &QuizFilter) -> Condition {
    filter
        .statuses
        .iter()
        .fold(Condition::any(), |result, status| {
            result.add(translate_quiz_status(*status))
        })
}

/// Translate a compiled query.
///
/// Parts of the query which are not present don't add any condition. `keys` is the key set column
/// used for the tag membership.
pub fn translate_compiled<R, F, FO>(compiled: &Compiled<R>, keys: &str, translate: &F) -> Condition
where
    F: Fn(&R) -> FO,
    FO: IntoCondition,
{
    Condition::all()
        .add_option(
            compiled
                .term
                .as_ref()
                .map(|term| translate_term(term, translate)),
        )
        .add_option(
            compiled
                .tags
                .as_ref()
                .map(|tags| translate_tags(tags, keys)),
        )
        .add_option(compiled.quiz.as_ref().map(translate_quiz))
}
