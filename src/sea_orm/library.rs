use super::{equals, full_text, translate_compiled};
use crate::entity::Library;
use crate::page::Page;
use crate::search::Compiled;
use ::sea_orm::sea_query::{Alias, Condition, Expr, Order, Query, SelectStatement, SimpleExpr};

fn table() -> Alias {
    Alias::new("library")
}

/// Translate a single field match.
pub fn translate(m: &Library) -> SimpleExpr {
    match m {
        Library::Entry(value) => full_text(r#""entry_zh""#, value),
        Library::Title(value) => full_text(r#""title""#, value),
        Library::Type(value) => equals(r#""type""#, value.as_str()),
        Library::Description(value) => full_text(r#""description""#, value),
        Library::Tag(value) => full_text(r#""tag""#, value),
    }
}

/// The full condition: the compiled query, scoped to the collections of the user.
pub fn condition(compiled: &Compiled<Library>, user: &str) -> Condition {
    Condition::all()
        .add(Expr::col(Alias::new("userId")).eq(user))
        .add(Expr::col(Alias::new("entry")).is_not_null())
        .add(translate_compiled(compiled, r#""entry""#, &translate))
}

/// Select a page of matching collections, most recently updated first.
pub fn select(compiled: &Compiled<Library>, user: &str, page: Page) -> SelectStatement {
    let mut select = Query::select();

    select
        .columns(["entry", "title", "type", "description", "tag"].map(Alias::new))
        .from(table())
        .cond_where(condition(compiled, user))
        .order_by(Alias::new("updatedAt"), Order::Desc)
        .limit(page.limit())
        .offset(page.offset());

    select
}

/// Count all matching collections.
pub fn count(compiled: &Compiled<Library>, user: &str) -> SelectStatement {
    let mut select = Query::select();

    select
        .expr_as(Expr::cust("COUNT(*)"), Alias::new("count"))
        .from(table())
        .cond_where(condition(compiled, user));

    select
}
