use super::{equals, full_text, quiz_join, translate_compiled};
use crate::entity::Extra;
use crate::page::Page;
use crate::search::Compiled;
use ::sea_orm::sea_query::{
    Alias, Condition, Expr, JoinType, Order, Query, SelectStatement, SimpleExpr,
};

fn table() -> Alias {
    Alias::new("extra")
}

fn column(name: &str) -> (Alias, Alias) {
    (table(), Alias::new(name))
}

/// Translate a single field match.
pub fn translate(m: &Extra) -> SimpleExpr {
    match m {
        Extra::Entry(value) => full_text(r#"extra."entry""#, value),
        Extra::Reading(value) => full_text(r#"normalize_pinyin(extra."pinyin")"#, value),
        Extra::English(value) => full_text(r#"extra."english""#, value),
        Extra::Type(value) => equals(r#"extra."type""#, value.as_str()),
        Extra::Description(value) => full_text(r#"extra."description""#, value),
    }
}

/// The full condition: the compiled query, scoped to the entries of the user.
pub fn condition(compiled: &Compiled<Extra>, user: &str) -> Condition {
    Condition::all()
        .add(Expr::col(column("userId")).eq(user))
        .add(Expr::cust(r#"extra."english"[1] IS NOT NULL"#))
        .add(translate_compiled(compiled, r#"extra."entry""#, &translate))
}

fn join(select: &mut SelectStatement, compiled: &Compiled<Extra>) {
    if let Some(quiz) = &compiled.quiz {
        select.join(JoinType::LeftJoin, Alias::new("quiz"), quiz_join(quiz));
    }
}

/// Select a page of matching entries, most recently updated first.
pub fn select(compiled: &Compiled<Extra>, user: &str, page: Page) -> SelectStatement {
    let mut select = Query::select();

    select
        .distinct_on([column("updatedAt"), column("id")])
        .expr_as(Expr::col(column("entry")), Alias::new("entry"))
        .expr_as(Expr::col(column("pinyin")), Alias::new("reading"))
        .expr_as(Expr::col(column("english")), Alias::new("english"))
        .expr_as(Expr::col(column("type")), Alias::new("type"))
        .expr_as(Expr::col(column("tag")), Alias::new("tag"))
        .from(table());

    join(&mut select, compiled);

    select
        .cond_where(condition(compiled, user))
        .order_by(column("updatedAt"), Order::Desc)
        .order_by(column("id"), Order::Asc)
        .limit(page.limit())
        .offset(page.offset());

    select
}

/// Count all matching entries.
pub fn count(compiled: &Compiled<Extra>, user: &str) -> SelectStatement {
    let mut select = Query::select();

    select
        .expr_as(Expr::cust(r#"COUNT(DISTINCT extra."id")"#), Alias::new("count"))
        .from(table());

    join(&mut select, compiled);

    select.cond_where(condition(compiled, user));

    select
}
