use sea_orm::sea_query::PostgresQueryBuilder;
use zhquery::prelude::*;
use zhquery::sea_orm::{extra, library};

fn main() {
    let mut args = std::env::args().skip(1);
    let entity = args.next().unwrap_or_default();
    let query = args.collect::<Vec<_>>().join(" ");
    println!("Input: '{query}'");

    println!("\nTokens:\n{:#?}", tokenize(&query));

    let (sql, values) = match entity.as_str() {
        "library" => {
            let compiled = Library::search(&query, "demo");
            println!("\nCompiled:\n{compiled:#?}");
            library::select(&compiled, "demo", Page::default()).build(PostgresQueryBuilder)
        }
        "extra" => {
            let compiled = Extra::search(&query, "demo");
            println!("\nCompiled:\n{compiled:#?}");
            extra::select(&compiled, "demo", Page::default()).build(PostgresQueryBuilder)
        }
        _ => {
            eprintln!("Usage: cli <extra|library> <query>...");
            std::process::exit(1);
        }
    };

    println!("\nSQL:\n{sql}\n\nValues:\n{values:?}");
}
