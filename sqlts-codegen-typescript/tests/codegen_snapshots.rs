//! Snapshot tests for TypeScript query function generation.
//!
//! These tests verify that the generated TypeScript code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use sqlts_codegen_typescript::{PgTypeResolver, generate_function, generate_index};
use sqlts_ir::{NamedValue, RowCount, StatementDescription, TsModule};

async fn generate(func_name: &str, stmt: &StatementDescription) -> String {
    generate_function(&PgTypeResolver::new(), "pg", func_name, stmt)
        .await
        .expect("Generation failed")
}

#[tokio::test]
async fn test_positional_zero_or_one() {
    let stmt = StatementDescription::new(
        "SELECT id, name FROM users WHERE id = $1",
        RowCount::ZeroOrOne,
    )
    .param(NamedValue::new("$1", "int4"))
    .column(NamedValue::new("id", "int4"))
    .column(NamedValue::new("name", "text").nullable());

    let code = generate("getUser", &stmt).await;
    insta::assert_snapshot!("get_user", code);
}

#[tokio::test]
async fn test_named_zero() {
    let stmt = StatementDescription::new(
        "INSERT INTO users (email, age) VALUES (${email}, ${age})",
        RowCount::Zero,
    )
    .param(NamedValue::new("email", "text"))
    .param(NamedValue::new("age", "int2").nullable());

    let code = generate("addUser", &stmt).await;
    insta::assert_snapshot!("add_user", code);
}

#[tokio::test]
async fn test_multiline_many() {
    let stmt = StatementDescription::new(
        "SELECT id, email, created_at\nFROM users\nORDER BY id",
        RowCount::Many,
    )
    .column(NamedValue::new("id", "int4"))
    .column(NamedValue::new("email", "text"))
    .column(NamedValue::new("created_at", "timestamptz").nullable());

    let code = generate("listUsers", &stmt).await;
    insta::assert_snapshot!("list_users", code);
}

#[test]
fn test_index_module() {
    let modules = [
        TsModule::new("queries/get_user.sql", "queries/get_user.ts", "getUser"),
        TsModule::new("queries/add_user.sql", "queries/add_user.ts", "addUser"),
        TsModule::new("queries/list_users.sql", "queries/list_users.ts", "listUsers"),
    ];

    insta::assert_snapshot!("index", generate_index(&modules));
}
