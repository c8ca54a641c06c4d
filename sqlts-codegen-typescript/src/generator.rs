//! TypeScript query function generator.
//!
//! Turns one validated [`StatementDescription`] into an exported async
//! function that runs the query on a `pg` `ClientBase` and returns rows
//! shaped by the statement's [`RowCount`].

use futures::future::try_join_all;
use sqlts_codegen::{
    CodeFragment, ParamConvention, ResolveError, ResolvedColumn, TypeResolver, validate_statement,
};
use sqlts_ir::{RowCount, StatementDescription};
use tracing::debug;

use crate::{
    ast::{Field, Fn, Import, InlineObject, Param},
    code_file::CodeFile,
    escape::template_literal_body,
};

/// Name of the client type imported from the driver module.
pub const CLIENT_TYPE: &str = "ClientBase";

/// Generate the source of one query function.
///
/// `stmt` must already be validated. All parameter and column types are
/// resolved concurrently; if any resolution fails, that error is returned
/// and no code is produced.
pub async fn generate_function<R>(
    resolver: &R,
    module: &str,
    func_name: &str,
    stmt: &StatementDescription,
) -> Result<String, ResolveError>
where
    R: TypeResolver + ?Sized,
{
    let convention = ParamConvention::of(&stmt.params);
    debug!(
        function = func_name,
        convention = convention.as_str(),
        params = stmt.params.len(),
        columns = stmt.columns.len(),
        row_count = %stmt.row_count,
        "generating query function"
    );

    let param_types = try_join_all(
        stmt.params
            .iter()
            .map(|p| resolver.param_type(&p.db_type, p.nullable)),
    );
    let column_types = try_join_all(stmt.columns.iter().map(|c| resolver.column_type(c)));
    let (param_types, columns) = futures::try_join!(param_types, column_types)?;

    let params = stmt
        .params
        .iter()
        .zip(param_types)
        .map(|(p, ty)| Param::new(&p.name, ty))
        .collect();

    let function = Fn::new(func_name)
        .async_()
        .param(Param::new("client", CLIENT_TYPE))
        .params(function_params(params, convention))
        .returns(format!(
            "Promise<{}>",
            return_type(&columns, stmt.row_count)
        ))
        .body_depth(2)
        .body_line("const result = await client.query(`\\")
        .body_fragment(CodeFragment::raw(format!(
            "{}`{})\n",
            template_literal_body(&stmt.sql),
            query_values(stmt, convention)
        )))
        .body_line(format!("return {}", output_value(stmt.row_count)));

    Ok(CodeFile::new()
        .import(Import::new(module).named(CLIENT_TYPE))
        .add(function)
        .render())
}

/// Validate `stmt`, then generate its function.
pub async fn generate_statement<R>(
    resolver: &R,
    module: &str,
    func_name: &str,
    stmt: &StatementDescription,
) -> sqlts_codegen::Result<String>
where
    R: TypeResolver + ?Sized,
{
    let stmt = validate_statement(stmt)?;
    Ok(generate_function(resolver, module, func_name, stmt).await?)
}

/// Arguments following `client`.
fn function_params(params: Vec<Param>, convention: ParamConvention) -> Vec<Param> {
    if params.is_empty() || convention.is_positional() {
        return params;
    }

    let record = InlineObject::new()
        .comma_separated()
        .fields(params.into_iter().map(|p| Field::new(p.name, p.ty)))
        .render();
    vec![Param::new("params", record)]
}

fn return_type(columns: &[ResolvedColumn], row_count: RowCount) -> String {
    let row = InlineObject::new()
        .fields(columns.iter().map(|c| Field::quoted(&c.name, c.ty.as_str())))
        .render();

    match row_count {
        // Affected row count
        RowCount::Zero => "number".to_string(),
        RowCount::One => row,
        RowCount::ZeroOrOne => format!("{} | null", row),
        RowCount::Many => format!("Array<{}>", row),
    }
}

/// The bound values argument of `client.query`, including its leading comma.
fn query_values(stmt: &StatementDescription, convention: ParamConvention) -> String {
    if stmt.params.is_empty() {
        return String::new();
    }

    let prefix = if convention.is_positional() {
        ""
    } else {
        "params."
    };
    let values = stmt
        .params
        .iter()
        .map(|p| format!("{}{}", prefix, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(", [ {} ]", values)
}

fn output_value(row_count: RowCount) -> &'static str {
    match row_count {
        RowCount::Zero => "result.rowCount",
        RowCount::One => "result.rows[0]",
        RowCount::ZeroOrOne => "result.rows.length ? result.rows[0] : null",
        RowCount::Many => "result.rows",
    }
}
