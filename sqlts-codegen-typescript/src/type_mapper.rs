//! Built-in Postgres to TypeScript type resolver.

use async_trait::async_trait;
use indexmap::IndexMap;
use sqlts_codegen::{ResolveError, TypeResolver};

/// Maps Postgres type names to the types produced by the `pg` driver.
///
/// Overrides take precedence over the built-in table, also when the
/// overridden type appears as an array element.
#[derive(Debug, Clone, Default)]
pub struct PgTypeResolver {
    overrides: IndexMap<String, String>,
}

impl PgTypeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map each `db_type` to its `ts_type`, replacing any built-in mapping.
    pub fn with_overrides<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The non-nullable TypeScript type for `db_type`.
    pub fn ts_type(&self, db_type: &str) -> Result<String, ResolveError> {
        if let Some(ty) = self.overrides.get(db_type) {
            return Ok(ty.clone());
        }
        if let Some(ty) = builtin_type(db_type) {
            return Ok(ty.to_string());
        }

        // Arrays are spelled `_int4` in the catalog and `int4[]` in SQL.
        let element = db_type
            .strip_prefix('_')
            .or_else(|| db_type.strip_suffix("[]"))
            .filter(|e| !e.is_empty());
        match element {
            Some(element) => self
                .ts_type(element)
                .map(|ty| format!("Array<{}>", ty))
                .map_err(|_| ResolveError::UnknownType(db_type.to_string())),
            None => Err(ResolveError::UnknownType(db_type.to_string())),
        }
    }
}

#[async_trait]
impl TypeResolver for PgTypeResolver {
    async fn param_type(&self, db_type: &str, nullable: bool) -> Result<String, ResolveError> {
        let ty = self.ts_type(db_type)?;
        Ok(if nullable {
            format!("{} | null", ty)
        } else {
            ty
        })
    }
}

fn builtin_type(db_type: &str) -> Option<&'static str> {
    let ty = match db_type {
        "bool" => "boolean",
        "int2" | "int4" | "float4" | "float8" | "oid" => "number",
        // 64-bit and arbitrary precision values don't fit a JS number
        "int8" | "numeric" | "money" => "string",
        "text" | "varchar" | "bpchar" | "char" | "name" | "uuid" | "citext" | "inet" | "cidr"
        | "time" | "timetz" | "interval" | "xml" => "string",
        "date" | "timestamp" | "timestamptz" => "Date",
        "json" | "jsonb" => "unknown",
        "bytea" => "Buffer",
        "void" => "void",
        _ => return None,
    };
    Some(ty)
}

#[cfg(test)]
mod tests {
    use sqlts_ir::NamedValue;

    use super::*;

    #[test]
    fn test_builtin_types() {
        let resolver = PgTypeResolver::new();

        assert_eq!(resolver.ts_type("bool").unwrap(), "boolean");
        assert_eq!(resolver.ts_type("int4").unwrap(), "number");
        assert_eq!(resolver.ts_type("int8").unwrap(), "string");
        assert_eq!(resolver.ts_type("varchar").unwrap(), "string");
        assert_eq!(resolver.ts_type("timestamptz").unwrap(), "Date");
        assert_eq!(resolver.ts_type("jsonb").unwrap(), "unknown");
        assert_eq!(resolver.ts_type("bytea").unwrap(), "Buffer");
    }

    #[test]
    fn test_array_types() {
        let resolver = PgTypeResolver::new();

        assert_eq!(resolver.ts_type("_int4").unwrap(), "Array<number>");
        assert_eq!(resolver.ts_type("text[]").unwrap(), "Array<string>");
        assert_eq!(resolver.ts_type("_text[]").unwrap(), "Array<Array<string>>");
    }

    #[test]
    fn test_unknown_type() {
        let resolver = PgTypeResolver::new();

        let err = resolver.ts_type("tsvector").unwrap_err();
        assert!(matches!(err, ResolveError::UnknownType(ty) if ty == "tsvector"));

        let err = resolver.ts_type("_tsvector").unwrap_err();
        assert!(matches!(err, ResolveError::UnknownType(ty) if ty == "_tsvector"));

        assert!(resolver.ts_type("_").is_err());
    }

    #[test]
    fn test_overrides() {
        let resolver = PgTypeResolver::new()
            .with_overrides([("int8", "bigint"), ("mood", "'happy' | 'sad'")]);

        assert_eq!(resolver.ts_type("int8").unwrap(), "bigint");
        assert_eq!(resolver.ts_type("_int8").unwrap(), "Array<bigint>");
        assert_eq!(resolver.ts_type("mood").unwrap(), "'happy' | 'sad'");
    }

    #[tokio::test]
    async fn test_nullable_param() {
        let resolver = PgTypeResolver::new();

        assert_eq!(resolver.param_type("text", false).await.unwrap(), "string");
        assert_eq!(
            resolver.param_type("text", true).await.unwrap(),
            "string | null"
        );
    }

    #[tokio::test]
    async fn test_column_type() {
        let resolver = PgTypeResolver::new();
        let column = NamedValue::new("tags", "_text").nullable();

        let resolved = resolver.column_type(&column).await.unwrap();
        assert_eq!(resolved.name, "tags");
        assert_eq!(resolved.ty, "Array<string> | null");
    }
}
