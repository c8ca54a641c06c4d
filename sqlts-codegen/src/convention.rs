//! Parameter-passing convention of a statement.

use sqlts_ir::NamedValue;

/// How a generated function receives the statement's parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamConvention {
    /// Each parameter is its own argument, named `$1`, `$2`, ...
    Positional,
    /// All parameters are fields of a single `params` record.
    Named,
}

impl ParamConvention {
    /// Classify a parameter list.
    ///
    /// Positional only if every name is positional; a single natural name
    /// switches the whole list to the named convention.
    pub fn of(params: &[NamedValue]) -> Self {
        if params.iter().all(|p| is_positional_name(&p.name)) {
            ParamConvention::Positional
        } else {
            ParamConvention::Named
        }
    }

    pub fn is_positional(&self) -> bool {
        matches!(self, ParamConvention::Positional)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamConvention::Positional => "positional",
            ParamConvention::Named => "named",
        }
    }
}

/// Whether `name` contains a `$` directly followed by an ASCII digit.
///
/// The match is unanchored: `$1`, `$1a` and `p$1` all count as positional.
pub fn is_positional_name(name: &str) -> bool {
    name.as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'$' && pair[1].is_ascii_digit())
}
