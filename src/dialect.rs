//! Naming conventions of the two output dialects.

use crate::type_map::TypeTable;

/// Module every generated import statement names.
pub const IMPORT_MODULE: &str = "@meshsdk/core";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Output convention for generated declarations.
pub enum Dialect {
    /// JSON-schema-faithful types: `ConStr<i>`, titles unchanged.
    Canonical,
    /// Mesh SDK data types: `MConStr<i>`, titles prefixed with `M`.
    Mesh,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Canonical => "canonical",
            Dialect::Mesh => "mesh",
        }
    }

    /// Prefix applied to every declared type name.
    pub fn title_prefix(self) -> &'static str {
        match self {
            Dialect::Canonical => "",
            Dialect::Mesh => "M",
        }
    }

    /// Prefix of the positional constructor type, followed by the index.
    pub fn constructor_prefix(self) -> &'static str {
        match self {
            Dialect::Canonical => "ConStr",
            Dialect::Mesh => "MConStr",
        }
    }

    pub fn tuple_symbol(self) -> &'static str {
        match self {
            Dialect::Canonical => "Tuple",
            Dialect::Mesh => "MTuple",
        }
    }

    pub fn tuple_separator(self) -> &'static str {
        ", "
    }

    /// Whether table lookup compares against the lower-cased token.
    pub fn folds_case(self) -> bool {
        matches!(self, Dialect::Mesh)
    }

    pub fn default_table(self) -> TypeTable {
        match self {
            Dialect::Canonical => TypeTable::canonical(),
            Dialect::Mesh => TypeTable::mesh(),
        }
    }

    /// Applies the dialect's token casing. Mesh lower-cases the first char.
    pub fn normalize_token(self, token: &str) -> String {
        match self {
            Dialect::Canonical => token.to_string(),
            Dialect::Mesh => lower_first_char(token),
        }
    }

    pub fn declared_name(self, title: &str) -> String {
        format!("{}{title}", self.title_prefix())
    }

    pub fn constructor_symbol(self, index: usize) -> String {
        format!("{}{index}", self.constructor_prefix())
    }
}

fn lower_first_char(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
