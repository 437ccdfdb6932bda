//! Generator configuration.
//!
//! Every setting has a default, so an empty file (or no file) reproduces the
//! built-in behavior. Example `typegen.toml`:
//!
//! ```toml
//! symbol_pattern = "^[a-zA-Z]+$"
//! non_import_names = ["bigint", "string"]
//! builtin_titles = ["Bool", "Option", "Integer"]
//!
//! [[canonical.type_map]]
//! pattern = "KeyHash"
//! target = "PubKeyHash"
//!
//! [[mesh.type_map]]
//! pattern = "int"
//! target = "bigint"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::dialect::Dialect;
use crate::error::TypegenError;
use crate::imports::{SymbolPredicate, DEFAULT_SYMBOL_PATTERN};
use crate::type_map::{TypeRule, TypeTable};

/// Titles the SDK already provides; definitions with these titles are skipped.
const DEFAULT_BUILTIN_TITLES: &[&str] = &[
    "Bool",
    "Option",
    "ByteString",
    "Integer",
    "PubKeyHash",
    "ScriptAddress",
    "Address",
    "Collection",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
/// Settings shared by both dialects plus per-dialect overrides.
pub struct GeneratorConfig {
    /// Regex deciding which names are importable symbols.
    #[serde(default = "default_symbol_pattern")]
    pub symbol_pattern: String,

    /// Names matching `symbol_pattern` that still stay off the import line.
    #[serde(default)]
    pub non_import_names: Vec<String>,

    #[serde(default = "default_builtin_titles")]
    pub builtin_titles: Vec<String>,

    #[serde(default)]
    pub canonical: DialectConfig,

    #[serde(default)]
    pub mesh: DialectConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectConfig {
    /// Replaces the built-in table when present. Order is match priority.
    #[serde(default)]
    pub type_map: Option<Vec<TypeRule>>,
}

fn default_symbol_pattern() -> String {
    DEFAULT_SYMBOL_PATTERN.to_string()
}

fn default_builtin_titles() -> Vec<String> {
    DEFAULT_BUILTIN_TITLES.iter().map(|t| t.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            symbol_pattern: default_symbol_pattern(),
            non_import_names: Vec::new(),
            builtin_titles: default_builtin_titles(),
            canonical: DialectConfig::default(),
            mesh: DialectConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, TypegenError> {
        toml::from_str(input).map_err(|e| TypegenError::ConfigError(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TypegenError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| {
            TypegenError::ConfigError(format!("failed to read '{}': {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded generator config");
        Self::from_toml_str(&input)
    }

    /// Lookup table for `dialect`: the configured one, else the built-in.
    pub fn type_table(&self, dialect: Dialect) -> TypeTable {
        let configured = match dialect {
            Dialect::Canonical => &self.canonical.type_map,
            Dialect::Mesh => &self.mesh.type_map,
        };
        match configured {
            Some(rules) => TypeTable::new(rules.clone()),
            None => dialect.default_table(),
        }
    }

    pub fn symbol_predicate(&self) -> Result<SymbolPredicate, TypegenError> {
        SymbolPredicate::new(&self.symbol_pattern, &self.non_import_names)
    }

    pub fn is_builtin_title(&self, title: &str) -> bool {
        self.builtin_titles.iter().any(|t| t == title)
    }
}
