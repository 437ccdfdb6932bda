//! Import symbol collection and rendering.

use std::collections::HashSet;

use regex::Regex;

use crate::dialect::IMPORT_MODULE;
use crate::error::TypegenError;

/// Default importable-symbol pattern: letters only.
pub const DEFAULT_SYMBOL_PATTERN: &str = r"^[a-zA-Z]+$";

#[derive(Debug, Clone)]
/// Decides whether a name is an importable symbol.
pub struct SymbolPredicate {
    pattern: Regex,
    excluded: HashSet<String>,
}

impl SymbolPredicate {
    /// `excluded` names never count as symbols, even when they match.
    pub fn new(pattern: &str, excluded: &[String]) -> Result<Self, TypegenError> {
        let pattern = Regex::new(pattern).map_err(|e| {
            TypegenError::ConfigError(format!("invalid symbol pattern '{pattern}': {e}"))
        })?;
        Ok(Self {
            pattern,
            excluded: excluded.iter().cloned().collect(),
        })
    }

    pub fn is_symbol(&self, name: &str) -> bool {
        self.pattern.is_match(name) && !self.excluded.contains(name)
    }
}

impl Default for SymbolPredicate {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_SYMBOL_PATTERN).expect("valid regex"),
            excluded: HashSet::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Insertion-ordered set of symbols for the import line.
pub struct ImportCollector {
    symbols: Vec<String>,
    seen: HashSet<String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Adds `name` unless already present. Returns whether it was added.
    pub fn add(&mut self, name: &str) -> bool {
        if !self.seen.insert(name.to_string()) {
            return false;
        }
        self.symbols.push(name.to_string());
        true
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Renders the import statement, or `None` when nothing was collected.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!(
            "import {{ {} }} from \"{IMPORT_MODULE}\";",
            self.symbols.join(", ")
        ))
    }
}
