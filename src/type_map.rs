//! Leaf type token to target type mapping.
//!
//! Mapping is a first-match scan over an ordered rule list where a rule
//! matches when its pattern is a *substring* of the token. Several patterns
//! are substrings of others (`KeyHash` / `ScriptHash` / `Hash`), so rule
//! order decides the result, not pattern length.

use serde::Deserialize;

use crate::dialect::Dialect;
use crate::reference::ReferenceError;

const TUPLE_MARKER: &str = "Tuple$";
const TUPLE_ELEMENT_DELIMITER: char = '_';

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One `(pattern, target)` pair of a [`TypeTable`].
pub struct TypeRule {
    pub pattern: String,
    pub target: String,
}

impl TypeRule {
    pub fn new(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered substring lookup table.
pub struct TypeTable {
    rules: Vec<TypeRule>,
}

impl TypeTable {
    pub fn new(rules: Vec<TypeRule>) -> Self {
        Self { rules }
    }

    /// Built-in table for the canonical dialect.
    pub fn canonical() -> Self {
        Self::from_pairs(&[
            ("WithdrawalScriptHashes", "WithdrawalScriptHashes"),
            ("ScriptHash", "ScriptHash"),
            ("KeyHash", "PubKeyHash"),
            ("Address", "ScriptAddress"),
            ("PolicyId", "PolicyId"),
            ("ByteArray", "ByteString"),
            ("Int", "Integer"),
        ])
    }

    /// Built-in table for the Mesh dialect. Patterns are lower case.
    pub fn mesh() -> Self {
        Self::from_pairs(&[
            ("bytestring", "string"),
            ("int", "bigint"),
            ("bool", "MBool"),
            ("tuple", "MTuple"),
            ("keyhash", "pubKeyHash"),
            ("address", "scriptAddress"),
            ("option", "option"),
        ])
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(pattern, target)| TypeRule::new(*pattern, *target))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[TypeRule] {
        &self.rules
    }

    /// Returns the target of the first rule whose pattern occurs in `token`.
    ///
    /// With `fold_case`, the token is lower-cased before matching and the
    /// patterns are expected to be lower case already.
    pub fn lookup(&self, token: &str, fold_case: bool) -> Option<&str> {
        let folded;
        let haystack = if fold_case {
            folded = token.to_lowercase();
            folded.as_str()
        } else {
            token
        };

        self.rules
            .iter()
            .find(|rule| haystack.contains(rule.pattern.as_str()))
            .map(|rule| rule.target.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of mapping one leaf token.
pub enum MappedType {
    /// A table rule matched.
    Mapped(String),
    /// No rule matched; the (dialect-normalized) token is used as is.
    PassThrough(String),
    /// A `Tuple$A_B` encoding, rendered as `<symbol><A, B>`.
    Tuple {
        symbol: String,
        elements: Vec<String>,
        separator: &'static str,
    },
}

impl MappedType {
    /// Target-language text of the type.
    pub fn render(&self) -> String {
        match self {
            MappedType::Mapped(name) | MappedType::PassThrough(name) => name.clone(),
            MappedType::Tuple {
                symbol,
                elements,
                separator,
            } => format!("{symbol}<{}>", elements.join(separator)),
        }
    }

    /// Name that would need importing if it is a symbol at all.
    pub fn symbol_candidate(&self) -> &str {
        match self {
            MappedType::Mapped(name) | MappedType::PassThrough(name) => name,
            MappedType::Tuple { symbol, .. } => symbol,
        }
    }
}

/// Maps leaf tokens to one dialect's target vocabulary.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    dialect: Dialect,
    table: TypeTable,
}

impl TypeMapper {
    pub fn new(dialect: Dialect, table: TypeTable) -> Self {
        Self { dialect, table }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Maps `token` to a target type.
    ///
    /// Tuple encodings bypass the table. Otherwise the token is normalized
    /// once for the dialect, then looked up, then passed through on no match.
    pub fn map(&self, token: &str) -> Result<MappedType, ReferenceError> {
        if let Some(elements) = parse_tuple_elements(token)? {
            return Ok(MappedType::Tuple {
                symbol: self.dialect.tuple_symbol().to_string(),
                elements,
                separator: self.dialect.tuple_separator(),
            });
        }

        let candidate = self.dialect.normalize_token(token);
        match self.table.lookup(&candidate, self.dialect.folds_case()) {
            Some(target) => Ok(MappedType::Mapped(target.to_string())),
            None => {
                tracing::info!(
                    token,
                    dialect = self.dialect.name(),
                    "no type mapping matched, passing token through"
                );
                Ok(MappedType::PassThrough(candidate))
            }
        }
    }
}

/// Splits a `Tuple$A_B_C` token into `["A", "B", "C"]`.
///
/// Returns `Ok(None)` when the token is not a tuple encoding.
pub fn parse_tuple_elements(token: &str) -> Result<Option<Vec<String>>, ReferenceError> {
    let Some((_, rest)) = token.split_once(TUPLE_MARKER) else {
        return Ok(None);
    };

    let elements: Vec<String> = rest
        .split(TUPLE_ELEMENT_DELIMITER)
        .filter(|element| !element.is_empty())
        .map(str::to_string)
        .collect();

    if elements.is_empty() {
        return Err(ReferenceError::EmptyTuple(token.to_string()));
    }
    Ok(Some(elements))
}
