//! `$ref` pointer resolution to leaf type tokens.
//!
//! Blueprint pointers look like `#/definitions/aiken~1crypto~1VerificationKeyHash`.
//! The final path segment names the definition; inside it, `~1` stands for a
//! literal `/` of the module path, and only the last module fragment is the
//! local type name.

use thiserror::Error;

const POINTER_SEPARATOR: char = '/';
const ESCAPED_SEPARATOR: &str = "~1";
const ESCAPED_TILDE: &str = "~0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why a reference could not be turned into a usable type token.
pub enum ReferenceError {
    /// The field has no `$ref` at all.
    #[error("field has no '$ref'")]
    Missing,
    /// The pointer resolves to an empty local name.
    #[error("reference '{0}' has no leaf type name")]
    EmptyLeaf(String),
    /// A `Tuple$` encoding carries no element types.
    #[error("tuple encoding '{0}' has no element types")]
    EmptyTuple(String),
}

/// Resolves a pointer string to its bare leaf type token.
///
/// `#/definitions/Int` resolves to `Int`, and
/// `#/definitions/cardano~1address~1Address` resolves to `Address`.
pub fn resolve_leaf_token(reference: &str) -> Result<String, ReferenceError> {
    let segment = reference
        .rsplit(POINTER_SEPARATOR)
        .next()
        .unwrap_or(reference);

    let fragment = segment
        .rsplit(ESCAPED_SEPARATOR)
        .next()
        .unwrap_or(segment);

    let token = fragment.replace(ESCAPED_TILDE, "~");
    if token.trim().is_empty() {
        return Err(ReferenceError::EmptyLeaf(reference.to_string()));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::{resolve_leaf_token, ReferenceError};

    #[test]
    fn takes_last_pointer_segment() {
        assert_eq!(resolve_leaf_token("#/definitions/Int").unwrap(), "Int");
        assert_eq!(resolve_leaf_token("ByteArray").unwrap(), "ByteArray");
    }

    #[test]
    fn unescapes_embedded_separator_to_last_fragment() {
        assert_eq!(
            resolve_leaf_token("#/definitions/aiken~1crypto~1Foo").unwrap(),
            "Foo"
        );
        assert_eq!(
            resolve_leaf_token(
                "#/definitions/Option$cardano~1address~1StakeCredential"
            )
            .unwrap(),
            "StakeCredential"
        );
    }

    #[test]
    fn resolved_token_never_contains_separator() {
        let token = resolve_leaf_token("#/definitions/a~1b~1c~1Leaf").unwrap();
        assert!(!token.contains('/'));
        assert!(!token.contains("~1"));
    }

    #[test]
    fn unescapes_tilde() {
        assert_eq!(resolve_leaf_token("#/definitions/A~0B").unwrap(), "A~B");
    }

    #[test]
    fn empty_leaf_is_an_error() {
        assert_eq!(
            resolve_leaf_token("#/definitions/"),
            Err(ReferenceError::EmptyLeaf("#/definitions/".to_string()))
        );
        assert!(resolve_leaf_token("#/definitions/aiken~1").is_err());
        assert!(resolve_leaf_token("").is_err());
    }
}
