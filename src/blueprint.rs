//! Public document model for blueprint schemas.
//!
//! Only the parts of a blueprint that drive type generation are modeled:
//! the `definitions` map, each definition's `title` and `anyOf` variants,
//! and each variant's `fields`. Everything else in the document is ignored.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::TypegenError;

#[derive(Debug, Clone, Default, Deserialize)]
/// Parsed blueprint document.
pub struct Blueprint {
    /// Definitions keyed by their pointer key, in document order.
    #[serde(default)]
    pub definitions: Option<IndexMap<String, Definition>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// A single named data shape.
pub struct Definition {
    /// Declared type name. Definitions without a title are not generated.
    #[serde(default)]
    pub title: Option<String>,
    /// Constructor variants. `None` when the definition is a primitive.
    #[serde(default, rename = "anyOf")]
    pub any_of: Option<Vec<Variant>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// One constructor of a sum type.
pub struct Variant {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// A positional constructor argument pointing at another definition.
pub struct Field {
    /// Human label, kept as a trailing comment in generated output.
    #[serde(default)]
    pub title: Option<String>,
    /// JSON pointer to the referenced definition (`#/definitions/...`).
    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,
}

impl Blueprint {
    /// Iterates `(key, definition)` pairs in document order.
    pub fn definitions(&self) -> impl DoubleEndedIterator<Item = (&String, &Definition)> {
        self.definitions.iter().flat_map(|defs| defs.iter())
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.as_ref().map(IndexMap::len).unwrap_or(0)
    }
}

/// Parses blueprint JSON text into a [`Blueprint`].
///
/// The root must be a JSON object; a `definitions` key, when present and not
/// `null`, must be an object whose values are objects.
pub fn parse_blueprint(input: &str) -> Result<Blueprint, TypegenError> {
    let mut de = serde_json::Deserializer::from_str(input);
    let blueprint: Blueprint = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let path = e.path().to_string();
        let inner = e.into_inner();
        if path == "." {
            TypegenError::MalformedDocument(inner.to_string())
        } else {
            TypegenError::MalformedDocument(format!("at '{path}': {inner}"))
        }
    })?;
    de.end()
        .map_err(|e| TypegenError::MalformedDocument(e.to_string()))?;
    Ok(blueprint)
}

#[cfg(test)]
mod tests {
    use super::parse_blueprint;

    #[test]
    fn keeps_definition_order() {
        let input = r##"{
          "definitions": {
            "Zeta": { "title": "Zeta" },
            "Alpha": { "title": "Alpha" },
            "Mid": { "title": "Mid" }
          }
        }"##;
        let blueprint = parse_blueprint(input).unwrap();
        let keys: Vec<&str> = blueprint.definitions().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn reads_variants_and_fields() {
        let input = r##"{
          "preamble": { "title": "demo" },
          "definitions": {
            "types/Datum": {
              "title": "Datum",
              "anyOf": [{
                "title": "Datum",
                "dataType": "constructor",
                "index": 0,
                "fields": [
                  { "title": "owner", "$ref": "#/definitions/VerificationKeyHash" }
                ]
              }]
            }
          }
        }"##;
        let blueprint = parse_blueprint(input).unwrap();
        let (_, def) = blueprint.definitions().next().unwrap();
        let variants = def.any_of.as_ref().unwrap();
        assert_eq!(variants[0].fields[0].title.as_deref(), Some("owner"));
        assert_eq!(
            variants[0].fields[0].reference.as_deref(),
            Some("#/definitions/VerificationKeyHash")
        );
    }

    #[test]
    fn missing_or_null_definitions_is_empty() {
        assert_eq!(parse_blueprint("{}").unwrap().definition_count(), 0);
        assert_eq!(
            parse_blueprint(r#"{"definitions": null}"#)
                .unwrap()
                .definition_count(),
            0
        );
    }

    #[test]
    fn rejects_invalid_json_and_bad_shapes() {
        let err = parse_blueprint("{ not json").unwrap_err();
        assert!(err.to_string().contains("malformed document"));

        let err = parse_blueprint(r#"{"definitions": [1, 2]}"#).unwrap_err();
        assert!(err.to_string().contains("definitions"), "{err}");

        let err = parse_blueprint("42").unwrap_err();
        assert!(err.to_string().contains("malformed document"));
    }
}
