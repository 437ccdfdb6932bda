//! Definition traversal and per-run accumulator state.
//!
//! Definitions are visited in reverse document order: blueprint generators
//! list composite types first and their building blocks last, and the
//! building blocks have to be registered before anything referencing them
//! is rendered.

use std::collections::HashSet;

use crate::blueprint::{Blueprint, Definition};
use crate::config::GeneratorConfig;
use crate::error::TypegenError;
use crate::imports::{ImportCollector, SymbolPredicate};
use crate::type_map::TypeMapper;
use crate::variant::emit_variant;

const NESTING_MARKER: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What happened to one definition during the walk.
pub enum Visit {
    /// No `title`; nothing recorded.
    Untitled,
    /// Title is provided by the target SDK.
    Builtin,
    /// Title was registered by an earlier definition.
    Duplicate,
    /// Title registered, but no declaration text produced.
    Registered,
    /// Title registered and a declaration block produced.
    Emitted,
}

#[derive(Debug, Default)]
/// Accumulators for a single generation run.
pub struct WalkState {
    registered_titles: HashSet<String>,
    emitted_variants: HashSet<String>,
    customs: Vec<String>,
    pub imports: ImportCollector,
    pub blocks: Vec<Vec<String>>,
}

impl WalkState {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_registered(&self, title: &str) -> bool {
        self.registered_titles.contains(title)
    }

    /// Titles tracked but not imported (nested keys or non-symbol names).
    pub fn customs(&self) -> &[String] {
        &self.customs
    }
}

/// Walks a blueprint and produces declaration blocks plus imports.
pub struct DefinitionWalker<'a> {
    mapper: TypeMapper,
    predicate: SymbolPredicate,
    config: &'a GeneratorConfig,
}

impl<'a> DefinitionWalker<'a> {
    pub fn new(mapper: TypeMapper, config: &'a GeneratorConfig) -> Result<Self, TypegenError> {
        Ok(Self {
            mapper,
            predicate: config.symbol_predicate()?,
            config,
        })
    }

    /// Visits every definition, last to first, threading `state` through.
    pub fn walk(
        &self,
        blueprint: &Blueprint,
        mut state: WalkState,
    ) -> Result<WalkState, TypegenError> {
        for (key, definition) in blueprint.definitions().rev() {
            let visit = self.visit(key, definition, &mut state)?;
            tracing::debug!(key = key.as_str(), ?visit, "visited definition");
        }
        Ok(state)
    }

    fn visit(
        &self,
        key: &str,
        definition: &Definition,
        state: &mut WalkState,
    ) -> Result<Visit, TypegenError> {
        let Some(title) = definition.title.as_deref() else {
            return Ok(Visit::Untitled);
        };

        if self.config.is_builtin_title(title) {
            return Ok(Visit::Builtin);
        }
        if state.is_registered(title) {
            return Ok(Visit::Duplicate);
        }

        if !key.contains(NESTING_MARKER) && self.predicate.is_symbol(title) {
            state.imports.add(title);
        } else {
            state.customs.push(title.to_string());
        }
        state.registered_titles.insert(title.to_string());

        let Some(variants) = definition.any_of.as_deref() else {
            return Ok(Visit::Registered);
        };

        let dialect = self.mapper.dialect();
        let mut alternatives = Vec::new();
        let mut bodies = Vec::new();

        for (index, variant) in variants.iter().enumerate() {
            let Some(variant_title) = variant.title.as_deref() else {
                continue;
            };
            alternatives.push(dialect.declared_name(variant_title));

            if !state.emitted_variants.insert(variant_title.to_string()) {
                continue;
            }

            let emitted = emit_variant(
                title,
                variant_title,
                index,
                &variant.fields,
                &self.mapper,
                &self.predicate,
            )?;
            for symbol in &emitted.symbols {
                state.imports.add(symbol);
            }
            bodies.extend(emitted.lines);
        }

        let mut block = Vec::new();
        if variants.len() > 1 && !alternatives.is_empty() {
            block.push(format!(
                "export type {} = {};",
                dialect.declared_name(title),
                alternatives.join(" | ")
            ));
            if !bodies.is_empty() {
                block.push(String::new());
            }
        }
        block.extend(bodies);

        if block.is_empty() {
            return Ok(Visit::Registered);
        }
        state.blocks.push(block);
        Ok(Visit::Emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::{DefinitionWalker, WalkState};
    use crate::blueprint::parse_blueprint;
    use crate::config::GeneratorConfig;
    use crate::dialect::Dialect;
    use crate::type_map::TypeMapper;

    fn walk(input: &str, dialect: Dialect) -> WalkState {
        let config = GeneratorConfig::default();
        let mapper = TypeMapper::new(dialect, config.type_table(dialect));
        let walker = DefinitionWalker::new(mapper, &config).unwrap();
        walker
            .walk(&parse_blueprint(input).unwrap(), WalkState::new())
            .unwrap()
    }

    #[test]
    fn visits_in_reverse_document_order() {
        let input = r##"{"definitions": {
          "a/First": {"title": "First", "anyOf": [{"title": "First", "fields": []}]},
          "a/Second": {"title": "Second", "anyOf": [{"title": "Second", "fields": []}]},
          "a/Third": {"title": "Third", "anyOf": [{"title": "Third", "fields": []}]}
        }}"##;
        let state = walk(input, Dialect::Canonical);
        let heads: Vec<&str> = state.blocks.iter().map(|b| b[0].as_str()).collect();
        assert_eq!(
            heads,
            vec![
                "export type Third = ConStr0<[]>;",
                "export type Second = ConStr0<[]>;",
                "export type First = ConStr0<[]>;",
            ]
        );
    }

    #[test]
    fn repeated_title_is_emitted_once() {
        let input = r##"{"definitions": {
          "a/Option$Int": {"title": "Maybe", "anyOf": [
            {"title": "Some", "fields": [{"$ref": "#/definitions/Int"}]},
            {"title": "Nothing", "fields": []}
          ]},
          "a/Option$ByteArray": {"title": "Maybe", "anyOf": [
            {"title": "Some", "fields": [{"$ref": "#/definitions/ByteArray"}]},
            {"title": "Nothing", "fields": []}
          ]}
        }}"##;
        let state = walk(input, Dialect::Canonical);
        assert_eq!(state.blocks.len(), 1);
        assert_eq!(state.customs(), ["Maybe"]);
        assert!(state.blocks[0].contains(&"  ByteString, // ByteArray".to_string()));
    }

    #[test]
    fn shared_variant_only_contributes_to_alternation() {
        let input = r##"{"definitions": {
          "a/Outer": {"title": "Outer", "anyOf": [
            {"title": "Shared", "fields": []},
            {"title": "Other", "fields": []}
          ]},
          "a/Inner": {"title": "Inner", "anyOf": [
            {"title": "Shared", "fields": []},
            {"title": "Local", "fields": []}
          ]}
        }}"##;
        let state = walk(input, Dialect::Canonical);
        assert_eq!(state.blocks.len(), 2);
        assert_eq!(
            state.blocks[1],
            vec![
                "export type Outer = Shared | Other;",
                "",
                "export type Other = ConStr1<[]>;",
            ]
        );
    }

    #[test]
    fn untitled_variants_keep_positional_indices() {
        let input = r##"{"definitions": {
          "a/Action": {"title": "Action", "anyOf": [
            {"fields": []},
            {"title": "Mint", "fields": [{"title": "qty", "$ref": "#/definitions/Int"}]}
          ]}
        }}"##;
        let state = walk(input, Dialect::Mesh);
        assert_eq!(
            state.blocks[0],
            vec![
                "export type MAction = MMint;",
                "",
                "export type MMint = MConStr1<[",
                "  bigint, // qty: Int",
                "]>;",
            ]
        );
    }

    #[test]
    fn classifies_importable_and_custom_titles() {
        let input = r##"{"definitions": {
          "Data": {"title": "Data"},
          "types/Datum": {"title": "Datum"},
          "Pair2": {"title": "Pair2"},
          "Bool": {"title": "Bool", "anyOf": [{"title": "False"}, {"title": "True"}]},
          "Untitled": {"dataType": "integer"}
        }}"##;
        let state = walk(input, Dialect::Canonical);
        assert_eq!(state.imports.symbols(), ["Data"]);
        assert_eq!(state.customs(), ["Pair2", "Datum"]);
        assert!(state.blocks.is_empty());
    }

    #[test]
    fn referenced_definition_is_emitted_even_if_already_imported() {
        let input = r##"{"definitions": {
          "cardano/address/Credential": {"title": "Credential", "anyOf": [
            {"title": "VerificationKey", "fields": [{"$ref": "#/definitions/VerificationKeyHash"}]},
            {"title": "Script", "fields": [{"$ref": "#/definitions/ScriptHash"}]}
          ]},
          "types/Datum": {"title": "Datum", "anyOf": [{"title": "Datum", "fields": [
            {"title": "owner", "$ref": "#/definitions/cardano~1address~1Credential"}
          ]}]}
        }}"##;
        let state = walk(input, Dialect::Canonical);
        assert!(state.imports.contains("Credential"));
        assert_eq!(state.blocks.len(), 2);
        assert_eq!(state.blocks[1][0], "export type Credential = VerificationKey | Script;");
        assert_eq!(state.customs(), ["Datum", "Credential"]);
    }

    #[test]
    fn malformed_reference_aborts_walk() {
        let input = r##"{"definitions": {
          "a/Bad": {"title": "Bad", "anyOf": [
            {"title": "Bad", "fields": [{"title": "x", "$ref": "#/definitions/Tuple$"}]}
          ]}
        }}"##;
        let config = GeneratorConfig::default();
        let mapper = TypeMapper::new(Dialect::Canonical, config.type_table(Dialect::Canonical));
        let walker = DefinitionWalker::new(mapper, &config).unwrap();
        let err = walker
            .walk(&parse_blueprint(input).unwrap(), WalkState::new())
            .unwrap_err();
        assert!(err.to_string().contains("no element types"), "{err}");
    }
}
