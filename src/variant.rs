//! Constructor variant to declaration rendering.

use crate::blueprint::Field;
use crate::error::TypegenError;
use crate::imports::SymbolPredicate;
use crate::reference::{resolve_leaf_token, ReferenceError};
use crate::type_map::TypeMapper;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Declaration text for one variant plus the symbols it references.
pub struct EmittedVariant {
    /// Name the variant is declared under (dialect prefix applied).
    pub declared_name: String,
    pub lines: Vec<String>,
    /// Symbols in first-use order; the constructor symbol comes first.
    pub symbols: Vec<String>,
}

/// Renders one variant as a constructor-indexed declaration.
///
/// `definition` only labels errors. A variant with no fields still renders,
/// as an empty constructor.
pub fn emit_variant(
    definition: &str,
    title: &str,
    index: usize,
    fields: &[Field],
    mapper: &TypeMapper,
    predicate: &SymbolPredicate,
) -> Result<EmittedVariant, TypegenError> {
    let dialect = mapper.dialect();
    let declared_name = dialect.declared_name(title);
    let constructor = dialect.constructor_symbol(index);

    let mut symbols = vec![constructor.clone()];

    if fields.is_empty() {
        return Ok(EmittedVariant {
            lines: vec![format!("export type {declared_name} = {constructor}<[]>;")],
            declared_name,
            symbols,
        });
    }

    let mut lines = Vec::with_capacity(fields.len() + 2);
    lines.push(format!("export type {declared_name} = {constructor}<["));

    for (position, field) in fields.iter().enumerate() {
        let wrap = |source: ReferenceError| TypegenError::MalformedReference {
            definition: definition.to_string(),
            field: field_label(field, position),
            source,
        };

        let reference = field
            .reference
            .as_deref()
            .ok_or(ReferenceError::Missing)
            .map_err(wrap)?;
        let leaf = resolve_leaf_token(reference).map_err(wrap)?;
        let mapped = mapper.map(&leaf).map_err(wrap)?;

        let candidate = mapped.symbol_candidate();
        if predicate.is_symbol(candidate) && !symbols.iter().any(|s| s == candidate) {
            symbols.push(candidate.to_string());
        }

        let comment = match field.title.as_deref() {
            Some(label) => format!("{label}: {leaf}"),
            None => leaf.clone(),
        };
        lines.push(format!("  {}, // {comment}", mapped.render()));
    }

    lines.push("]>;".to_string());

    Ok(EmittedVariant {
        declared_name,
        lines,
        symbols,
    })
}

fn field_label(field: &Field, position: usize) -> String {
    field
        .title
        .clone()
        .unwrap_or_else(|| format!("#{position}"))
}
