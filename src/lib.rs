pub mod blueprint;
pub mod config;
pub mod dialect;
pub mod error;
pub mod host;
pub mod imports;
pub mod reference;
pub mod snippet;
pub mod type_map;
pub mod variant;
pub mod walker;

pub use blueprint::{parse_blueprint, Blueprint, Definition, Field, Variant};
pub use config::GeneratorConfig;
pub use dialect::{Dialect, IMPORT_MODULE};
pub use error::TypegenError;
pub use host::{
    BufferSink, FileSchemaSource, SchemaSource, SnippetSink, TextSchemaSource, WriterSink,
};
pub use snippet::render_snippet_text;

use snippet::assemble_snippet;
use type_map::TypeMapper;
use walker::{DefinitionWalker, WalkState};

/// Generates canonical (JSON-schema-faithful) declarations with default config.
pub fn generate_canonical_types(input: &str) -> Result<Vec<String>, TypegenError> {
    generate_types(input, Dialect::Canonical, &GeneratorConfig::default())
}

/// Generates Mesh SDK declarations with default config.
pub fn generate_mesh_types(input: &str) -> Result<Vec<String>, TypegenError> {
    generate_types(input, Dialect::Mesh, &GeneratorConfig::default())
}

/// Generates declarations for `dialect` from blueprint JSON text.
///
/// Returns the import line (if any) followed by declaration blocks, one
/// output line per element. Either the whole output or an error is returned.
pub fn generate_types(
    input: &str,
    dialect: Dialect,
    config: &GeneratorConfig,
) -> Result<Vec<String>, TypegenError> {
    let blueprint = parse_blueprint(input)?;

    let mapper = TypeMapper::new(dialect, config.type_table(dialect));
    let walker = DefinitionWalker::new(mapper, config)?;
    let state = walker.walk(&blueprint, WalkState::new())?;

    tracing::info!(
        dialect = dialect.name(),
        definitions = blueprint.definition_count(),
        declarations = state.blocks.len(),
        imports = state.imports.len(),
        "generated blueprint types"
    );

    Ok(assemble_snippet(&state.imports, &state.blocks))
}

/// Runs one host-driven generation: read, generate, insert.
///
/// The sink is only called after generation fully succeeds, and not at all
/// when there is nothing to insert. Returns the number of lines inserted.
pub fn generate_snippet(
    source: &dyn SchemaSource,
    sink: &mut dyn SnippetSink,
    dialect: Dialect,
    config: &GeneratorConfig,
) -> Result<usize, TypegenError> {
    tracing::info!(dialect = dialect.name(), "analyzing blueprint");
    let input = source.read_schema_text()?;
    let lines = generate_types(&input, dialect, config)?;

    if lines.is_empty() {
        tracing::info!("blueprint has no definitions to generate");
        return Ok(0);
    }

    sink.insert_generated_text(&lines)?;
    Ok(lines.len())
}
