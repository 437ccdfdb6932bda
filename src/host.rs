//! Host collaborator abstractions: where schema text comes from and where
//! generated lines go.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::TypegenError;

/// Supplies the full blueprint text for one generation run.
pub trait SchemaSource {
    /// Returns the schema document as UTF-8 text.
    fn read_schema_text(&self) -> Result<String, TypegenError>;
}

/// Accepts generated lines, in order, for insertion into an editing surface.
pub trait SnippetSink {
    fn insert_generated_text(&mut self, lines: &[String]) -> Result<(), TypegenError>;
}

#[derive(Debug, Clone)]
/// [`SchemaSource`] reading a blueprint file from disk.
pub struct FileSchemaSource {
    path: PathBuf,
}

impl FileSchemaSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaSource for FileSchemaSource {
    fn read_schema_text(&self) -> Result<String, TypegenError> {
        fs::read_to_string(&self.path).map_err(|e| {
            TypegenError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read '{}': {e}", self.path.display()),
            ))
        })
    }
}

#[derive(Debug, Clone)]
/// [`SchemaSource`] backed by caller-provided text.
pub struct TextSchemaSource {
    text: String,
}

impl TextSchemaSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SchemaSource for TextSchemaSource {
    fn read_schema_text(&self) -> Result<String, TypegenError> {
        Ok(self.text.clone())
    }
}

/// [`SnippetSink`] writing newline-terminated lines to any writer.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SnippetSink for WriterSink<W> {
    fn insert_generated_text(&mut self, lines: &[String]) -> Result<(), TypegenError> {
        for line in lines {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// [`SnippetSink`] collecting lines in memory.
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl SnippetSink for BufferSink {
    fn insert_generated_text(&mut self, lines: &[String]) -> Result<(), TypegenError> {
        self.lines.extend(lines.iter().cloned());
        Ok(())
    }
}
