//! Types for code generation.
//!
//! [`GeneratedCode`] and [`GeneratedFile`] are the generator's output; the
//! `*Context` structs are the data the Handlebars templates render.
//!
//! # Examples
//!
//! ```
//! use tsgen_codegen::{Artifact, GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     artifact: Artifact::Types,
//!     path: "web/src/types/api.ts".into(),
//!     content: "export interface User {}\n".to_string(),
//! });
//!
//! assert_eq!(code.file_count(), 1);
//! assert!(code.file(Artifact::Client).is_none());
//! ```

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tsgen_core::{Error, Result};

/// The two files produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    /// Interface declarations
    Types,
    /// Fetch-based API client
    Client,
}

impl Artifact {
    /// Returns the artifact name used in logs and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of code generation containing all generated files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeneratedCode {
    /// Generated files in emission order
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates a new empty generated code container.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a generated file to the collection.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Returns the file of an artifact.
    #[must_use]
    pub fn file(&self, artifact: Artifact) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.artifact == artifact)
    }
}

/// A single generated file with path and content.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    /// Which artifact this is
    pub artifact: Artifact,
    /// Destination path
    pub path: PathBuf,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Writes the file, creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a directory cannot be created or the file
    /// cannot be written.
    pub fn write(&self) -> Result<()> {
        self.create_parent_dir()?;
        self.write_contents()
    }

    /// Creates the parent directory of the destination path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] naming the directory that could not be created.
    pub fn create_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Writes the content to an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_contents(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|source| Error::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        tracing::debug!(
            artifact = %self.artifact,
            path = %self.path.display(),
            bytes = self.content.len(),
            "Wrote generated file"
        );
        Ok(())
    }
}

/// Context for the declaration file template.
#[derive(Debug, Clone, Serialize)]
pub struct TypesContext {
    /// Command quoted in the header
    pub regenerate_command: String,
    /// One entry per record, in source order
    pub records: Vec<RecordContext>,
}

/// One `export interface` block.
#[derive(Debug, Clone, Serialize)]
pub struct RecordContext {
    /// Interface name
    pub name: String,
    /// Properties in declaration order
    pub fields: Vec<FieldContext>,
}

/// One interface property.
#[derive(Debug, Clone, Serialize)]
pub struct FieldContext {
    /// Property key
    pub key: String,
    /// Mapped TypeScript type
    pub ts_type: String,
    /// `false` appends `| null`
    pub required: bool,
}

/// Context for the API client template.
#[derive(Debug, Clone, Serialize)]
pub struct ClientContext {
    /// Command quoted in the header
    pub regenerate_command: String,
    /// Comma-separated import names, empty for no import line
    pub import_list: String,
    /// Module specifier of the declaration file
    pub types_import: String,
    /// Default base URL as a TypeScript string literal
    pub base_url: String,
    /// One entry per endpoint
    pub methods: Vec<MethodContext>,
}

/// One client method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodContext {
    /// Method name, e.g. `getUser`
    pub name: String,
    /// Parameter list without parentheses
    pub params: String,
    /// Resolved type of the returned promise
    pub response_type: String,
    /// URL path expression
    pub path_expr: String,
    /// HTTP method name
    pub method: String,
    /// Whether `data` is sent as JSON body
    pub has_body: bool,
}
