pub mod lexer;
pub mod parser;
pub mod validator;

use crate::error::Result;
use crate::models::{Diagnostic, PropertySet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use parser::ParsedUnit;

/// Everything known about one analyzed property set source file: the parsed
/// model (when the header parsed at all) and the combined lexical, syntactic
/// and semantic diagnostics. This is the standalone equivalent of the IDE's
/// error markers on the selected file.
#[derive(Debug, Clone)]
pub struct PropertySetAnalysis {
    pub file: PathBuf,
    pub property_set: Option<PropertySet>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PropertySetAnalysis {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}

/// Front end for AADL property set files: lexes, parses and validates,
/// producing the model the generator consumes.
#[derive(Debug, Default)]
pub struct PropertySetAnalyzer;

impl PropertySetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze property set source text that did not come from a file.
    pub fn analyze_source(&self, file: impl Into<PathBuf>, source: &str) -> PropertySetAnalysis {
        let mut unit = parser::parse(source);
        if let Some(set) = &unit.property_set {
            unit.diagnostics
                .extend(validator::validate(set, &unit.type_positions));
        }
        PropertySetAnalysis {
            file: file.into(),
            property_set: unit.property_set,
            diagnostics: unit.diagnostics,
        }
    }

    /// Analyze a single `.aadl` file.
    pub fn analyze_file(&self, path: &Path) -> Result<PropertySetAnalysis> {
        let source = fs::read_to_string(path)?;
        Ok(self.analyze_source(path, &source))
    }

    /// Analyze every `.aadl` file under `path` (which may itself be a file),
    /// in a stable sorted order.
    pub fn analyze_path(&self, path: &Path) -> Result<Vec<PropertySetAnalysis>> {
        let mut files = Vec::new();
        if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(std::io::Error::from)?;
                if entry.file_type().is_file()
                    && entry
                        .path()
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("aadl"))
                {
                    files.push(entry.path().to_path_buf());
                }
            }
        }

        files
            .iter()
            .map(|file| self.analyze_file(file))
            .collect()
    }
}
