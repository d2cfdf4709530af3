pub mod cli;
pub mod config;
pub mod output;

use crate::analysis::{PropertySetAnalysis, PropertySetAnalyzer};
use crate::error::{Error, Result};
use crate::generators::java::{self, JavaFileWriter};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use cli::{Cli, Commands};
pub use config::GenerateConfig;
pub use output::{Logger, WriteProgress};

/// What one generation run produced, per property set.
#[derive(Debug, Clone)]
pub struct PropertySetReport {
    pub property_set: String,
    pub source_file: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub property_sets: Vec<PropertySetReport>,
}

impl GenerateReport {
    pub fn file_count(&self) -> usize {
        self.property_sets.iter().map(|p| p.files.len()).sum()
    }
}

/// Analyze every property set file named by the configuration's input path.
pub fn analyze_inputs(config: &GenerateConfig) -> Result<Vec<PropertySetAnalysis>> {
    config.validate()?;
    let analyses = PropertySetAnalyzer::new().analyze_path(Path::new(&config.input_path))?;
    if analyses.is_empty() {
        return Err(Error::NoPropertySets(config.input_path.clone()));
    }
    Ok(analyses)
}

/// Generate Java enum sources for every property set named by the
/// configuration. Any input file carrying error-severity diagnostics blocks
/// the whole run before anything is written, matching the original handler's
/// refusal to generate from a file with error markers.
pub fn generate_from_config(config: &GenerateConfig) -> Result<GenerateReport> {
    let logger = Logger::new(config.is_verbose());
    let analyses = analyze_inputs(config)?;

    for analysis in &analyses {
        if analysis.has_errors() {
            for diagnostic in &analysis.diagnostics {
                logger.error(&format!("{}:{}", analysis.file.display(), diagnostic));
            }
            return Err(Error::BlockedByValidation {
                file: analysis.file.display().to_string(),
                error_count: analysis.error_count(),
            });
        }
        for diagnostic in analysis.diagnostics.iter().filter(|d| !d.is_error()) {
            logger.warning(&format!("{}:{}", analysis.file.display(), diagnostic));
        }
    }

    // Package folders are keyed by lowercased set name, so two sets whose
    // names differ only in case would share a folder and the later clear()
    // would erase the earlier set's files. Refuse the run instead.
    let mut packages: HashMap<String, String> = HashMap::new();
    for analysis in &analyses {
        if let Some(set) = &analysis.property_set {
            if let Some(first) = packages.insert(set.package_name(), set.name.clone()) {
                return Err(Error::DuplicatePackage {
                    package: set.package_name(),
                    first,
                    second: set.name.clone(),
                });
            }
        }
    }

    let output_root = Path::new(&config.output_path);
    let mut report = GenerateReport::default();

    for analysis in &analyses {
        let Some(property_set) = &analysis.property_set else {
            continue;
        };
        logger.verbose(&format!(
            "Generating Java types for property set '{}' ({})",
            property_set.name,
            analysis.file.display()
        ));

        let files = java::generate(property_set)?;
        let package = property_set.package_name();

        let progress = WriteProgress::new(&logger, &property_set.name, files.len());
        let mut writer = JavaFileWriter::new(output_root, &package)?;
        let stale = std::fs::read_dir(writer.output_dir())?.count();
        progress.folder_created(stale);

        let removed = writer.clear()?;
        progress.cleared(removed);

        for file in &files {
            writer.write_file(file)?;
            progress.wrote(&file.file_name);
            logger.verbose(&format!("  {}", writer.file_path(&file.file_name).display()));
        }
        progress.finish();

        report.property_sets.push(PropertySetReport {
            property_set: property_set.name.clone(),
            source_file: analysis.file.clone(),
            output_dir: writer.output_dir().to_path_buf(),
            files: writer.written_files().to_vec(),
        });
    }

    Ok(report)
}
