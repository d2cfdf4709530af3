use crate::error::Result;
use crate::models::GeneratedFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one property set's generated Java sources into
/// `<output root>/<package>/`, replacing whatever a previous run left there.
pub struct JavaFileWriter {
    output_dir: PathBuf,
    written_files: Vec<String>,
}

impl JavaFileWriter {
    /// Create the output folder for a property set's package, including any
    /// missing parents.
    pub fn new(output_root: &Path, package: &str) -> Result<Self> {
        let output_dir = output_root.join(package);
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            written_files: Vec::new(),
        })
    }

    /// Delete every existing entry in the output folder. Generated output
    /// supersedes prior output wholesale, so stale files from removed types
    /// never linger. Returns the number of entries removed.
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for entry in fs::read_dir(&self.output_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
            removed += 1;
        }
        Ok(removed)
    }

    /// Persist one generated file.
    pub fn write_file(&mut self, file: &GeneratedFile) -> Result<()> {
        fs::write(self.file_path(&file.file_name), &file.contents)?;
        self.written_files.push(file.file_name.clone());
        Ok(())
    }

    pub fn written_files(&self) -> &[String] {
        &self.written_files
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
