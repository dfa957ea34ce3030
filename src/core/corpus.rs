/// Corpus loading — gathers training text from a directory of files.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("no files to train on in '{}'", .0.display())]
    NoTrainingFiles(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File names starting with this prefix are left out of training.
const SKIP_PREFIX: char = '_';

/// List the training files directly inside `dir`, sorted by file name.
///
/// Subdirectories and files whose name starts with `_` are skipped.
pub fn list_training_files(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(SKIP_PREFIX) {
            log::debug!("Skipping '{}'", name.to_string_lossy());
            continue;
        }
        files.push(entry.path());
    }

    files.sort();
    Ok(files)
}

/// Read and concatenate every training file in `dir`.
///
/// Files are joined with nothing in between, so the last word of one file
/// and the first word of the next are treated as neighbours.
pub fn load_training_text(dir: &Path) -> Result<String, CorpusError> {
    let files = list_training_files(dir)?;
    if files.is_empty() {
        return Err(CorpusError::NoTrainingFiles(dir.to_path_buf()));
    }
    read_training_files(&files)
}

/// Read and concatenate already-listed training files, in the given order.
pub fn read_training_files(files: &[PathBuf]) -> Result<String, CorpusError> {
    let mut text = String::new();
    for path in files {
        let contents = std::fs::read_to_string(path)?;
        log::info!("Read '{}' ({} bytes)", path.display(), contents.len());
        text.push_str(&contents);
    }

    Ok(text)
}
