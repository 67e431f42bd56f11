use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use tracing::{debug, trace};

use crate::common::Record;
use crate::error::JobError;

/// Files directly inside `input_dir` whose name matches `file_pattern`, sorted by name.
pub fn read_files_from_dir(input_dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>, JobError> {
    if !input_dir.is_dir() {
        return Err(JobError::MissingInputDirectory {
            path: input_dir.to_path_buf(),
        });
    }
    let pattern = Pattern::new(file_pattern).map_err(|source| JobError::InvalidPattern {
        pattern: file_pattern.to_string(),
        source,
    })?;

    // `*` must not pick up hidden files such as editor backups
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let entries = fs::read_dir(input_dir).map_err(|e| JobError::unreadable(input_dir, e))?;
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| JobError::unreadable(input_dir, e))?;
        let path = entry.path();
        let matches = path
            .file_name()
            .map(|name| pattern.matches_with(&name.to_string_lossy(), options))
            .unwrap_or(false);

        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads every line of one file, blank lines included, terminators removed.
pub fn read_lines(path: &Path) -> Result<Vec<Record>, JobError> {
    let file = File::open(path).map_err(|e| JobError::unreadable(path, e))?;
    let source = path.display().to_string();
    BufReader::new(file)
        .lines()
        .map(|line| {
            line.map(|text| Record::new(source.clone(), text))
                .map_err(|e| JobError::unreadable(path, e))
        })
        .collect()
}

/// Ingests all matching files in order, returning the records and how many files were read.
pub fn load_input(input_dir: &Path, file_pattern: &str) -> Result<(Vec<Record>, usize), JobError> {
    let files = read_files_from_dir(input_dir, file_pattern)?;
    let mut records = Vec::new();
    for path in &files {
        let lines = read_lines(path)?;
        trace!("read {} lines from {}", lines.len(), path.display());
        records.extend(lines);
    }
    debug!(
        files = files.len(),
        records = records.len(),
        "ingested {}",
        input_dir.display()
    );
    Ok((records, files.len()))
}
