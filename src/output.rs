use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::common::Aggregate;
use crate::error::JobError;

/// Clears `dir` if present (contents, then the directory itself) and recreates it empty.
pub fn create_output_directory(dir: &Path) -> Result<(), JobError> {
    clear_output_directory(dir)?;
    fs::create_dir(dir).map_err(|e| JobError::output_conflict(dir, "create directory", e))?;
    debug!("created output directory {}", dir.display());
    Ok(())
}

fn clear_output_directory(dir: &Path) -> Result<(), JobError> {
    let metadata = match fs::symlink_metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(JobError::output_conflict(dir, "inspect path", e)),
    };
    if !metadata.is_dir() {
        return Err(JobError::output_conflict(
            dir,
            "path is not a directory",
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "refusing to remove a file"),
        ));
    }

    let entries = fs::read_dir(dir).map_err(|e| JobError::output_conflict(dir, "list entries", e))?;
    for entry in entries {
        let entry = entry.map_err(|e| JobError::output_conflict(dir, "list entries", e))?;
        let path = entry.path();
        let is_dir = entry
            .file_type()
            .map_err(|e| JobError::output_conflict(&path, "remove entry", e))?
            .is_dir();
        let removed = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| JobError::output_conflict(&path, "remove entry", e))?;
    }
    fs::remove_dir(dir).map_err(|e| JobError::output_conflict(dir, "remove directory", e))?;
    debug!("removed stale output directory {}", dir.display());
    Ok(())
}

/// Writes one `<token>\t<total>` line per aggregate.
pub fn save_output(path: &Path, output: &[Aggregate]) -> Result<(), JobError> {
    let file = File::create(path).map_err(|e| JobError::write_failure(path, e))?;
    let mut writer = BufWriter::new(file);
    for Aggregate { token, total } in output {
        writeln!(writer, "{}\t{}", token, total).map_err(|e| JobError::write_failure(path, e))?;
    }
    writer.flush().map_err(|e| JobError::write_failure(path, e))?;
    Ok(())
}

pub fn create_marker(path: &Path) -> Result<(), JobError> {
    File::create(path).map_err(|e| JobError::write_failure(path, e))?;
    Ok(())
}
