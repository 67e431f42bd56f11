use std::path::PathBuf;

/// Input files picked up when no pattern is given.
pub const DEFAULT_FILE_PATTERN: &str = "*.txt";
/// Name of the single reduce output file.
pub const RESULT_FILE_NAME: &str = "part-00000";
/// Empty file written last to flag a finished job.
pub const MARKER_FILE_NAME: &str = "_SUCCESS";

/// Everything a job run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Glob matched against file names directly inside `input_dir`.
    pub file_pattern: String,
}

impl JobConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
        }
    }

    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    pub fn result_path(&self) -> PathBuf {
        self.output_dir.join(RESULT_FILE_NAME)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.output_dir.join(MARKER_FILE_NAME)
    }
}
