use std::path::{Path, PathBuf};

use tracing::info;

use crate::common::{Aggregate, MapReduce, Output};
use crate::config::JobConfig;
use crate::error::JobError;
use crate::input::load_input;
use crate::map_reduce_apps::WordCount;
use crate::map_reduce_seq::SequentialMapReduce;
use crate::output::{create_marker, create_output_directory, save_output};

#[derive(Debug, Clone)]
pub struct JobSummary {
    pub files_read: usize,
    pub records: usize,
    pub tokens: u64,
    pub distinct_tokens: usize,
    pub result_path: PathBuf,
    pub marker_path: PathBuf,
    pub aggregates: Output,
}

/// Runs the whole word count. Nothing under the output directory is touched
/// until the in-memory pipeline has finished.
pub async fn run_job(config: &JobConfig) -> Result<JobSummary, JobError> {
    let (records, files_read) = load_input(&config.input_dir, &config.file_pattern)?;
    let record_count = records.len();

    let mr = SequentialMapReduce::new(records, Box::new(WordCount {}));
    let output = mr.run().await;

    let result_path = config.result_path();
    let marker_path = config.marker_path();
    create_output_directory(&config.output_dir)?;
    commit_output(&result_path, &marker_path, &output)?;

    let summary = JobSummary {
        files_read,
        records: record_count,
        tokens: output.iter().map(|a| a.total).sum(),
        distinct_tokens: output.len(),
        result_path,
        marker_path,
        aggregates: output,
    };
    info!(
        files = summary.files_read,
        records = summary.records,
        tokens = summary.tokens,
        distinct = summary.distinct_tokens,
        "word count written to {}",
        summary.result_path.display()
    );
    Ok(summary)
}

/// Writes the result file, then the marker. The marker is never written if the result failed.
fn commit_output(
    result_path: &Path,
    marker_path: &Path,
    output: &[Aggregate],
) -> Result<(), JobError> {
    save_output(result_path, output)?;
    create_marker(marker_path)
}
