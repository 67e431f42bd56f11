//! Single-machine word count in map / shuffle / reduce form.
//!
//! Text files are read line by line, normalized, mapped to `(token, 1)` pairs,
//! sorted by token and summed. The result lands in `part-00000` next to an
//! empty `_SUCCESS` marker.

pub mod common;
pub mod config;
pub mod error;
pub mod input;
pub mod job;
pub mod map_reduce_apps;
pub mod map_reduce_seq;
pub mod normalize;
pub mod output;

pub use common::{Aggregate, MapReduce, MapReduceApp, Output, Record, TokenEmission};
pub use config::JobConfig;
pub use error::JobError;
pub use job::{run_job, JobSummary};
