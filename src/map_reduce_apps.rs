use crate::common::{MapReduceApp, Record, TokenEmission};
use crate::normalize::normalize_record;

pub struct WordCount {}

impl MapReduceApp for WordCount {
    fn preprocess(&self, record: Record) -> Record {
        normalize_record(record)
    }

    fn map(&self, record: &Record) -> Vec<TokenEmission> {
        record
            .text
            .split_whitespace()
            .map(TokenEmission::one)
            .collect()
    }

    fn reduce(&self, _key: &str, counts: &[u64]) -> u64 {
        counts.iter().sum()
    }
}
