use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use crate::common::{Aggregate, MapReduce, MapReduceApp, Output, Record, TokenEmission};

pub struct SequentialMapReduce {
    input: Vec<Record>,
    mr_app: Box<dyn MapReduceApp>,
}

impl SequentialMapReduce {
    pub fn run_sync(self) -> Output {
        let records: Vec<Record> = self
            .input
            .into_iter()
            .map(|record| self.mr_app.preprocess(record))
            .collect();

        let intermediate_key_values = records
            .iter()
            .fold(Vec::new(), |mut acc, record| {
                acc.extend(self.mr_app.map(record));
                acc
            });
        debug!(
            records = records.len(),
            emissions = intermediate_key_values.len(),
            "map phase done"
        );

        let sorted = shuffle_and_sort(intermediate_key_values);
        let output = reduce_sorted(self.mr_app.as_ref(), sorted);
        debug!(keys = output.len(), "reduce phase done");

        output
    }
}

/// Stable sort by token, ordinal comparison. Duplicates are kept.
pub fn shuffle_and_sort(mut key_values: Vec<TokenEmission>) -> Vec<TokenEmission> {
    key_values.sort_by(|a, b| a.token.cmp(&b.token));
    key_values
}

/// Groups emissions by token and reduces each group. Input need not be pre-grouped;
/// output is ascending by token.
pub fn reduce_sorted(mr_app: &dyn MapReduceApp, key_values: Vec<TokenEmission>) -> Output {
    let grouped_key_values: BTreeMap<String, Vec<u64>> =
        key_values
            .into_iter()
            .fold(BTreeMap::new(), |mut acc, TokenEmission { token, count }| {
                acc.entry(token).or_default().push(count);
                acc
            });

    grouped_key_values
        .into_iter()
        .map(|(token, counts)| Aggregate {
            total: mr_app.reduce(&token, &counts),
            token,
        })
        .collect()
}

#[async_trait]
impl MapReduce for SequentialMapReduce {
    fn new(input: Vec<Record>, mr_app: Box<dyn MapReduceApp>) -> Self {
        Self { input, mr_app }
    }

    async fn run(self) -> Output {
        self.run_sync()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_reduce_apps::WordCount;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn agg(token: &str, total: u64) -> Aggregate {
        Aggregate {
            token: token.to_string(),
            total,
        }
    }

    #[test]
    fn shuffle_orders_by_token_and_keeps_duplicates() {
        let sorted = shuffle_and_sort(vec![
            TokenEmission::one("b"),
            TokenEmission::one("B"),
            TokenEmission::one("a"),
            TokenEmission::one("b"),
        ]);
        let tokens: Vec<_> = sorted.iter().map(|kv| kv.token.as_str()).collect();
        assert_eq!(tokens, vec!["B", "a", "b", "b"]);
    }

    #[test]
    fn shuffle_is_stable_for_equal_keys() {
        let sorted = shuffle_and_sort(vec![
            TokenEmission {
                token: "x".into(),
                count: 2,
            },
            TokenEmission::one("a"),
            TokenEmission {
                token: "x".into(),
                count: 7,
            },
        ]);
        let counts: Vec<_> = sorted.iter().map(|kv| kv.count).collect();
        assert_eq!(counts, vec![1, 2, 7]);
    }

    #[test]
    fn reduce_handles_ungrouped_input() {
        let wc = WordCount {};
        let output = reduce_sorted(
            &wc,
            vec![
                TokenEmission::one("b"),
                TokenEmission::one("a"),
                TokenEmission::one("b"),
            ],
        );
        assert_eq!(output, vec![agg("a", 1), agg("b", 2)]);
    }

    #[test]
    fn reduce_of_nothing_is_empty() {
        assert!(reduce_sorted(&WordCount {}, Vec::new()).is_empty());
    }

    #[test]
    fn run_sync_counts_words_across_records() {
        let input = vec![
            Record::new("a.txt", "Analytics is great."),
            Record::new("a.txt", "Analytics helps."),
            Record::new("a.txt", "..."),
            Record::new("a.txt", ""),
        ];
        let mr = SequentialMapReduce::new(input, Box::new(WordCount {}));
        assert_eq!(
            mr.run_sync(),
            vec![
                agg("analytics", 2),
                agg("great", 1),
                agg("helps", 1),
                agg("is", 1)
            ]
        );
    }

    #[tokio::test]
    async fn async_run_matches_sync_run() {
        let input = vec![Record::new("a.txt", "one two two")];
        let expected =
            SequentialMapReduce::new(input.clone(), Box::new(WordCount {})).run_sync();
        let output = SequentialMapReduce::new(input, Box::new(WordCount {}))
            .run()
            .await;
        assert_eq!(output, expected);
    }

    proptest! {
        #[test]
        fn totals_conserve_tokens_and_keys_are_unique(
            lines in prop::collection::vec("[a-cA-C ,.!]{0,24}", 0..16),
        ) {
            let input: Vec<Record> = lines.iter().map(|l| Record::new("p.txt", l.as_str())).collect();
            let expected_tokens: Vec<String> = lines
                .iter()
                .flat_map(|l| {
                    crate::normalize::normalize_text(l)
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect();

            let output = SequentialMapReduce::new(input, Box::new(WordCount {})).run_sync();

            let sum: u64 = output.iter().map(|a| a.total).sum();
            prop_assert_eq!(sum as usize, expected_tokens.len());

            let keys: HashSet<&str> = output.iter().map(|a| a.token.as_str()).collect();
            prop_assert_eq!(keys.len(), output.len());

            let distinct: HashSet<&str> = expected_tokens.iter().map(String::as_str).collect();
            prop_assert_eq!(keys, distinct);

            prop_assert!(output.windows(2).all(|w| w[0].token < w[1].token));
        }
    }
}
