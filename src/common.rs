use async_trait::async_trait;

/// One line of input: (source file, line text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub source: String,
    pub text: String,
}

impl Record {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// A single (token, count) pair emitted by the map phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEmission {
    pub token: String,
    pub count: u64,
}

impl TokenEmission {
    pub fn one(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            count: 1,
        }
    }
}

/// Final per-token total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub token: String,
    pub total: u64,
}

/// Reduce output, one entry per distinct token, ascending by token
pub type Output = Vec<Aggregate>;

pub trait MapReduceApp: Send + Sync {
    /// Rewrites a record before it is mapped. Identity unless the app needs cleanup.
    fn preprocess(&self, record: Record) -> Record {
        record
    }
    fn map(&self, record: &Record) -> Vec<TokenEmission>;
    fn reduce(&self, key: &str, counts: &[u64]) -> u64;
}

#[async_trait]
pub trait MapReduce {
    fn new(input: Vec<Record>, mr_app: Box<dyn MapReduceApp>) -> Self;
    async fn run(self) -> Output;
}
