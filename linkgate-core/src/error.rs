use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to read page feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page record on line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
}
