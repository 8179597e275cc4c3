use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum LoggerError {
    #[error("error in logging message {message_id}: {source}")]
    BatchParse {
        message_id: String,
        source: serde_json::Error,
    },
}
