use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failures of the order queue adapters.
#[derive(Debug, Error)]
pub(crate) enum QueueError {
    #[error("cannot connect to queue: {0}")]
    Connection(String),
    #[error("cannot send message: {0}")]
    Send(String),
    #[error("cannot encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Everything that can stop an order from reaching the queue.
#[derive(Debug, Error)]
pub(crate) enum ReceiverError {
    #[error("QUEUE_URL environment variable is not set")]
    ConfigurationMissing,
    #[error("request body is not a valid order: {0}")]
    MalformedInput(#[source] serde_json::Error),
    #[error("order queue is unavailable: {0}")]
    BackendUnavailable(#[source] QueueError),
    #[error("order could not be delivered: {0}")]
    DeliveryFailed(#[source] QueueError),
}

impl ReceiverError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiverError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ReceiverError::ConfigurationMissing
            | ReceiverError::BackendUnavailable(_)
            | ReceiverError::DeliveryFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn response_body(&self) -> &'static str {
        match self {
            ReceiverError::ConfigurationMissing => {
                "Queue url is missing from environment variable."
            }
            ReceiverError::MalformedInput(_) => "Bad Request",
            ReceiverError::BackendUnavailable(_) => "Can't create AWS sessions.",
            ReceiverError::DeliveryFailed(_) => "Can't send message to SQS.",
        }
    }

    /// True when the request itself was at fault.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
