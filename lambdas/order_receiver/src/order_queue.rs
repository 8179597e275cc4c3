use crate::errors::QueueError;
use aws_config::BehaviorVersion;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub(crate) trait OrderQueue {
    /// Sends one message body, returning the id the queue assigned to it.
    async fn send_message(&self, message_body: &str) -> Result<Option<String>, QueueError>;
}

#[cfg_attr(test, automock(type Queue = MockOrderQueue;))]
pub(crate) trait QueueConnector {
    type Queue: OrderQueue;

    async fn connect(&self, queue_url: &str) -> Result<Self::Queue, QueueError>;
}

pub(crate) struct SqsOrderQueue {
    pub sqs_client: aws_sdk_sqs::Client,
    pub queue_url: String,
}

impl SqsOrderQueue {
    pub fn new(sqs_client: aws_sdk_sqs::Client, queue_url: String) -> Self {
        Self {
            sqs_client,
            queue_url,
        }
    }
}

impl OrderQueue for SqsOrderQueue {
    async fn send_message(&self, message_body: &str) -> Result<Option<String>, QueueError> {
        let output = self
            .sqs_client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(message_body)
            .delay_seconds(0)
            .send()
            .await
            .map_err(|e| QueueError::Send(e.into_service_error().to_string()))?;

        Ok(output.message_id().map(str::to_string))
    }
}

/// Builds an SQS client from the default provider chain on every call.
#[derive(Debug, Default)]
pub(crate) struct SqsQueueConnector;

impl SqsQueueConnector {
    pub fn new() -> Self {
        Self
    }
}

impl QueueConnector for SqsQueueConnector {
    type Queue = SqsOrderQueue;

    async fn connect(&self, queue_url: &str) -> Result<Self::Queue, QueueError> {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        if aws_config.region().is_none() {
            return Err(QueueError::Connection(
                "no AWS region could be resolved".to_string(),
            ));
        }

        Ok(SqsOrderQueue::new(
            aws_sdk_sqs::Client::new(&aws_config),
            queue_url.to_string(),
        ))
    }
}
