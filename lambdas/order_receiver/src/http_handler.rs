use crate::config::Config;
use crate::errors::ReceiverError;
use crate::order_queue::{OrderQueue, QueueConnector};
use crate::utils::{generate_api_response, plain_response};
use lambda_http::{http::StatusCode, Error, IntoResponse, Request};
use shared::core::Order;

pub(crate) const ORDER_RECEIVED: &str = "Order Received Successfully!";

pub(crate) struct HandlerDeps<C: QueueConnector> {
    pub config: Config,
    pub connector: C,
}

pub(crate) async fn function_handler<C: QueueConnector>(
    deps: &HandlerDeps<C>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Order receiving lambda invoked");

    match receive_order(deps, event.body()).await {
        Ok(()) => generate_api_response(&StatusCode::OK, ORDER_RECEIVED),
        Err(e) if e.is_client_error() => {
            tracing::warn!("Rejecting order request: {}", e);
            plain_response(&e.status_code(), e.response_body())
        }
        Err(e) => {
            tracing::error!("Failed to receive order: {:?}", e);
            generate_api_response(&e.status_code(), e.response_body())
        }
    }
}

#[tracing::instrument("publish order", skip(deps, body), fields(
    messaging.message.id = tracing::field::Empty,
    messaging.operation.name = "publish",
    messaging.destination = "aws_sqs",
    messaging.client.id = "order_receiver",
))]
async fn receive_order<C: QueueConnector>(
    deps: &HandlerDeps<C>,
    body: &[u8],
) -> Result<(), ReceiverError> {
    let queue_url = deps
        .config
        .queue_url()
        .ok_or(ReceiverError::ConfigurationMissing)?;

    tracing::info!("Body: {}", String::from_utf8_lossy(body));
    let mut order = Order::from_json(body).map_err(ReceiverError::MalformedInput)?;

    let queue = deps
        .connector
        .connect(queue_url)
        .await
        .map_err(ReceiverError::BackendUnavailable)?;

    order.mark_received();
    let message_body = order
        .to_message_body()
        .map_err(|e| ReceiverError::DeliveryFailed(e.into()))?;

    tracing::info!("Sending message to SQS: {}", message_body);
    let message_id = queue
        .send_message(&message_body)
        .await
        .map_err(ReceiverError::DeliveryFailed)?;

    if let Some(message_id) = &message_id {
        tracing::Span::current().record("messaging.message.id", message_id.as_str());
    }
    Ok(())
}
