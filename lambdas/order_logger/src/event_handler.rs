use crate::config::BatchFailureMode;
use crate::errors::LoggerError;
use crate::order_log::OrderLog;
use aws_lambda_events::{
    event::sqs::SqsEvent,
    sqs::{BatchItemFailure, SqsBatchResponse, SqsMessage},
};
use lambda_runtime::{Error, LambdaEvent};
use shared::core::{Order, CONVERSION_ERROR_STATUS};

pub(crate) struct HandlerDeps<L: OrderLog> {
    pub order_log: L,
    pub failure_mode: BatchFailureMode,
}

#[tracing::instrument("process orders", skip(deps, event), fields(
    messaging.operation.name = "process",
    messaging.destination = "aws_sqs",
    messaging.client.id = "order_logger",
    messaging.batch.message_count = event.payload.records.len(),
))]
pub(crate) async fn function_handler<L: OrderLog>(
    deps: &HandlerDeps<L>,
    event: LambdaEvent<SqsEvent>,
) -> Result<SqsBatchResponse, Error> {
    tracing::info!("Order logging lambda invoked");
    let mut sqs_batch_response = SqsBatchResponse::default();

    // Records are handled one at a time, in the order SQS delivered them.
    for message in event.payload.records {
        let message_id = message.message_id.clone().unwrap_or_default();
        if let Err(e) = process_message(&deps.order_log, &message) {
            tracing::error!(
                status = CONVERSION_ERROR_STATUS,
                "Failed to decode order in message {}: {}",
                message_id,
                e
            );
            match deps.failure_mode {
                BatchFailureMode::Abort => {
                    return Err(LoggerError::BatchParse {
                        message_id,
                        source: e,
                    }
                    .into());
                }
                BatchFailureMode::ReportItemFailures => {
                    let mut failure_item = BatchItemFailure::default();
                    failure_item.item_identifier = message_id;
                    sqs_batch_response.batch_item_failures.push(failure_item);
                }
            }
        }
    }

    deps.order_log.log_completed();
    Ok(sqs_batch_response)
}

fn process_message<L: OrderLog>(
    order_log: &L,
    message: &SqsMessage,
) -> Result<(), serde_json::Error> {
    let body = message.body.as_deref().unwrap_or_default();
    tracing::info!("Record Body: {}", body);

    let order = Order::from_json(body.as_bytes())?;
    order_log.log_order(&order);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{function_handler, HandlerDeps};
    use crate::config::BatchFailureMode;
    use crate::errors::LoggerError;
    use crate::order_log::MockOrderLog;
    use aws_lambda_events::{event::sqs::SqsEvent, sqs::SqsMessage};
    use lambda_runtime::{Context, LambdaEvent};
    use mockall::Sequence;
    use serde_json::json;
    use shared::core::Order;

    fn create_sqs_message(message_id: &str, body: Option<String>) -> SqsMessage {
        let mut message = SqsMessage::default();
        message.message_id = Some(message_id.to_string());
        message.body = body;
        message
    }

    fn create_lambda_event(messages: Vec<SqsMessage>) -> LambdaEvent<SqsEvent> {
        let mut sqs_event = SqsEvent::default();
        sqs_event.records = messages;
        LambdaEvent::new(sqs_event, Context::default())
    }

    fn order_body(name: &str) -> Option<String> {
        Some(
            json!({
                "Name": name,
                "Description": "Blue ink",
                "CreatedAt": "2024-01-01",
                "Status": "From OrderLoggingLambda"
            })
            .to_string(),
        )
    }

    fn expect_order(order_log: &mut MockOrderLog, seq: &mut Sequence, name: &'static str) {
        order_log
            .expect_log_order()
            .withf(move |order: &Order| order.name == name)
            .times(1)
            .in_sequence(seq)
            .return_const(());
    }

    #[tokio::test]
    async fn when_valid_message_should_log_order_and_completion() {
        let mut order_log = MockOrderLog::new();
        let mut seq = Sequence::new();
        order_log
            .expect_log_order()
            .withf(|order: &Order| {
                order.log_summary().contains("Order Name: Pen")
                    && order
                        .log_summary()
                        .contains("Order Status: From OrderLoggingLambda")
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        order_log
            .expect_log_completed()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let deps = HandlerDeps {
            order_log,
            failure_mode: BatchFailureMode::Abort,
        };
        let event = create_lambda_event(vec![create_sqs_message("msg-1", order_body("Pen"))]);

        let result = function_handler(&deps, event).await;

        assert!(result.is_ok());
        assert!(result.unwrap().batch_item_failures.is_empty());
    }

    #[tokio::test]
    async fn when_all_messages_parse_should_log_each_in_delivery_order() {
        let mut order_log = MockOrderLog::new();
        let mut seq = Sequence::new();
        expect_order(&mut order_log, &mut seq, "first");
        expect_order(&mut order_log, &mut seq, "second");
        expect_order(&mut order_log, &mut seq, "third");
        order_log
            .expect_log_completed()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let deps = HandlerDeps {
            order_log,
            failure_mode: BatchFailureMode::ReportItemFailures,
        };
        let event = create_lambda_event(vec![
            create_sqs_message("msg-1", order_body("first")),
            create_sqs_message("msg-2", order_body("second")),
            create_sqs_message("msg-3", order_body("third")),
        ]);

        let result = function_handler(&deps, event).await;

        assert!(result.unwrap().batch_item_failures.is_empty());
    }

    #[tokio::test]
    async fn when_message_has_no_status_should_still_log_it() {
        let mut order_log = MockOrderLog::new();
        order_log
            .expect_log_order()
            .withf(|order: &Order| order.status.is_none())
            .times(1)
            .return_const(());
        order_log.expect_log_completed().times(1).return_const(());
        let deps = HandlerDeps {
            order_log,
            failure_mode: BatchFailureMode::Abort,
        };
        let body = json!({"Name": "Pen", "Description": "Blue ink", "CreatedAt": "2024-01-01"})
            .to_string();
        let event = create_lambda_event(vec![create_sqs_message("msg-1", Some(body))]);

        let result = function_handler(&deps, event).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn when_abort_mode_and_message_is_invalid_should_stop_and_return_error() {
        let mut order_log = MockOrderLog::new();
        let mut seq = Sequence::new();
        expect_order(&mut order_log, &mut seq, "first");
        order_log.expect_log_completed().times(0);
        let deps = HandlerDeps {
            order_log,
            failure_mode: BatchFailureMode::Abort,
        };
        let event = create_lambda_event(vec![
            create_sqs_message("msg-1", order_body("first")),
            create_sqs_message("msg-2", Some("invalid json".to_string())),
            create_sqs_message("msg-3", order_body("third")),
        ]);

        let result = function_handler(&deps, event).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("msg-2"));
        match err.downcast_ref::<LoggerError>() {
            Some(LoggerError::BatchParse { message_id, .. }) => assert_eq!(message_id, "msg-2"),
            None => panic!("expected a batch parse error"),
        }
    }

    #[tokio::test]
    async fn when_report_mode_and_message_is_invalid_should_continue_and_report_failure() {
        let mut order_log = MockOrderLog::new();
        let mut seq = Sequence::new();
        expect_order(&mut order_log, &mut seq, "first");
        expect_order(&mut order_log, &mut seq, "third");
        order_log
            .expect_log_completed()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let deps = HandlerDeps {
            order_log,
            failure_mode: BatchFailureMode::ReportItemFailures,
        };
        let event = create_lambda_event(vec![
            create_sqs_message("msg-1", order_body("first")),
            create_sqs_message("msg-2", Some("invalid json".to_string())),
            create_sqs_message("msg-3", order_body("third")),
        ]);

        let result = function_handler(&deps, event).await;

        let response = result.unwrap();
        assert_eq!(response.batch_item_failures.len(), 1);
        assert_eq!(response.batch_item_failures[0].item_identifier, "msg-2");
    }

    #[tokio::test]
    async fn when_message_body_is_empty_should_treat_it_as_invalid() {
        let mut order_log = MockOrderLog::new();
        order_log.expect_log_order().times(0);
        order_log.expect_log_completed().times(1).return_const(());
        let deps = HandlerDeps {
            order_log,
            failure_mode: BatchFailureMode::ReportItemFailures,
        };
        let event = create_lambda_event(vec![create_sqs_message("msg-1", None)]);

        let result = function_handler(&deps, event).await;

        let response = result.unwrap();
        assert_eq!(response.batch_item_failures.len(), 1);
        assert_eq!(response.batch_item_failures[0].item_identifier, "msg-1");
    }

    #[tokio::test]
    async fn when_empty_batch_should_only_log_completion() {
        let mut order_log = MockOrderLog::new();
        order_log.expect_log_order().times(0);
        order_log.expect_log_completed().times(1).return_const(());
        let deps = HandlerDeps {
            order_log,
            failure_mode: BatchFailureMode::Abort,
        };

        let result = function_handler(&deps, create_lambda_event(vec![])).await;

        assert!(result.is_ok());
    }
}
