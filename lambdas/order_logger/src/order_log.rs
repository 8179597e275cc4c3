use shared::core::Order;

#[cfg(test)]
use mockall::automock;

/// Sink for decoded orders.
#[cfg_attr(test, automock)]
pub(crate) trait OrderLog {
    fn log_order(&self, order: &Order);
    fn log_completed(&self);
}

#[derive(Debug, Default)]
pub(crate) struct TracingOrderLog;

impl OrderLog for TracingOrderLog {
    fn log_order(&self, order: &Order) {
        tracing::info!("Order received: {}", order.log_summary());
    }

    fn log_completed(&self) {
        tracing::info!("Task completed!");
    }
}
