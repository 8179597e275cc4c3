use crate::config::Config;
use crate::event_handler::HandlerDeps;
use crate::order_log::TracingOrderLog;
use event_handler::function_handler;
use lambda_runtime::{run, service_fn, Error};

mod config;
mod errors;
mod event_handler;
mod order_log;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();
    let config = Config::load()?;
    tracing::info!("Batch failure mode: {:?}", config.batch_failure_mode);
    if let Some(warning) = config.batch_failure_mode.startup_warning() {
        tracing::warn!("{}", warning);
    }

    let handler_deps = HandlerDeps {
        order_log: TracingOrderLog,
        failure_mode: config.batch_failure_mode,
    };

    run(service_fn(|event| function_handler(&handler_deps, event))).await
}
