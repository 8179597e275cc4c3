use crate::config::Config;
use crate::http_handler::HandlerDeps;
use crate::order_queue::SqsQueueConnector;
use http_handler::function_handler;
use lambda_http::{run, service_fn, Error};

mod config;
mod errors;
mod http_handler;
mod order_queue;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();
    let config = Config::load()?;
    if config.queue_url().is_none() {
        tracing::warn!("QUEUE_URL is not set, every order request will be rejected");
    }
    let deps = HandlerDeps {
        config,
        connector: SqsQueueConnector::new(),
    };

    run(service_fn(|event| function_handler(&deps, event))).await
}
