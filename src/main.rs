use instance_notifier::handler::notify_handler;
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    instance_notifier::init_logging();
    lambda_runtime::run(service_fn(notify_handler)).await
}
