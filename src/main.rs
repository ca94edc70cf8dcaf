use lambda_http::{lambda_runtime, service_fn, tracing, Error};
use toukon_lambda::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(function_handler)).await
}
