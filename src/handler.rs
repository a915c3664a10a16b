use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::error::{ConfigError, NotifierError};
use crate::notifier::Notifier;

/// The request payload is ignored; only the invocation id is logged.
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn notify_handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    info!("invocation received");
    let ip = notify(Config::from_env()).await.map_err(|error| {
        error!(%error, "notification failed");
        error
    })?;
    Ok(hello_response(&ip))
}

async fn notify(config: Result<Config, ConfigError>) -> Result<String, NotifierError> {
    let config = config?;
    Notifier::from_config(&config).run().await
}

fn hello_response(ip: &str) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: 200,
        body: Some(Body::Text(format!("Hello, {}", ip))),
        ..Default::default()
    }
}
