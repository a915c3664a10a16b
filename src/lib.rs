pub mod check_ip_client;
pub mod config;
pub mod ec2_instance_client;
pub mod error;
pub mod gitter_client;
pub mod handler;
pub mod instance;
pub mod notifier;
#[cfg(test)]
mod test_server;

use tracing_subscriber::EnvFilter;

/// Plain fmt output without timestamps; CloudWatch stamps each line itself.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();
}
