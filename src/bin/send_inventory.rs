//! Sends the current instance inventory to the chat room once, outside of
//! Lambda and without the egress check.

use anyhow::Context;
use instance_notifier::config::Config;
use instance_notifier::notifier::Notifier;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    instance_notifier::init_logging();

    let config = Config::from_env().context("failed to load configuration")?;
    let message = Notifier::from_config(&config)
        .send_inventory()
        .await
        .context("failed to send instance inventory")?;
    info!(text = %message.text, "inventory sent");
    Ok(())
}
