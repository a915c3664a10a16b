use crate::check_ip_client::{CheckIp, CheckIpClient};
use crate::config::Config;
use crate::ec2_instance_client::{Describe, Ec2InstanceClient};
use crate::error::NotifierError;
use crate::gitter_client::{Deliver, GitterClient};
use crate::instance::NotificationMessage;

/// Egress check, instance inventory and chat delivery, run strictly in
/// sequence. Any failing stage aborts the rest.
pub struct Notifier<E, D, C> {
    egress: E,
    inventory: D,
    chat: C,
}

impl Notifier<CheckIpClient, Ec2InstanceClient, GitterClient> {
    /// Builds fresh clients for one invocation.
    pub fn from_config(config: &Config) -> Self {
        Notifier::new(
            CheckIpClient::new(config.check_ip_url.as_str()),
            Ec2InstanceClient::new(config.region.clone()),
            GitterClient::new(config.gitter_token.as_str(), config.gitter_room.as_str()),
        )
    }
}

impl<E, D, C> Notifier<E, D, C>
where
    E: CheckIp + Sync,
    D: Describe + Sync,
    C: Deliver + Sync,
{
    pub fn new(egress: E, inventory: D, chat: C) -> Self {
        Notifier {
            egress,
            inventory,
            chat,
        }
    }

    /// Returns the raw body of the IP echo endpoint.
    pub async fn run(&self) -> Result<String, NotifierError> {
        let ip = self.egress.check_ip().await?;
        self.send_inventory().await?;
        Ok(ip)
    }

    pub async fn send_inventory(&self) -> Result<NotificationMessage, NotifierError> {
        let instances = self.inventory.describe_all_instances().await?;
        let message = NotificationMessage::from_instances(&instances);
        self.chat.send_message(&message).await?;
        Ok(message)
    }
}
