use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ec2::{DescribeInstancesRequest, Ec2, Ec2Client};
use tracing::{info, warn};

use crate::error::ProviderError;
use crate::instance::MachineInstance;

pub struct Ec2InstanceClient {
    client: Ec2Client,
}

#[async_trait]
pub trait Describe {
    async fn describe_all_instances(&self) -> Result<Vec<MachineInstance>, ProviderError>;
}

#[async_trait]
impl Describe for Ec2InstanceClient {
    async fn describe_all_instances(&self) -> Result<Vec<MachineInstance>, ProviderError> {
        // No filter and no MaxResults: everything the credentials can see, in one call.
        let result = self
            .client
            .describe_instances(DescribeInstancesRequest::default())
            .await?;

        if result.next_token.is_some() {
            warn!("DescribeInstances returned a next token; later pages are not listed");
        }

        let mut machine_instances = Vec::<MachineInstance>::new();
        for reservation in result.reservations.unwrap_or_default() {
            for instance in reservation.instances.unwrap_or_default() {
                machine_instances.push(MachineInstance {
                    instance_id: instance
                        .instance_id
                        .ok_or(ProviderError::MissingInstanceId)?,
                    public_ip: instance.public_ip_address,
                })
            }
        }
        info!(count = machine_instances.len(), "described instances");
        Ok(machine_instances)
    }
}

impl Ec2InstanceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(Ec2Client::new(region))
    }

    fn new_with_client(client: Ec2Client) -> Self {
        Ec2InstanceClient { client }
    }
}
