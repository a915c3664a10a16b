use std::fmt;
use std::fmt::{Display, Formatter};

const CODE_BLOCK: &str = "```";
const NO_IP: &str = "n/a";

#[derive(Debug, Clone, PartialEq)]
pub struct MachineInstance {
    pub instance_id: String,
    pub public_ip: Option<String>,
}

impl Display for MachineInstance {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "id: {}, ip: {}",
            self.instance_id,
            self.public_ip.as_deref().unwrap_or(NO_IP)
        )
    }
}

/// One line per instance, in the order the provider returned them.
pub fn render_inventory(instances: &[MachineInstance]) -> String {
    instances
        .iter()
        .map(|instance| format!("{}\n", instance))
        .collect()
}

/// Chat message carrying the rendered inventory inside a code block.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationMessage {
    pub text: String,
}

impl NotificationMessage {
    pub fn from_instances(instances: &[MachineInstance]) -> Self {
        NotificationMessage {
            text: format!(
                "{}\n{}\n{}",
                CODE_BLOCK,
                render_inventory(instances),
                CODE_BLOCK
            ),
        }
    }
}
