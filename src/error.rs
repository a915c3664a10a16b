use std::error::Error;

use reqwest::StatusCode;
use rusoto_core::RusotoError;
use rusoto_ec2::DescribeInstancesError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum NotifierError {
    Configuration(ConfigError),
    Connectivity(ConnectivityError),
    Provider(ProviderError),
    Delivery(DeliveryError),
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(Vec<&'static str>),
    InvalidRegion(String),
}

#[derive(Debug)]
pub enum ConnectivityError {
    Transport(reqwest::Error),
    Non200Response(StatusCode),
    NoIp,
}

#[derive(Debug)]
pub enum ProviderError {
    DescribeInstances(RusotoError<DescribeInstancesError>),
    MissingInstanceId,
}

#[derive(Debug)]
pub enum DeliveryError {
    Transport(reqwest::Error),
    Rejected { status: StatusCode, body: String },
}

impl Display for NotifierError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            NotifierError::Configuration(ref error) => write!(f, "configuration error: {}", error),
            NotifierError::Connectivity(ref error) => write!(f, "connectivity check failed: {}", error),
            NotifierError::Provider(ref error) => write!(f, "instance inventory failed: {}", error),
            NotifierError::Delivery(ref error) => write!(f, "chat delivery failed: {}", error),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ConfigError::Missing(ref keys) => {
                write!(f, "missing environment variables: {}", keys.join(", "))?;
                if keys.contains(&"GITTER_TOKEN") {
                    write!(f, " (for GITTER_TOKEN see: https://developer.gitter.im/apps)")?;
                }
                Ok(())
            }
            ConfigError::InvalidRegion(ref region) => {
                write!(f, "AWS_DEFAULT_REGION is not a valid region: {}", region)
            }
        }
    }
}

impl Display for ConnectivityError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ConnectivityError::Transport(ref error) => Display::fmt(error, f),
            ConnectivityError::Non200Response(status) => {
                write!(f, "Non 200 Response found: {}", status)
            }
            ConnectivityError::NoIp => write!(f, "No IP in HTTP response"),
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ProviderError::DescribeInstances(ref error) => {
                write!(f, "ec2 DescribeInstances failed: {}", error)
            }
            ProviderError::MissingInstanceId => write!(f, "instance without an instance id"),
        }
    }
}

impl Display for DeliveryError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            DeliveryError::Transport(ref error) => Display::fmt(error, f),
            DeliveryError::Rejected { status, ref body } => {
                write!(f, "gitter responded with {}: {}", status, body)
            }
        }
    }
}

impl Error for NotifierError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            NotifierError::Configuration(ref error) => Some(error),
            NotifierError::Connectivity(ref error) => Some(error),
            NotifierError::Provider(ref error) => Some(error),
            NotifierError::Delivery(ref error) => Some(error),
        }
    }
}

impl Error for ConfigError {}

impl Error for ConnectivityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ConnectivityError::Transport(ref error) => Some(error),
            _ => None,
        }
    }
}

impl Error for ProviderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ProviderError::DescribeInstances(ref error) => Some(error),
            _ => None,
        }
    }
}

impl Error for DeliveryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DeliveryError::Transport(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigError> for NotifierError {
    fn from(e: ConfigError) -> NotifierError {
        NotifierError::Configuration(e)
    }
}

impl From<ConnectivityError> for NotifierError {
    fn from(e: ConnectivityError) -> NotifierError {
        NotifierError::Connectivity(e)
    }
}

impl From<ProviderError> for NotifierError {
    fn from(e: ProviderError) -> NotifierError {
        NotifierError::Provider(e)
    }
}

impl From<DeliveryError> for NotifierError {
    fn from(e: DeliveryError) -> NotifierError {
        NotifierError::Delivery(e)
    }
}

impl From<RusotoError<DescribeInstancesError>> for ProviderError {
    fn from(e: RusotoError<DescribeInstancesError>) -> ProviderError {
        ProviderError::DescribeInstances(e)
    }
}
