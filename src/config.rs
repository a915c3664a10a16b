use crate::error::ConfigError;
use rusoto_core::Region;
use std::str::FromStr;

pub const REGION_KEY: &str = "AWS_DEFAULT_REGION";
pub const GITTER_TOKEN_KEY: &str = "GITTER_TOKEN";
pub const GITTER_ROOM_KEY: &str = "GITTER_ROOM";
pub const CHECK_IP_URL_KEY: &str = "CHECK_IP_URL";

pub const DEFAULT_CHECK_IP_URL: &str = "https://checkip.amazonaws.com";

/// Everything one invocation needs, validated up front so that no network
/// call happens with a partial configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub region: Region,
    pub gitter_token: String,
    pub gitter_room: String,
    pub check_ip_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as missing. Every missing key is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let region = value(REGION_KEY);
        let gitter_token = value(GITTER_TOKEN_KEY);
        let gitter_room = value(GITTER_ROOM_KEY);

        let missing: Vec<&'static str> = [
            (REGION_KEY, region.is_none()),
            (GITTER_TOKEN_KEY, gitter_token.is_none()),
            (GITTER_ROOM_KEY, gitter_room.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(key, _)| *key)
        .collect();

        match (region, gitter_token, gitter_room) {
            (Some(region), Some(gitter_token), Some(gitter_room)) => Ok(Config {
                region: Region::from_str(&region)
                    .map_err(|_| ConfigError::InvalidRegion(region))?,
                gitter_token,
                gitter_room,
                check_ip_url: value(CHECK_IP_URL_KEY)
                    .unwrap_or_else(|| DEFAULT_CHECK_IP_URL.to_string()),
            }),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, DEFAULT_CHECK_IP_URL};
    use crate::error::ConfigError;
    use rusoto_core::Region;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("AWS_DEFAULT_REGION", "us-east-1"),
            ("GITTER_TOKEN", "token"),
            ("GITTER_ROOM", "room-id"),
        ]));
        assert_eq!(
            config.unwrap(),
            Config {
                region: Region::UsEast1,
                gitter_token: "token".to_string(),
                gitter_room: "room-id".to_string(),
                check_ip_url: DEFAULT_CHECK_IP_URL.to_string(),
            }
        );
    }

    #[test]
    fn test_check_ip_url_override() {
        let config = Config::from_lookup(lookup(&[
            ("AWS_DEFAULT_REGION", "ap-northeast-1"),
            ("GITTER_TOKEN", "token"),
            ("GITTER_ROOM", "room-id"),
            ("CHECK_IP_URL", "http://127.0.0.1:8080/ip"),
        ]))
        .unwrap();
        assert_eq!(config.region, Region::ApNortheast1);
        assert_eq!(config.check_ip_url, "http://127.0.0.1:8080/ip");
    }

    #[test]
    fn test_all_missing_keys_are_reported() {
        let result = Config::from_lookup(lookup(&[]));
        assert_eq!(
            result.err().unwrap(),
            ConfigError::Missing(vec!["AWS_DEFAULT_REGION", "GITTER_TOKEN", "GITTER_ROOM"])
        );
    }

    #[test]
    fn test_empty_value_is_missing() {
        let result = Config::from_lookup(lookup(&[
            ("AWS_DEFAULT_REGION", "us-east-1"),
            ("GITTER_TOKEN", ""),
            ("GITTER_ROOM", "room-id"),
        ]));
        assert_eq!(
            result.err().unwrap(),
            ConfigError::Missing(vec!["GITTER_TOKEN"])
        );
    }

    #[test]
    fn test_invalid_region() {
        let result = Config::from_lookup(lookup(&[
            ("AWS_DEFAULT_REGION", "moon-base-1"),
            ("GITTER_TOKEN", "token"),
            ("GITTER_ROOM", "room-id"),
        ]));
        assert_eq!(
            result.err().unwrap(),
            ConfigError::InvalidRegion("moon-base-1".to_string())
        );
    }
}
