use std::net::SocketAddr;

use serde::Deserialize;
use tally_core::error::{Result, TallyError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub identity: IdentitySection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.storage.validate()?;
        self.identity.validate()?;

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            storage: StorageSection::default(),
            identity: IdentitySection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(TallyError::BadConfig(
                "server.listen must be a valid socket address".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    #[serde(default = "default_counter_path")]
    pub counter_path: String,

    /// Serialize read-modify-write passes within this process. Off by
    /// default: the unguarded increment race is part of what the demo
    /// demonstrates.
    #[serde(default)]
    pub serialize_increments: bool,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            counter_path: default_counter_path(),
            serialize_increments: false,
        }
    }
}

impl StorageSection {
    pub fn validate(&self) -> Result<()> {
        if self.counter_path.is_empty() {
            return Err(TallyError::BadConfig(
                "storage.counter_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_counter_path() -> String {
    "/data/counter.txt".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentitySection {
    /// Environment variable naming this replica in responses.
    #[serde(default = "default_hostname_env")]
    pub hostname_env: String,
}

impl Default for IdentitySection {
    fn default() -> Self {
        Self {
            hostname_env: default_hostname_env(),
        }
    }
}

impl IdentitySection {
    pub fn validate(&self) -> Result<()> {
        if self.hostname_env.is_empty() {
            return Err(TallyError::BadConfig(
                "identity.hostname_env must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_hostname_env() -> String {
    "HOSTNAME".into()
}
