use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WebserverSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum PushSettings {
    Fcm {
        #[serde(rename = "credentials")]
        credentials_path: String,
        #[serde(default = "default_request_timeout_secs")]
        request_timeout_secs: u64,
        /// Override of the FCM API base URL; defaults to the public endpoint.
        endpoint: Option<String>,
    },
    Dummy,
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub webserver: WebserverSettings,
    pub push: PushSettings,
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings"))
            .add_source(Environment::with_prefix("PUSHCAST").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
