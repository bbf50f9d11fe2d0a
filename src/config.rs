use crate::signaling::{DEFAULT_REALTIME_MODEL, OPENAI_REALTIME_URL};
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub openai: OpenAiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Bearer credential for the realtime API. Absence is not a startup
    /// error; the signaling endpoint reports it when invoked.
    pub api_key: Option<String>,
    pub realtime_url: String,
    pub default_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "standup-voice")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8000)?
            .set_default("openai.realtime_url", OPENAI_REALTIME_URL)?
            .set_default("openai.default_model", DEFAULT_REALTIME_MODEL)?
            .set_default("storage.data_dir", "data")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("STANDUP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        // Conventional variable, honored only when the config leaves the key unset
        if cfg.openai.api_key.is_none() {
            cfg.openai.api_key = std::env::var("OPENAI_API_KEY").ok();
        }

        Ok(cfg)
    }
}
