use std::env;

use thiserror::Error;
use twelf::config;

pub const ENV_APIKEY: &str = "ELASTICSEARCH_APIKEY";
pub const ENV_HOST: &str = "ELASTICSEARCH_HOST";

fn default_input_file() -> String {
    "access-log.json".to_string()
}

fn default_index() -> String {
    "bulk-data-test".to_string()
}

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("{0} must be set")]
    MissingEnv(&'static str),
    #[error("failed to load config file: {0}")]
    ConfigFile(#[from] twelf::Error),
}

#[config]
#[derive(Debug)]
pub struct Config {
    #[serde(default = "default_input_file")]
    input_file: String,
    #[serde(default = "default_index")]
    index: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            index: default_index(),
        }
    }
}

impl Config {
    pub fn get_input_file(&self) -> &String {
        &self.input_file
    }
    pub fn get_index(&self) -> &String {
        &self.index
    }
    pub fn set_input_file(&mut self, input_file: String) {
        self.input_file = input_file;
    }
    pub fn set_index(&mut self, index: String) {
        self.index = index;
    }
}

/// Endpoint credentials, taken from the environment only. The API key
/// never lands in a config file on disk.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: String,
    host: String,
}

fn require_env(name: &'static str) -> Result<String, ConfError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfError::MissingEnv(name))
}

impl Credentials {
    pub fn from_env() -> Result<Self, ConfError> {
        let api_key = require_env(ENV_APIKEY)?;
        let host = require_env(ENV_HOST)?;
        Ok(Self { api_key, host })
    }

    pub fn get_api_key(&self) -> &String {
        &self.api_key
    }
    pub fn get_host(&self) -> &String {
        &self.host
    }
    pub fn get_base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}
