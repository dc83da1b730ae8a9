#[cfg(feature = "cli")]
pub mod cli;

use crate::core::{BodyEncoding, ConfigProvider};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{
    validate_base_url, validate_range, validate_route_path, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SEARCH_PATH: &str = "/interactor/search";
pub const DEFAULT_RESULTS_PATH: &str = "/interactor/search/results";
pub const DEFAULT_GRAPH_PATH: &str = "/interactor/search/results/graph";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub search_path: String,
    pub results_path: String,
    pub graph_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            results_path: DEFAULT_RESULTS_PATH.to_string(),
            graph_path: DEFAULT_GRAPH_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub timeout_seconds: u64,
    pub encoding: BodyEncoding,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            encoding: BodyEncoding::default(),
        }
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SearchError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEARCH_SERVER})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SearchError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.server.base_url
    }

    fn search_path(&self) -> &str {
        &self.server.search_path
    }

    fn results_path(&self) -> &str {
        &self.server.results_path
    }

    fn graph_path(&self) -> &str {
        &self.server.graph_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.request.timeout_seconds
    }

    fn body_encoding(&self) -> BodyEncoding {
        self.request.encoding
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server.base_url", &self.server.base_url)?;
        validate_base_url("server.base_url", &url::Url::parse(&self.server.base_url)?)?;
        validate_route_path("server.search_path", &self.server.search_path)?;
        validate_route_path("server.results_path", &self.server.results_path)?;
        validate_route_path("server.graph_path", &self.server.graph_path)?;
        validate_range("request.timeout_seconds", self.request.timeout_seconds, 1, 600)?;
        Ok(())
    }
}
