use crate::config::ClientConfig;
use crate::core::{BodyEncoding, Database, SearchForm};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "interactor-search")]
#[command(about = "Submit an interactor search to the bio data merge server")]
pub struct CliArgs {
    /// Interactor name to search for (sent as-is)
    #[arg(long)]
    pub name: String,

    /// Database to check; repeat for several (BioGRID, IntAct, STRING)
    #[arg(long = "db")]
    pub databases: Vec<Database>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.base_url from the config
    #[arg(long)]
    pub base_url: Option<String>,

    /// Send the payload as JSON instead of form encoding
    #[arg(long)]
    pub json: bool,

    /// Fetch and summarise the results graph after navigating
    #[arg(long)]
    pub graph: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    /// 載入設定檔 (若有) 並套用命令列覆蓋
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if self.json {
            config.request.encoding = BodyEncoding::Json;
        }

        Ok(config)
    }

    pub fn search_form(&self) -> SearchForm {
        SearchForm::new(self.name.clone()).with_checked(&self.databases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_repeated_db_flags() {
        let args = CliArgs::try_parse_from([
            "interactor-search",
            "--name",
            "TP53",
            "--db",
            "STRING",
            "--db",
            "biogrid",
        ])
        .unwrap();

        let form = args.search_form();
        assert!(form.is_checked(Database::BioGRID));
        assert!(form.is_checked(Database::StringDb));
        assert!(!form.is_checked(Database::IntAct));
    }

    #[test]
    fn test_unknown_db_is_rejected() {
        let result =
            CliArgs::try_parse_from(["interactor-search", "--name", "TP53", "--db", "Reactome"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_apply_to_default_config() {
        let args = CliArgs::try_parse_from([
            "interactor-search",
            "--name",
            "TP53",
            "--base-url",
            "http://127.0.0.1:9000",
            "--json",
        ])
        .unwrap();

        let config = args.client_config().unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.body_encoding(), BodyEncoding::Json);
        assert_eq!(config.results_path(), "/interactor/search/results");
    }
}
