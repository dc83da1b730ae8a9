use crate::core::{BodyEncoding, ConfigProvider, ResultsGraph, SearchPayload, SearchTransport};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::validate_base_url;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// 以 reqwest 實作的查詢傳輸層
///
/// 路徑以 `Url::join` 接在 base URL 後面，所以 base URL 只能是根路徑。
pub struct HttpTransport<C: ConfigProvider> {
    config: C,
    client: Client,
    base_url: Url,
}

impl<C: ConfigProvider> HttpTransport<C> {
    pub fn new(config: C) -> Result<Self> {
        let base_url = Url::parse(config.base_url())?;
        validate_base_url("server.base_url", &base_url)?;

        // 0 秒逾時會讓每次送出都立刻失敗
        if config.timeout_seconds() == 0 {
            return Err(SearchError::InvalidConfigValue {
                field: "request.timeout_seconds".to_string(),
                value: "0".to_string(),
                reason: "Timeout must be at least 1 second".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            config,
            client,
            base_url,
        })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// 結果頁的完整 URL
    pub fn results_url(&self) -> Result<Url> {
        self.endpoint(self.config.results_path())
    }

    /// 取得結果頁的節點/連結資料
    pub async fn fetch_results_graph(&self) -> Result<ResultsGraph> {
        let url = self.endpoint(self.config.graph_path())?;
        tracing::debug!("Fetching results graph from: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        let graph: ResultsGraph = serde_json::from_str(&body)?;
        graph.validate()?;

        tracing::debug!(
            "Results graph: {} nodes, {} links",
            graph.nodes.len(),
            graph.links.len()
        );
        Ok(graph)
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> SearchTransport for HttpTransport<C> {
    async fn submit(&self, payload: &SearchPayload) -> Result<()> {
        let url = self.endpoint(self.config.search_path())?;
        tracing::debug!("Making search request to: {}", url);

        let request = self.client.post(url);
        let request = match self.config.body_encoding() {
            BodyEncoding::Form => request.form(&payload.form_pairs()),
            BodyEncoding::Json => request.json(payload),
        };

        // 伺服器通常回 302 導向結果頁，reqwest 會自動跟隨
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Search response status: {} ({})", status, response.url());

        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(())
    }
}
