use crate::domain::model::SearchPayload;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 把 payload 送到伺服器；只有狀態碼決定成功與否，回應內容不看
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn submit(&self, payload: &SearchPayload) -> Result<()>;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn search_path(&self) -> &str;
    fn results_path(&self) -> &str;
    fn graph_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn body_encoding(&self) -> BodyEncoding;
}

/// POST body 的編碼方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyEncoding {
    /// `application/x-www-form-urlencoded`，陣列鍵帶 `[]`
    #[default]
    Form,
    Json,
}
