use crate::config::DEFAULT_RESULTS_PATH;
use crate::core::payload::build_payload;
use crate::core::{Navigator, SearchTransport, SubmissionOutcome, SubmitEvent};

/// 查詢表單的送出處理器
///
/// 每次送出都重新讀取表單並送出一個請求；沒有進行中請求的檢查，
/// 同時送出多次就會有多個請求。
pub struct SubmissionHandler<T: SearchTransport, N: Navigator> {
    transport: T,
    navigator: N,
    results_path: String,
}

impl<T: SearchTransport, N: Navigator> SubmissionHandler<T, N> {
    pub fn new(transport: T, navigator: N) -> Self {
        Self::with_results_path(transport, navigator, DEFAULT_RESULTS_PATH)
    }

    pub fn with_results_path(transport: T, navigator: N, results_path: impl Into<String>) -> Self {
        Self {
            transport,
            navigator,
            results_path: results_path.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 處理一次送出事件
    ///
    /// 請求失敗時不會導向，也不會把錯誤往外丟，只記錄一筆 warn。
    pub async fn handle(&self, event: &mut SubmitEvent) -> SubmissionOutcome {
        event.prevent_default();

        let payload = build_payload(&event.form);
        tracing::debug!(
            "Submitting search for '{}' in {:?}",
            payload.interactor_name,
            payload.dbs_to_check
        );

        match self.transport.submit(&payload).await {
            Ok(()) => {
                tracing::info!("➡️ Navigating to {}", self.results_path);
                self.navigator.navigate(&self.results_path);
                SubmissionOutcome::Navigated(self.results_path.clone())
            }
            Err(e) => {
                // 送出失敗不導向，呼叫端看不到錯誤
                tracing::warn!(
                    "🔶 Search submission failed, staying on page: {} (Category: {:?})",
                    e,
                    e.category()
                );
                SubmissionOutcome::Dropped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::navigation::RecordingNavigator;
    use crate::core::{Database, SearchForm, SearchPayload};
    use crate::utils::error::{Result, SearchError};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockTransport {
        sent: Arc<Mutex<Vec<SearchPayload>>>,
        fail_with_status: Option<u16>,
    }

    #[async_trait::async_trait]
    impl SearchTransport for MockTransport {
        async fn submit(&self, payload: &SearchPayload) -> Result<()> {
            self.sent.lock().unwrap().push(payload.clone());
            match self.fail_with_status {
                Some(status) => Err(SearchError::UnexpectedStatus {
                    status,
                    url: "http://mock/interactor/search".to_string(),
                }),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_successful_submission_navigates_to_results() {
        let transport = MockTransport::default();
        let navigator = RecordingNavigator::new();
        let handler = SubmissionHandler::new(transport.clone(), navigator.clone());

        let form = SearchForm::new("TP53").with_checked(&[Database::BioGRID, Database::StringDb]);
        let mut event = SubmitEvent::new(form);
        let outcome = handler.handle(&mut event).await;

        assert!(event.default_prevented());
        assert_eq!(
            outcome,
            SubmissionOutcome::Navigated("/interactor/search/results".to_string())
        );
        assert_eq!(navigator.current().as_deref(), Some("/interactor/search/results"));

        let sent = transport.sent.lock().unwrap();
        assert_eq!(
            *sent,
            vec![SearchPayload {
                interactor_name: "TP53".to_string(),
                dbs_to_check: vec![Database::BioGRID, Database::StringDb],
            }]
        );
    }

    #[tokio::test]
    async fn test_failed_submission_does_not_navigate() {
        let transport = MockTransport {
            fail_with_status: Some(500),
            ..Default::default()
        };
        let navigator = RecordingNavigator::new();
        let handler = SubmissionHandler::new(transport, navigator.clone());

        let mut event = SubmitEvent::new(SearchForm::new("TP53"));
        let outcome = handler.handle(&mut event).await;

        assert!(event.default_prevented());
        assert_eq!(outcome, SubmissionOutcome::Dropped);
        assert!(navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_each_submission_sends_a_fresh_request() {
        let transport = MockTransport::default();
        let navigator = RecordingNavigator::new();
        let handler = SubmissionHandler::new(transport.clone(), navigator.clone());

        let mut form = SearchForm::new("TP53").with_checked(&[Database::IntAct]);
        handler.handle(&mut SubmitEvent::new(form.clone())).await;
        form.uncheck(Database::IntAct);
        form.interactor_name = "MDM2".to_string();
        handler.handle(&mut SubmitEvent::new(form)).await;

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].dbs_to_check, vec![Database::IntAct]);
        assert!(sent[1].dbs_to_check.is_empty());
        assert_eq!(sent[1].interactor_name, "MDM2");
        assert_eq!(navigator.history().len(), 2);
    }

    #[tokio::test]
    async fn test_custom_results_path() {
        let navigator = RecordingNavigator::new();
        let handler = SubmissionHandler::with_results_path(
            MockTransport::default(),
            navigator.clone(),
            "/search/done",
        );
        handler.handle(&mut SubmitEvent::new(SearchForm::new("x"))).await;
        assert_eq!(navigator.current().as_deref(), Some("/search/done"));
    }
}
