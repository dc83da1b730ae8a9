use crate::core::Navigator;
use std::sync::{Arc, Mutex};

/// 記錄每一次導向的位置；clone 出來的 handle 共用同一份紀錄
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.history().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(location.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_history() {
        let navigator = RecordingNavigator::new();
        let handle = navigator.clone();
        assert!(navigator.current().is_none());

        handle.navigate("/interactor/search/results");
        handle.navigate("/");

        assert_eq!(navigator.history(), vec!["/interactor/search/results", "/"]);
        assert_eq!(navigator.current().as_deref(), Some("/"));
    }
}
