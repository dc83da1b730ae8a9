use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// 終端機用的精簡格式
    #[default]
    Compact,
    /// 一行一筆 JSON，給日誌收集器
    Json,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "interactor_search=debug,info"
    } else {
        "interactor_search=info"
    }
}

/// `RUST_LOG` 優先，沒有設定時才用預設等級
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => registry.with(fmt_layer.with_target(false).compact()).init(),
        LogFormat::Json => registry.with(fmt_layer.with_target(true).json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_crate_level_only() {
        assert_eq!(default_directive(false), "interactor_search=info");
        assert_eq!(default_directive(true), "interactor_search=debug,info");
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
