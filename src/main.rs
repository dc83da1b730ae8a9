use clap::Parser;
use interactor_search::core::{ConfigProvider, NodeRole};
use interactor_search::utils::logger::{self, LogFormat};
use interactor_search::utils::validation::Validate;
use interactor_search::{
    CliArgs, HttpTransport, RecordingNavigator, SubmissionHandler, SubmissionOutcome, SubmitEvent,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    let log_format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, args.verbose);

    tracing::info!("Starting interactor-search CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 載入並驗證配置
    let config = match args.client_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let transport = match HttpTransport::new(config) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };
    let results_path = transport.config().results_path().to_string();

    let navigator = RecordingNavigator::new();
    let handler = SubmissionHandler::with_results_path(transport, navigator, results_path);

    let mut event = SubmitEvent::new(args.search_form());
    match handler.handle(&mut event).await {
        SubmissionOutcome::Navigated(location) => {
            let url = handler.transport().results_url()?;
            println!("✅ Search submitted, results at {} ({})", location, url);
        }
        SubmissionOutcome::Dropped => {
            eprintln!("❌ Search submission failed; no navigation happened (run with --verbose for details)");
            std::process::exit(2);
        }
    }

    if args.graph {
        match handler.transport().fetch_results_graph().await {
            Ok(graph) => {
                println!(
                    "📊 {} nodes, {} links",
                    graph.nodes.len(),
                    graph.links.len()
                );
                for (db, count) in graph.count_by_database() {
                    println!("   {}: {} nodes", db, count);
                }
                for (index, node) in graph.nodes.iter().enumerate() {
                    if node.label != NodeRole::InteractorA {
                        continue;
                    }
                    let partners = graph.partners_of(index);
                    println!("   {} [{}] -> {}", node.title, node.db, partners.join(", "));
                }
            }
            Err(e) => {
                tracing::error!(
                    "❌ Failed to fetch results graph: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.exit_code());
            }
        }
    }

    Ok(())
}
