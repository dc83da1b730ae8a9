pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{http::HttpTransport, navigation::RecordingNavigator};
pub use config::ClientConfig;
pub use core::handler::SubmissionHandler;
pub use core::payload::build_payload;
pub use core::{
    Database, Navigator, ResultsGraph, SearchForm, SearchPayload, SearchTransport,
    SubmissionOutcome, SubmitEvent,
};
pub use utils::error::{Result, SearchError};
