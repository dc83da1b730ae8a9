pub mod handler;
pub mod payload;

pub use crate::domain::graph::{GraphLink, GraphNode, NodeRole, ResultsGraph};
pub use crate::domain::model::{
    Checkbox, Database, SearchForm, SearchPayload, SubmissionOutcome, SubmitEvent,
};
pub use crate::domain::ports::{BodyEncoding, ConfigProvider, Navigator, SearchTransport};
pub use crate::utils::error::Result;
