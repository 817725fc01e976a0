pub mod extraction;
pub mod providers;
pub mod search_client;

pub use extraction::{ExtractionError, ExtractionService};
pub use search_client::SearchClient;
