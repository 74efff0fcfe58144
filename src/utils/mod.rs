pub mod http;
pub mod logger;

// Re-export commonly used items
pub use http::{build_client, get_json, post_json};
pub use logger::Logger;
