pub mod config;
pub mod error;
pub mod types;

pub use config::{NarrationConfig, ServerConfig, StyleConfig};
pub use error::{NrError, Result};
pub use types::{HighlightStyle, Span, SpanStyle};
