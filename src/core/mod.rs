pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, RenderConfig};
pub use error::{LayoutError, Result};
pub use types::{Color, Direction, RoundKind, Section};
