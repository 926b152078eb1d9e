pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ColorsyncError, ConfigError, PlatformError};
pub use events::{Event, EventBus};
pub use types::{ColorFormat, ColorState, HexColor, Hsl, Rgb, DEFAULT_OPACITY};

pub type Result<T> = std::result::Result<T, ColorsyncError>;
