//! Color state synchronization for colorsync.
//!
//! [`Converter`] owns the canonical color, opacity and validity flag and
//! decides which input fields may be overwritten after each event.
//! [`CopyService`] writes representations to the clipboard and drives the
//! per-format "copied" flags. [`PasteSlot`] holds the single paste handler.

pub mod converter;
pub mod error;
pub mod feedback;
pub mod paste;

pub use converter::{Converter, FieldUpdate, PasteOutcome};
pub use error::SyncError;
pub use feedback::{CopyFeedback, CopyService, FeedbackFlags};
pub use paste::{PasteSlot, PasteSubscription};
