//! Interactive session state.
//!
//! Owns the converter, the field buffers and the clipboard services, and
//! drives them from stdin lines, pastes and bus events.

mod core;
mod dispatch;
mod run;


pub use core::{convert_text, ColorsyncApp};
