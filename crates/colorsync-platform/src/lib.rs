pub mod clipboard;

pub use clipboard::{Clipboard, ClipboardAccess, MemoryClipboard, SystemClipboard};
