//! Clipboard copies and the per-format "copied" indicator.
//!
//! A successful copy turns its format's flag on and schedules it off again
//! after the feedback window. Copying the same format again restarts the
//! window: each reset carries the generation it was scheduled for and does
//! nothing if a newer copy has happened since.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use colorsync_common::{ColorFormat, Event, EventBus};
use colorsync_platform::ClipboardAccess;
use tracing::{debug, warn};

/// Snapshot of the three copy indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackFlags {
    pub hex: bool,
    pub rgb: bool,
    pub hsl: bool,
}

impl FeedbackFlags {
    pub fn get(&self, format: ColorFormat) -> bool {
        match format {
            ColorFormat::Hex => self.hex,
            ColorFormat::Rgb => self.rgb,
            ColorFormat::Hsl => self.hsl,
        }
    }

    fn set(&mut self, format: ColorFormat, active: bool) {
        match format {
            ColorFormat::Hex => self.hex = active,
            ColorFormat::Rgb => self.rgb = active,
            ColorFormat::Hsl => self.hsl = active,
        }
    }
}

#[derive(Default)]
struct FeedbackState {
    flags: FeedbackFlags,
    generations: [u64; 3],
}

fn slot(format: ColorFormat) -> usize {
    match format {
        ColorFormat::Hex => 0,
        ColorFormat::Rgb => 1,
        ColorFormat::Hsl => 2,
    }
}

#[derive(Clone)]
pub struct CopyFeedback {
    state: Arc<Mutex<FeedbackState>>,
    window: Duration,
    events: EventBus,
}

impl CopyFeedback {
    pub fn new(window: Duration, events: EventBus) -> Self {
        Self {
            state: Arc::new(Mutex::new(FeedbackState::default())),
            window,
            events,
        }
    }

    pub fn flags(&self) -> FeedbackFlags {
        self.state.lock().map(|s| s.flags).unwrap_or_default()
    }

    pub fn is_active(&self, format: ColorFormat) -> bool {
        self.flags().get(format)
    }

    /// Turn `format`'s flag on and schedule it off after the window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mark(&self, format: ColorFormat) {
        let generation = {
            let Ok(mut state) = self.state.lock() else {
                return;
            };
            state.flags.set(format, true);
            state.generations[slot(format)] += 1;
            state.generations[slot(format)]
        };
        self.events.publish(Event::CopyFeedback {
            format,
            active: true,
        });

        let feedback = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(feedback.window).await;
            feedback.reset(format, generation);
        });
    }

    fn reset(&self, format: ColorFormat, generation: u64) {
        {
            let Ok(mut state) = self.state.lock() else {
                return;
            };
            if state.generations[slot(format)] != generation {
                debug!(%format, "feedback reset superseded by a newer copy");
                return;
            }
            state.flags.set(format, false);
        }
        self.events.publish(Event::CopyFeedback {
            format,
            active: false,
        });
    }
}

/// Writes copy strings to the clipboard and drives [`CopyFeedback`].
#[derive(Clone)]
pub struct CopyService {
    clipboard: Arc<dyn ClipboardAccess>,
    feedback: CopyFeedback,
}

impl CopyService {
    pub fn new(clipboard: Arc<dyn ClipboardAccess>, feedback: CopyFeedback) -> Self {
        Self {
            clipboard,
            feedback,
        }
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    /// Write `text` as the `format` representation.
    ///
    /// Returns whether the write succeeded. A failed write is logged and
    /// leaves the flag alone.
    pub async fn copy(&self, format: ColorFormat, text: String) -> bool {
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                self.feedback.mark(format);
                true
            }
            Err(e) => {
                warn!(%format, "clipboard write failed: {e}");
                false
            }
        }
    }
}
