//! ColorsyncApp struct definition and constructor.

use std::sync::Arc;

use colorsync_common::{ColorFormat, EventBus};
use colorsync_config::ColorsyncConfig;
use colorsync_platform::ClipboardAccess;
use colorsync_sync::{Converter, CopyFeedback, CopyService, PasteOutcome, PasteSlot};

use crate::view::{self, FieldView};

/// Top-level session state.
pub struct ColorsyncApp {
    pub(super) converter: Converter,
    pub(super) fields: FieldView,
    pub(super) copier: CopyService,
    pub(super) clipboard: Arc<dyn ClipboardAccess>,
    pub(super) paste_slot: PasteSlot,
    pub(super) event_bus: EventBus,

    // Whether the session should end
    pub(super) should_exit: bool,
}

impl ColorsyncApp {
    pub fn new(config: &ColorsyncConfig, clipboard: Arc<dyn ClipboardAccess>) -> Self {
        let event_bus = EventBus::default();
        let converter = Converter::from_config(config, event_bus.clone());
        let fields = FieldView::new(&converter.fields());
        let feedback = CopyFeedback::new(config.copy.feedback_delay(), event_bus.clone());

        Self {
            converter,
            fields,
            copier: CopyService::new(clipboard.clone(), feedback),
            clipboard,
            paste_slot: PasteSlot::new(),
            event_bus,
            should_exit: false,
        }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn fields(&self) -> &FieldView {
        &self.fields
    }

    pub fn paste_slot(&self) -> &PasteSlot {
        &self.paste_slot
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// The full view: swatch, fields, opacity and copy indicators.
    pub fn render(&self) -> String {
        view::render(&self.converter, &self.fields, self.copier.feedback().flags())
    }
}

/// One-shot conversion for `colorsync convert`.
///
/// Parses `text` the way a paste would and returns the HEX, RGB and HSL copy
/// strings, or a message saying why nothing was recognized.
pub fn convert_text(config: &ColorsyncConfig, text: &str) -> Result<[String; 3], String> {
    let mut converter = Converter::from_config(config, EventBus::new(1));
    match converter.paste(text) {
        PasteOutcome::Applied(_) => {
            Ok(ColorFormat::ALL.map(|format| converter.copy_text(format)))
        }
        PasteOutcome::OutOfRange(format) => {
            Err(format!("{format} value out of range in {text:?}"))
        }
        PasteOutcome::Ignored => Err(format!("no color found in {text:?}")),
    }
}
