//! Action dispatch: routes parsed commands to the converter and clipboard.

use colorsync_sync::PasteOutcome;

use super::core::ColorsyncApp;
use crate::action::{Action, HELP};

impl ColorsyncApp {
    /// Run one [`Action`]. Returns the text to show, if any.
    ///
    /// A paste is handed to the paste slot; its result is shown once the
    /// subscriber picks it up.
    pub async fn dispatch(&mut self, action: Action) -> Option<String> {
        match action {
            Action::Edit(field, text) => {
                self.converter.focus(Some(field));
                self.fields.set(field, text.clone());
                let updates = self.converter.edit(field, &text);
                self.fields.apply(&updates);
                Some(self.render())
            }
            Action::Focus(field) => {
                self.converter.focus(field);
                Some(self.render())
            }
            Action::Opacity(opacity) => {
                self.converter.set_opacity(opacity);
                Some(self.render())
            }
            Action::Paste(text) => {
                let text = match text {
                    Some(text) => text,
                    None => self.read_clipboard().await,
                };
                if self.paste_slot.dispatch(&text) {
                    None
                } else {
                    Some("paste not handled: no paste handler registered".into())
                }
            }
            Action::Copy(format) => {
                let text = self.converter.copy_text(format);
                if self.copier.copy(format, text.clone()).await {
                    Some(format!("copied {text}"))
                } else {
                    Some("clipboard unavailable, nothing copied".into())
                }
            }
            Action::Show => Some(self.render()),
            Action::Help => Some(HELP.to_owned()),
            Action::Quit => {
                self.should_exit = true;
                None
            }
        }
    }

    /// Apply text delivered by the paste subscription.
    pub fn handle_paste(&mut self, text: &str) -> String {
        match self.converter.paste(text) {
            PasteOutcome::Applied(updates) => {
                self.fields.apply(&updates);
                self.render()
            }
            PasteOutcome::OutOfRange(format) => {
                format!("pasted {format} value is out of range, nothing changed")
            }
            PasteOutcome::Ignored => "no color found in pasted text".to_owned(),
        }
    }

    async fn read_clipboard(&self) -> String {
        match self.clipboard.read_text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("clipboard read failed, treating as empty paste: {e}");
                String::new()
            }
        }
    }
}
