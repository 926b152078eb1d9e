//! Terminal rendering of the swatch and the three input fields.
//!
//! [`FieldView`] is the view-side text of each field. The converter tells it
//! what to overwrite; everything else stays as the user typed it.

use colorsync_codec::{hex_to_rgb, normalize_hex};
use colorsync_common::{ColorFormat, Rgb};
use colorsync_sync::{Converter, FeedbackFlags, FieldUpdate};

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldView {
    texts: [String; 3],
}

impl FieldView {
    pub fn new(initial: &[FieldUpdate]) -> Self {
        let mut view = Self::default();
        view.apply(initial);
        view
    }

    pub fn apply(&mut self, updates: &[FieldUpdate]) {
        for update in updates {
            self.set(update.field, update.text.clone());
        }
    }

    /// What the user typed goes straight into the field.
    pub fn set(&mut self, field: ColorFormat, text: String) {
        self.texts[index(field)] = text;
    }

    pub fn text(&self, field: ColorFormat) -> &str {
        &self.texts[index(field)]
    }
}

fn index(field: ColorFormat) -> usize {
    match field {
        ColorFormat::Hex => 0,
        ColorFormat::Rgb => 1,
        ColorFormat::Hsl => 2,
    }
}

fn rgb_of(hex: &str) -> Rgb {
    hex_to_rgb(&normalize_hex(hex)).unwrap_or(Rgb::new(0, 0, 0))
}

/// Swatch line: the color as a truecolor background, labelled in the
/// contrast color.
pub fn swatch(converter: &Converter) -> String {
    let bg = converter.rgb();
    let fg = rgb_of(converter.label_color());
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m   {}   {RESET}",
        bg.r,
        bg.g,
        bg.b,
        fg.r,
        fg.g,
        fg.b,
        converter.color()
    )
}

pub fn render(converter: &Converter, fields: &FieldView, feedback: FeedbackFlags) -> String {
    let mut out = String::new();
    out.push_str(&swatch(converter));
    out.push('\n');

    let marker = if converter.is_valid() { " " } else { "!" };
    for field in ColorFormat::ALL {
        let focus = if converter.active_field() == Some(field) {
            '>'
        } else {
            ' '
        };
        let copied = if feedback.get(field) { "  [copied]" } else { "" };
        out.push_str(&format!(
            "{marker}{focus} {field:<4}{}{copied}\n",
            fields.text(field)
        ));
    }
    out.push_str(&format!("   opacity {}", converter.opacity()));
    if !converter.is_valid() {
        out.push_str("\n!  invalid color input");
    }
    out
}
