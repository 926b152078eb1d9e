//! The synchronization state machine.
//!
//! The converter is the only owner of the canonical color. HEX, RGB and HSL
//! text is recomputed from it on every read, so the derived fields cannot
//! drift. Every mutation is published on the [`EventBus`].

mod fields;

#[cfg(test)]
mod tests;

use colorsync_codec::format::{
    hex_to_string, hsl_to_input_string, hsl_to_string, rgb_to_input_string, rgb_to_string,
};
use colorsync_codec::{
    best_contrast_color, hex_to_rgb, normalize_hex, parse_as, parse_paste, rgb_to_hsl,
    ParseMode, ParseOutcome, ParsedColor,
};
use colorsync_common::{ColorFormat, ColorState, Event, EventBus, HexColor, Hsl, Rgb};
use colorsync_config::ColorsyncConfig;
use tracing::{debug, warn};

use fields::Overwrite;
pub use fields::FieldUpdate;

/// What a paste did to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// A color was recognized; every field gets new text.
    Applied(Vec<FieldUpdate>),
    /// The text looked like this format but a value was out of range.
    /// Nothing changed.
    OutOfRange(ColorFormat),
    /// No notation matched. Nothing changed.
    Ignored,
}

pub struct Converter {
    state: ColorState,
    active_field: Option<ColorFormat>,
    dark: String,
    light: String,
    events: EventBus,
}

impl Converter {
    /// A converter at the built-in defaults: white, fully opaque, valid.
    pub fn new(events: EventBus) -> Self {
        Self::from_config(&ColorsyncConfig::default(), events)
    }

    pub fn from_config(config: &ColorsyncConfig, events: EventBus) -> Self {
        let start = config.startup.color.trim().to_ascii_lowercase();
        let color = HexColor::new(&normalize_hex(&start)).unwrap_or_else(|| {
            warn!("invalid startup color {start:?}, using white");
            HexColor::white()
        });

        Self {
            state: ColorState {
                color,
                opacity: config.startup.opacity.clamp(0.0, 1.0),
                valid: true,
            },
            active_field: None,
            dark: config.contrast.dark.clone(),
            light: config.contrast.light.clone(),
            events,
        }
    }

    /// Snapshot of the canonical state.
    pub fn state(&self) -> ColorState {
        self.state.clone()
    }

    pub fn color(&self) -> &HexColor {
        &self.state.color
    }

    pub fn opacity(&self) -> f64 {
        self.state.opacity
    }

    pub fn is_valid(&self) -> bool {
        self.state.valid
    }

    pub fn active_field(&self) -> Option<ColorFormat> {
        self.active_field
    }

    /// Record which field the view reports as focused.
    pub fn focus(&mut self, field: Option<ColorFormat>) {
        self.active_field = field;
    }

    /// The user typed `text` into `field`.
    ///
    /// On success returns updates for the fields that are neither `field`
    /// nor focused. On failure marks the state invalid, keeps the previous
    /// color and returns no updates.
    pub fn edit(&mut self, field: ColorFormat, text: &str) -> Vec<FieldUpdate> {
        match parse_as(field, text, ParseMode::Typed) {
            ParseOutcome::Parsed(parsed) => {
                debug!(%field, color = %parsed.color, "field edit accepted");
                self.apply(parsed);
                self.updates(Overwrite::Others {
                    edited: field,
                    focused: self.active_field,
                })
            }
            ParseOutcome::OutOfRange | ParseOutcome::NoMatch => {
                debug!(%field, text, "field edit rejected");
                self.state.valid = false;
                self.events.publish(Event::InputRejected(field));
                Vec::new()
            }
        }
    }

    /// The opacity control moved. Validity is not touched.
    ///
    /// The control steps by 0.01, so the value is snapped to two decimals.
    pub fn set_opacity(&mut self, opacity: f64) {
        let opacity = if opacity.is_nan() {
            self.state.opacity
        } else {
            (opacity.clamp(0.0, 1.0) * 100.0).round() / 100.0
        };
        self.state.opacity = opacity;
        self.events.publish(Event::OpacityChanged(opacity));
    }

    /// Text was pasted somewhere on the page.
    ///
    /// Tries hex, rgb and hsl in that order. A recognized color replaces the
    /// state and overwrites every field, including the focused one.
    pub fn paste(&mut self, text: &str) -> PasteOutcome {
        let Some(found) = parse_paste(text) else {
            return PasteOutcome::Ignored;
        };
        match found.outcome {
            ParseOutcome::Parsed(parsed) => {
                debug!(format = %found.format, color = %parsed.color, "paste applied");
                self.apply(parsed);
                PasteOutcome::Applied(self.updates(Overwrite::All))
            }
            ParseOutcome::OutOfRange => PasteOutcome::OutOfRange(found.format),
            ParseOutcome::NoMatch => PasteOutcome::Ignored,
        }
    }

    pub fn rgb(&self) -> Rgb {
        // HexColor always holds six hex digits.
        hex_to_rgb(self.state.color.as_str()).unwrap_or(Rgb::new(255, 255, 255))
    }

    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb())
    }

    /// Editable text for a field, without function syntax or opacity.
    pub fn field_text(&self, field: ColorFormat) -> String {
        match field {
            ColorFormat::Hex => self.state.color.to_string(),
            ColorFormat::Rgb => rgb_to_input_string(self.rgb()),
            ColorFormat::Hsl => hsl_to_input_string(self.hsl()),
        }
    }

    /// Clipboard text for a representation, including opacity.
    pub fn copy_text(&self, format: ColorFormat) -> String {
        let opacity = self.state.opacity;
        match format {
            ColorFormat::Hex => hex_to_string(&self.state.color, opacity),
            ColorFormat::Rgb => rgb_to_string(self.rgb(), opacity),
            ColorFormat::Hsl => hsl_to_string(self.hsl(), opacity),
        }
    }

    /// Swatch label color: whichever configured candidate reads better.
    pub fn label_color(&self) -> &str {
        best_contrast_color(&self.dark, &self.light, self.state.color.as_str())
    }

    /// Current text for every field, for an initial render.
    pub fn fields(&self) -> Vec<FieldUpdate> {
        self.updates(Overwrite::All)
    }

    fn apply(&mut self, parsed: ParsedColor) {
        self.state.color = parsed.color;
        self.state.opacity = parsed.opacity;
        self.state.valid = true;
        self.events.publish(Event::ColorChanged(self.state.clone()));
    }

    fn updates(&self, plan: Overwrite) -> Vec<FieldUpdate> {
        ColorFormat::ALL
            .into_iter()
            .filter(|field| plan.allows(*field))
            .map(|field| FieldUpdate {
                field,
                text: self.field_text(field),
            })
            .collect()
    }
}
