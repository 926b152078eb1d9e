use colorsync_common::ColorFormat;

/// New text for one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: ColorFormat,
    pub text: String,
}

/// Which fields to rewrite after a state change.
#[derive(Debug, Clone, Copy)]
pub(super) enum Overwrite {
    /// Every field, focused or not.
    All,
    /// Every field except the one that was edited and the focused one.
    Others {
        edited: ColorFormat,
        focused: Option<ColorFormat>,
    },
}

impl Overwrite {
    pub(super) fn allows(&self, field: ColorFormat) -> bool {
        match *self {
            Overwrite::All => true,
            Overwrite::Others { edited, focused } => field != edited && Some(field) != focused,
        }
    }
}
