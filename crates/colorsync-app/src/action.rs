//! Line commands typed into the interactive session.

use std::str::FromStr;

use colorsync_common::ColorFormat;

pub const HELP: &str = "\
commands:
  hex <text>                 type into the HEX field
  rgb <text>                 type into the RGB field (r, g, b)
  hsl <text>                 type into the HSL field (h, s%, l%)
  focus <hex|rgb|hsl|none>   move input focus
  opacity <0..1>             move the opacity slider
  paste [text]               paste text, or the system clipboard
  copy <hex|rgb|hsl>         copy a representation
  show                       redraw
  help                       this list
  quit                       exit";

/// Every user-triggerable action in the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Edit(ColorFormat, String),
    Focus(Option<ColorFormat>),
    Opacity(f64),
    /// `None` reads the system clipboard.
    Paste(Option<String>),
    Copy(ColorFormat),
    Show,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "hex" | "rgb" | "hsl" => {
                let field = verb.parse()?;
                Ok(Action::Edit(field, rest.to_owned()))
            }
            "focus" => match rest.to_ascii_lowercase().as_str() {
                "" | "none" => Ok(Action::Focus(None)),
                other => Ok(Action::Focus(Some(other.parse()?))),
            },
            "opacity" => rest
                .parse::<f64>()
                .map(Action::Opacity)
                .map_err(|_| format!("opacity needs a number between 0 and 1, got {rest:?}")),
            "paste" if rest.is_empty() => Ok(Action::Paste(None)),
            "paste" => Ok(Action::Paste(Some(rest.to_owned()))),
            "copy" => Ok(Action::Copy(rest.parse()?)),
            "show" | "" => Ok(Action::Show),
            "help" | "?" => Ok(Action::Help),
            "quit" | "exit" | "q" => Ok(Action::Quit),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}
