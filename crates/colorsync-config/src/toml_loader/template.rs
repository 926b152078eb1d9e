//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# colorsync configuration
# Only override what you want to change -- missing fields use defaults.

[startup]
# color = "#ffffff"      # #rgb or #rrggbb
# opacity = 1.0          # 0.0-1.0

[contrast]
# Swatch label text uses whichever of these reads better on the color.
# dark = "#1a1a1a"
# light = "#ffffff"

[copy]
# feedback_ms = 3000     # 100-60000

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
