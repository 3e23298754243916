/// Embedded templates for recipebook

/// Default config.toml written by `recipebook init`
pub const CONFIG_TEMPLATE: &str = r#"# recipebook configuration
# Generated: {timestamp}
#
# Environment variables override these values:
#   RECIPEBOOK_CALORIE_THRESHOLD, RECIPEBOOK_COLOR,
#   RECIPEBOOK_LOG_LEVEL, RECIPEBOOK_LOG_FILE

[recipes]
# Recipes with more total calories than this raise a warning
calorie_threshold = {calorie_threshold}

[display]
color = true

[logging]
# trace, debug, info, warn or error (RUST_LOG takes precedence)
level = "warn"
# Append logs to this file instead of stderr
file = ""
"#;
