//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# AceJump Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[placeholder]
# alphabet = "abcdefghijklmnopqrstuvwxyz"   # at least 2 distinct characters
# upper_case = false

[finder]
# pattern = "[ ,-.{_(\"'<\\[\t]"   # one token boundary character
# only_initial_letter = true
# skip_selection = false
# include_end_char_in_selection = true
# jump_to_line_endings = false

[dim]
# enabled = true

[scroll]
# mode = "center"        # center, top, none

[jumper]
# max_restrict_rounds = 8  # 1-64, unset = unbounded
# retry_debounce_ms = 500  # 0-5000
# status_timeout_ms = 2000 # 0-60000
# prompt_timeout_ms = 5000 # 0-60000

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
