//! Terminal rendering of results

pub mod console;
pub mod formatter;

/// Turn ANSI colors on or off for everything printed afterwards
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
