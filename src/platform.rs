//! Platform-specific configuration

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear-field shortcut display
pub const CLEAR_FIELD_SHORTCUT: &str = "Ctrl+U";
