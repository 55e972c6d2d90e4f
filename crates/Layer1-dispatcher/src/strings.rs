//! Shared string constants
//!
//! Names used across the crate for registry keys and configuration files.

// ============================================================================
// Registry Keys
// ============================================================================

/// Key used by the registry when no key is given
pub const DEFAULT_DISPATCHER_KEY: &str = "event_dispatcher";

// ============================================================================
// Configuration Files
// ============================================================================

/// Default dispatcher configuration file name
pub const DISPATCHER_CONFIG_FILE: &str = "dispatcher.toml";

// ============================================================================
// Event Name Parsing
// ============================================================================

/// Split a whitespace-separated list of event names
///
/// Empty tokens (repeated or trailing whitespace) are skipped.
///
/// # Example
/// ```
/// use event_dispatcher::strings::event_names;
///
/// let names: Vec<&str> = event_names("  user.created  user.updated ").collect();
/// assert_eq!(names, vec!["user.created", "user.updated"]);
/// ```
pub fn event_names(names: &str) -> impl Iterator<Item = &str> {
    names.split_whitespace()
}
