//! User-facing messages

/// URL field does not parse as an absolute URL
pub const INVALID_URL: &str = "Please enter a valid URL";
/// Alias contains characters outside `[a-zA-Z0-9_-]`
pub const INVALID_ALIAS: &str = "Alias must only contain letters, numbers, hyphens and underscores";
/// Alias collides with a listed entry
pub const DUPLICATE_ALIAS: &str = "This alias already exists";

/// `GET /urls` failed
pub const LOAD_FAILED: &str = "Failed to load URLs";
/// 400 without a usable `message`
pub const REQUEST_REJECTED: &str = "There was an issue with your request";
/// Any other create failure
pub const SAVE_FAILED: &str = "Unable to save the URL";
/// Clipboard write succeeded
pub const URL_COPIED: &str = "URL copied";

/// Table body when the list is empty
pub const EMPTY_LIST: &str = "No urls have been shortened yet";
/// Alias field hint
pub const ALIAS_HINT: &str = "Leave blank for a random alias";
