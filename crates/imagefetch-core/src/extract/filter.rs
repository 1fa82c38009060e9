//! Acceptance rules for raw tokens.

use crate::allow_list::AllowList;

/// Static-asset hosts of the search page itself; never image results.
pub const INFRASTRUCTURE_HOSTS: [&str; 2] = ["ssl.gstatic.com", "www.gstatic.com"];

/// Keep a token when it mentions an allowed extension and no infrastructure host.
/// Tokens are expected trimmed; any remaining whitespace or control character
/// means the quote did not enclose a single URL.
pub fn accepts(token: &str, allow: &AllowList) -> bool {
    !token.chars().any(|c| c.is_whitespace() || c.is_control())
        && allow.matches_text(token)
        && !INFRASTRUCTURE_HOSTS.iter().any(|h| token.contains(h))
}
