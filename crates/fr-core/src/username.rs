//! Username derivation for accepted registrations.

use rand::Rng;

/// Characters used for the random username suffix.
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the random suffix appended after the underscore.
const SUFFIX_LEN: usize = 6;

/// Derive a username from a freelancer's full name: lowercase, whitespace
/// stripped, then an underscore and a short random suffix.
///
/// Collisions against existing usernames are not checked here; the account
/// backend owns uniqueness.
pub fn derive_username(full_name: &str) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SUFFIX_CHARSET.len());
            SUFFIX_CHARSET[idx] as char
        })
        .collect();

    format!("{}_{}", username_base(full_name), suffix)
}

/// Lowercased full name with all whitespace removed.
pub fn username_base(full_name: &str) -> String {
    full_name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
