const TELEGRAM_BASE: &str = "https://t.me/";

/// Deep link for a listing's contact handle. A single leading `@` is
/// dropped; anything else is passed through untouched.
pub fn contact_url(contact: &str) -> String {
    let handle = contact.strip_prefix('@').unwrap_or(contact);
    format!("{TELEGRAM_BASE}{handle}")
}
