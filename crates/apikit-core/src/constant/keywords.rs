//! Creation keywords used to pick HTTP 201 over 200 for success messages.

/// English and Turkish verbs that mark a success message as a creation.
pub const CREATION_KEYWORDS: &[&str] = &[
    // English
    "created",
    "saved",
    "added",
    "registered",
    // Turkish
    "oluşturuldu",
    "kaydedildi",
    "eklendi",
];

/// Returns `true` when the message contains any creation keyword,
/// case-insensitively.
pub fn contains_creation_keyword(message: &str) -> bool {
    let message = message.to_lowercase();
    CREATION_KEYWORDS
        .iter()
        .any(|keyword| message.contains(&keyword.to_lowercase()))
}
