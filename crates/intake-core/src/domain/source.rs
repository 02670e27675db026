/// Suggested inquiry sources. Other values are stored as given.
pub const SOURCE_OPTIONS: [&str; 7] = [
    "Website",
    "Social Media",
    "Referral",
    "Walk-in",
    "Phone Call",
    "Email",
    "Other",
];

pub fn canonical_source(raw: &str) -> String {
    let trimmed = raw.trim();
    SOURCE_OPTIONS
        .iter()
        .find(|option| option.eq_ignore_ascii_case(trimmed))
        .map(|option| option.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
