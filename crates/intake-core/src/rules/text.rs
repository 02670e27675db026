use crate::domain::UNKNOWN_INQUIRY_NAME;

/// Trims the value and drops it when nothing is left.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn inquiry_name_or_unknown(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => UNKNOWN_INQUIRY_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{inquiry_name_or_unknown, normalize_optional};

    #[test]
    fn normalize_optional_drops_blank_values() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(normalize_optional(None), None);
        assert_eq!(
            normalize_optional(Some(" Referral ".to_string())),
            Some("Referral".to_string())
        );
    }

    #[test]
    fn inquiry_name_falls_back_to_unknown() {
        assert_eq!(inquiry_name_or_unknown(None), "Unknown");
        assert_eq!(inquiry_name_or_unknown(Some(" ")), "Unknown");
        assert_eq!(inquiry_name_or_unknown(Some("A")), "A");
    }
}
