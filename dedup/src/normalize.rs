/// Canonical form for email comparison: trimmed and case-folded.
pub(crate) fn normalized_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Canonical digit form for phone comparison.
///
/// Strips every non-digit character except a leading `+`, then drops a US
/// country code `1` from 11-digit forms, so "555-123-4567",
/// "+1-555-123-4567" and "1-555-123-4567" all normalize to "5551234567".
/// Malformed input with no digits normalizes to the empty string.
pub(crate) fn normalized_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut cleaned = String::with_capacity(trimmed.len());

    for (i, c) in trimmed.char_indices() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            cleaned.push(c);
        }
    }

    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if digits.is_empty() {
        return String::new();
    }
    if digits.len() == 11 && digits.starts_with('1') {
        return digits[1..].to_string();
    }

    cleaned
}
