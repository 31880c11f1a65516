use shared_types::{Contact, MatchCriterion};

use crate::normalize::{normalized_email, normalized_phone};
use crate::similarity::{is_prefix_pair, normalized_distance};

/// Tunable thresholds for the first-name similarity criterion.
///
/// Last names must always match exactly (case-insensitively); these knobs
/// only control how much first-name variation is tolerated.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Maximum normalized edit distance (Levenshtein distance divided by
    /// the length of the longer name) accepted as a match.
    pub max_name_distance: f64,
    /// Minimum length of a first name accepted as a prefix of the other
    /// ("Rob" for "Robert"), so single initials never match.
    pub min_prefix_len: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_name_distance: 0.25,
            min_prefix_len: 2,
        }
    }
}

/// Decide whether two contacts are duplicates, reporting the first
/// criterion that fired in email -> phone -> name priority order.
///
/// The order only matters for explainability: the relation itself is
/// symmetric, and the grouper treats any `Some` the same way.
pub fn match_criterion(a: &Contact, b: &Contact, config: &MatcherConfig) -> Option<MatchCriterion> {
    if emails_match(a, b) {
        return Some(MatchCriterion::Email);
    }
    if phones_match(a, b) {
        return Some(MatchCriterion::Phone);
    }
    if names_match(a, b, config) {
        return Some(MatchCriterion::Name);
    }
    None
}

/// Whether at least one criterion declares the pair duplicates.
pub fn is_duplicate(a: &Contact, b: &Contact, config: &MatcherConfig) -> bool {
    match_criterion(a, b, config).is_some()
}

fn emails_match(a: &Contact, b: &Contact) -> bool {
    match (a.email.as_deref(), b.email.as_deref()) {
        (Some(ea), Some(eb)) => {
            let ea = normalized_email(ea);
            // Two absent or empty emails are not evidence of anything;
            // without this check every email-less contact would group.
            !ea.is_empty() && ea == normalized_email(eb)
        }
        _ => false,
    }
}

fn phones_match(a: &Contact, b: &Contact) -> bool {
    match (a.phone.as_deref(), b.phone.as_deref()) {
        (Some(pa), Some(pb)) => {
            let pa = normalized_phone(pa);
            !pa.is_empty() && pa == normalized_phone(pb)
        }
        _ => false,
    }
}

fn names_match(a: &Contact, b: &Contact, config: &MatcherConfig) -> bool {
    let last_a = a.last_name.trim().to_lowercase();
    let last_b = b.last_name.trim().to_lowercase();
    if last_a.is_empty() || last_a != last_b {
        return false;
    }

    let first_a = a.first_name.trim().to_lowercase();
    let first_b = b.first_name.trim().to_lowercase();
    if first_a.is_empty() || first_b.is_empty() {
        return false;
    }

    first_a == first_b
        || normalized_distance(&first_a, &first_b) <= config.max_name_distance
        || is_prefix_pair(&first_a, &first_b, config.min_prefix_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> MatcherConfig {
        MatcherConfig::default()
    }

    #[test]
    fn test_email_match_case_insensitive() {
        let a = Contact::new("John", "Smith").with_email("john@test.com");
        let b = Contact::new("Jane", "Doe").with_email("JOHN@TEST.COM");
        assert_eq!(match_criterion(&a, &b, &cfg()), Some(MatchCriterion::Email));
    }

    #[test]
    fn test_email_match_trims_whitespace() {
        let a = Contact::new("John", "Smith").with_email(" john@test.com ");
        let b = Contact::new("Jane", "Doe").with_email("john@test.com");
        assert!(is_duplicate(&a, &b, &cfg()));
    }

    #[test]
    fn test_empty_emails_never_match() {
        let a = Contact::new("John", "Smith").with_email("");
        let b = Contact::new("Jane", "Doe").with_email("");
        let c = Contact::new("Bob", "Johnson");
        assert!(!is_duplicate(&a, &b, &cfg()));
        assert!(!is_duplicate(&a, &c, &cfg()));
    }

    #[test]
    fn test_phone_match_ignores_formatting() {
        let a = Contact::new("John", "Smith").with_phone("555-123-4567");
        let b = Contact::new("Jane", "Doe").with_phone("(555) 123-4567");
        assert_eq!(match_criterion(&a, &b, &cfg()), Some(MatchCriterion::Phone));
    }

    #[test]
    fn test_phone_match_assumes_us_country_code() {
        let a = Contact::new("John", "Smith").with_phone("555-123-4567");
        let b = Contact::new("Jane", "Doe").with_phone("+1-555-123-4567");
        let c = Contact::new("Bob", "Johnson").with_phone("1-555-123-4567");
        assert!(is_duplicate(&a, &b, &cfg()));
        assert!(is_duplicate(&a, &c, &cfg()));
        assert!(is_duplicate(&b, &c, &cfg()));
    }

    #[test]
    fn test_malformed_phones_never_match() {
        let a = Contact::new("John", "Smith").with_phone("n/a");
        let b = Contact::new("Jane", "Doe").with_phone("n/a");
        assert!(!is_duplicate(&a, &b, &cfg()));
    }

    #[test]
    fn test_name_match_case_insensitive() {
        let a = Contact::new("JOHN", "SMITH");
        let b = Contact::new("john", "smith");
        assert_eq!(match_criterion(&a, &b, &cfg()), Some(MatchCriterion::Name));
    }

    #[test]
    fn test_name_match_tolerates_typo() {
        // "Jon" vs "John" is one edit over four chars, right at the 0.25 cap.
        let a = Contact::new("John", "Smith");
        let b = Contact::new("Jon", "Smith");
        assert!(is_duplicate(&a, &b, &cfg()));
    }

    #[test]
    fn test_name_match_prefix_rule() {
        let a = Contact::new("Robert", "Johnson");
        let b = Contact::new("Rob", "Johnson");
        assert!(is_duplicate(&a, &b, &cfg()));

        // Single-initial prefixes are below min_prefix_len.
        let c = Contact::new("R", "Johnson");
        assert!(!is_duplicate(&a, &c, &cfg()));
    }

    #[test]
    fn test_name_match_requires_exact_last_name() {
        // Same first name only, or same last name only, is never enough.
        let a = Contact::new("Robert", "Johnson");
        let b = Contact::new("Robert", "Jones");
        let c = Contact::new("Mike", "Johnson");
        assert!(!is_duplicate(&a, &b, &cfg()));
        assert!(!is_duplicate(&a, &c, &cfg()));
    }

    #[test]
    fn test_no_criterion_no_match() {
        let a = Contact::new("John", "Smith")
            .with_email("john@test.com")
            .with_phone("555-1111");
        let b = Contact::new("Jane", "Doe")
            .with_email("jane@test.com")
            .with_phone("555-2222");
        assert_eq!(match_criterion(&a, &b, &cfg()), None);
    }

    #[test]
    fn test_criterion_priority_order() {
        // Pair matches on both email and name; email is reported.
        let a = Contact::new("John", "Smith").with_email("john@test.com");
        let b = Contact::new("John", "Smith").with_email("john@test.com");
        assert_eq!(match_criterion(&a, &b, &cfg()), Some(MatchCriterion::Email));
    }

    #[test]
    fn test_matcher_is_symmetric() {
        let contacts = [
            Contact::new("John", "Smith").with_email("john@test.com"),
            Contact::new("Jon", "Smith").with_phone("555-123-4567"),
            Contact::new("Jane", "Doe").with_email("JOHN@test.com"),
            Contact::new("Bob", "Johnson").with_phone("+1-555-123-4567"),
        ];
        for a in &contacts {
            for b in &contacts {
                assert_eq!(
                    is_duplicate(a, b, &cfg()),
                    is_duplicate(b, a, &cfg()),
                    "asymmetric decision for {} / {}",
                    a.full_name(),
                    b.full_name()
                );
            }
        }
    }

    #[test]
    fn test_tunable_thresholds() {
        let strict = MatcherConfig {
            max_name_distance: 0.0,
            min_prefix_len: 4,
        };
        let a = Contact::new("John", "Smith");
        let b = Contact::new("Jon", "Smith");
        assert!(!is_duplicate(&a, &b, &strict));
        assert!(is_duplicate(&a, &b, &MatcherConfig::default()));
    }
}
