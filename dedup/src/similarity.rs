/// Levenshtein distance between two strings, counted in chars.
/// Callers are expected to have case-folded the inputs already.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row dynamic programming table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Edit distance normalized by the length of the longer string,
/// so short names don't tolerate proportionally large typos.
pub(crate) fn normalized_distance(a: &str, b: &str) -> f64 {
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / longer as f64
}

/// Whether one string is a prefix of the other with the shorter side at
/// least `min_len` chars, covering nickname abbreviations ("Rob"/"Robert").
pub(crate) fn is_prefix_pair(a: &str, b: &str, min_len: usize) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    shorter.chars().count() >= min_len && longer.starts_with(shorter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("john", "jon"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_normalized_distance() {
        // "jon" vs "john": one edit over four chars.
        assert!((normalized_distance("jon", "john") - 0.25).abs() < f64::EPSILON);
        assert_eq!(normalized_distance("", ""), 0.0);
        assert_eq!(normalized_distance("abcd", "abcd"), 0.0);
        assert_eq!(normalized_distance("ab", "cd"), 1.0);
    }

    #[test]
    fn test_prefix_pair() {
        assert!(is_prefix_pair("rob", "robert", 2));
        assert!(is_prefix_pair("robert", "rob", 2));
        assert!(!is_prefix_pair("r", "robert", 2));
        assert!(!is_prefix_pair("rob", "roger", 2));
        // Equal strings are trivially prefixes of each other.
        assert!(is_prefix_pair("jane", "jane", 2));
    }
}
