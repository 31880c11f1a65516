use shared_types::{Contact, DedupError, DuplicateGroup};

/// Collapse one duplicate group into a single canonical contact.
///
/// Scanning in group order: names take the first contact's value, falling
/// back to the longest non-empty value among the rest; email, phone and
/// company take the first non-empty occurrence; the id comes from the first
/// member that has one, so persisted contacts keep their identity over
/// freshly imported rows.
///
/// A singleton group is returned unchanged so callers can apply the merge
/// uniformly; an empty group is a caller bug and fails with
/// `DedupError::EmptyMergeInput`.
pub fn merge_contacts(group: &[Contact]) -> Result<Contact, DedupError> {
    let first = group.first().ok_or(DedupError::EmptyMergeInput)?;
    if group.len() == 1 {
        return Ok(first.clone());
    }

    Ok(Contact {
        id: group.iter().find_map(|c| c.id.clone()),
        first_name: merge_name(group, first_name_of),
        last_name: merge_name(group, last_name_of),
        email: first_present(group, email_of),
        phone: first_present(group, phone_of),
        company: first_present(group, company_of),
    })
}

/// Merge every group of a deduplication pass, in order. This is the
/// merged-preview list the deduplication page renders next to each group.
pub fn merge_groups(groups: &[DuplicateGroup]) -> Result<Vec<Contact>, DedupError> {
    groups.iter().map(|g| merge_contacts(g)).collect()
}

fn first_name_of(c: &Contact) -> &str {
    &c.first_name
}

fn last_name_of(c: &Contact) -> &str {
    &c.last_name
}

fn email_of(c: &Contact) -> Option<&str> {
    c.email.as_deref()
}

fn phone_of(c: &Contact) -> Option<&str> {
    c.phone.as_deref()
}

fn company_of(c: &Contact) -> Option<&str> {
    c.company.as_deref()
}

fn merge_name(group: &[Contact], field: fn(&Contact) -> &str) -> String {
    let head = field(&group[0]);
    if !head.trim().is_empty() {
        return head.to_string();
    }

    // A fuller name is assumed more informative than an abbreviation, so
    // the longest non-empty candidate wins; ties keep the earliest one.
    let mut best = "";
    for contact in &group[1..] {
        let value = field(contact);
        if !value.trim().is_empty() && value.chars().count() > best.chars().count() {
            best = value;
        }
    }
    best.to_string()
}

fn first_present(group: &[Contact], field: fn(&Contact) -> Option<&str>) -> Option<String> {
    group
        .iter()
        .filter_map(field)
        .find(|value| !value.trim().is_empty())
        .map(|value| value.to_string())
}
