use std::collections::HashMap;

use shared_types::{Contact, DeduplicationResult, DuplicateGroup};

use crate::matcher::{is_duplicate, MatcherConfig};

/// Union-find over contact indices, used to turn the pairwise match
/// relation into connected components.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        // Path halving.
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

/// Partition a contact batch into duplicate groups and uniques using the
/// default matcher thresholds.
pub fn find_duplicate_contacts(contacts: &[Contact]) -> DeduplicationResult {
    find_duplicate_contacts_with(contacts, &MatcherConfig::default())
}

/// Partition a contact batch with caller-supplied matcher thresholds.
///
/// Connected components of the match relation are computed over all
/// O(n²) pairs, so transitive duplicates (A~B via email, B~C via name)
/// land in one group even when A and C share no criterion directly.
/// Components of size one go to `unique`; both outputs preserve input
/// order and together account for every input contact exactly once.
pub fn find_duplicate_contacts_with(
    contacts: &[Contact],
    config: &MatcherConfig,
) -> DeduplicationResult {
    let mut uf = UnionFind::new(contacts.len());

    for i in 0..contacts.len() {
        for j in (i + 1)..contacts.len() {
            if is_duplicate(&contacts[i], &contacts[j], config) {
                uf.union(i, j);
            }
        }
    }

    // Bucket indices by component root. Components are ordered by first
    // appearance and members stay in input order within each component.
    let mut roots: Vec<usize> = Vec::new();
    let mut members: HashMap<usize, Vec<usize>> = HashMap::new();
    for i in 0..contacts.len() {
        let root = uf.find(i);
        members
            .entry(root)
            .or_insert_with(|| {
                roots.push(root);
                Vec::new()
            })
            .push(i);
    }

    let mut duplicates: Vec<DuplicateGroup> = Vec::new();
    let mut unique: Vec<Contact> = Vec::new();
    for root in roots {
        let indices = &members[&root];
        if indices.len() >= 2 {
            duplicates.push(indices.iter().map(|&i| contacts[i].clone()).collect());
        } else {
            unique.push(contacts[indices[0]].clone());
        }
    }

    tracing::debug!(
        "Deduplication pass: {} contacts -> {} duplicate groups, {} unique",
        contacts.len(),
        duplicates.len(),
        unique.len()
    );

    DeduplicationResult { duplicates, unique }
}
