use varpack::entities::{Assignment, CandidateDomain};

/// Lazily enumerates the Cartesian product of the candidate domains of all items.
///
/// Assignments are produced in lexicographic order of the positions within the domains:
/// the last item varies fastest and the overflow bin, being last in every domain, comes last.
/// The first `n_fixed` items keep their starting choice, which is how the search space is partitioned.
#[derive(Debug, Clone)]
pub struct AssignmentEnumerator<'a> {
    domains: &'a [CandidateDomain],
    /// Position within each domain of the next assignment to produce
    cursor: Vec<usize>,
    start: Vec<usize>,
    n_fixed: usize,
    remaining: u128,
}

impl<'a> AssignmentEnumerator<'a> {
    /// Enumerates every assignment of the given domains
    pub fn new(domains: &'a [CandidateDomain]) -> Self {
        Self::with_prefix(domains, vec![])
    }

    /// Enumerates the assignments in which the first items occupy the given positions of their domains
    fn with_prefix(domains: &'a [CandidateDomain], prefix: Vec<usize>) -> Self {
        assert!(prefix.len() <= domains.len());
        assert!(prefix.iter().zip(domains).all(|(&p, d)| p < d.len()));
        let n_fixed = prefix.len();
        let mut start = prefix;
        start.resize(domains.len(), 0);
        let mut enumerator = Self {
            domains,
            cursor: start.clone(),
            start,
            n_fixed,
            remaining: 0,
        };
        enumerator.remaining = enumerator.len();
        enumerator
    }

    /// Splits the enumeration by the choice of the first item.
    /// Concatenating the partitions yields the same sequence as [`AssignmentEnumerator::new`].
    pub fn partitions(domains: &'a [CandidateDomain]) -> Vec<Self> {
        match domains.first() {
            None => vec![Self::new(domains)],
            Some(first) => (0..first.len())
                .map(|pos| Self::with_prefix(domains, vec![pos]))
                .collect(),
        }
    }

    /// Total number of assignments in this enumeration, saturating at `u128::MAX`
    pub fn len(&self) -> u128 {
        self.domains[self.n_fixed..]
            .iter()
            .fold(1u128, |acc, d| acc.saturating_mul(d.len() as u128))
    }

    /// Never true: the product over zero domains still holds the empty assignment
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of assignments not yet produced
    pub fn remaining(&self) -> u128 {
        self.remaining
    }

    /// Restarts the enumeration from its first assignment
    pub fn reset(&mut self) {
        self.cursor.clone_from(&self.start);
        self.remaining = self.len();
    }

    /// Bin ids of the items whose choice is fixed in this enumeration
    pub fn fixed_bins(&self) -> impl Iterator<Item = usize> + '_ {
        self.start[..self.n_fixed]
            .iter()
            .zip(self.domains)
            .map(|(&pos, d)| d[pos])
    }

    /// Upper bound on the number of allocated items of any assignment in this enumeration
    pub fn max_allocated(&self) -> usize {
        let fixed = self
            .fixed_bins()
            .zip(self.domains)
            .filter(|&(bin_id, d)| bin_id != d.overflow_id())
            .count();
        let free = self.domains[self.n_fixed..]
            .iter()
            .filter(|d| d.has_real_bins())
            .count();
        fixed + free
    }

    fn current(&self) -> Assignment {
        Assignment::new(
            self.cursor
                .iter()
                .zip(self.domains)
                .map(|(&pos, d)| d[pos])
                .collect::<Vec<_>>(),
        )
    }

    /// Moves the cursor to the next assignment, like an odometer
    fn advance(&mut self) {
        for i in (self.n_fixed..self.domains.len()).rev() {
            self.cursor[i] += 1;
            if self.cursor[i] < self.domains[i].len() {
                return;
            }
            self.cursor[i] = 0;
        }
    }
}

impl Iterator for AssignmentEnumerator<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.remaining == 0 {
            return None;
        }
        let assignment = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
