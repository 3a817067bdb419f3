use crate::utils::*;

/// The three classic placement policies for contiguous allocation.
///
/// All of them obey the same tie-break rule: when several holes are
/// equally eligible, the one encountered first in list order wins.
/// First-fit gets this for free by stopping early; best- and
/// worst-fit enforce it by updating their running candidate only on
/// *strict* improvement.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Policy {
    FirstFit,
    BestFit,
    WorstFit,
}

impl Policy {
    /// Fixed reporting order for "compare all" runs.
    pub const ALL: [Policy; 3] = [Policy::FirstFit, Policy::BestFit, Policy::WorstFit];

    /// Tries to place one process into `parts` under this policy.
    ///
    /// Returns whether placement succeeded, plus the number of holes
    /// examined before the decision was made. On failure the list is
    /// left completely untouched.
    #[inline]
    pub fn attempt(
        &self,
        parts:  &mut PartitionList,
        name:   &ProcName,
        size:   Units,
    ) -> (bool, usize) {
        match self {
            Policy::FirstFit    => first_fit(parts, name, size),
            Policy::BestFit     => best_fit(parts, name, size),
            Policy::WorstFit    => worst_fit(parts, name, size),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Policy::FirstFit    => "First-Fit",
            Policy::BestFit     => "Best-Fit",
            Policy::WorstFit    => "Worst-Fit",
        }
    }
}

/// Scans in list order and settles into the first hole big enough.
///
/// The hole count includes every hole visited up to and including the
/// chosen one, or all of them if none qualifies.
pub fn first_fit(parts: &mut PartitionList, name: &ProcName, size: Units) -> (bool, usize) {
    let mut holes_examined = 0;
    for idx in 0..parts.len() {
        if parts[idx].is_free() {
            holes_examined += 1;
            if parts[idx].size() >= size {
                settle(parts, idx, name, size);
                return (true, holes_examined);
            }
        }
    }

    (false, holes_examined)
}

/// Scans the whole list and settles into the smallest hole big
/// enough. Every hole is examined exactly once.
pub fn best_fit(parts: &mut PartitionList, name: &ProcName, size: Units) -> (bool, usize) {
    let mut holes_examined = 0;
    let mut best: Option<(usize, Units)> = None;

    for (idx, part) in parts.iter().enumerate() {
        if part.is_free() {
            holes_examined += 1;
            if part.size() >= size {
                match best {
                    // Strict improvement only: the earliest minimal
                    // hole must win ties.
                    Some((_, cand)) if part.size() >= cand => {}
                    _ => {
                        best = Some((idx, part.size()));
                    }
                }
            }
        }
    }

    match best {
        Some((idx, _)) => {
            settle(parts, idx, name, size);
            (true, holes_examined)
        }
        None => (false, holes_examined),
    }
}

/// Scans the whole list and settles into the largest hole big
/// enough. Symmetric to [best_fit] in every other respect.
pub fn worst_fit(parts: &mut PartitionList, name: &ProcName, size: Units) -> (bool, usize) {
    let mut holes_examined = 0;
    let mut worst: Option<(usize, Units)> = None;

    for (idx, part) in parts.iter().enumerate() {
        if part.is_free() {
            holes_examined += 1;
            if part.size() >= size {
                match worst {
                    Some((_, cand)) if part.size() <= cand => {}
                    _ => {
                        worst = Some((idx, part.size()));
                    }
                }
            }
        }
    }

    match worst {
        Some((idx, _)) => {
            settle(parts, idx, name, size);
            (true, holes_examined)
        }
        None => (false, holes_examined),
    }
}

// The split-or-convert transition shared by all policies. The caller
// guarantees that `parts[idx]` is a hole of at least `size` units.
fn settle(parts: &mut PartitionList, idx: usize, name: &ProcName, size: Units) {
    let hole = parts[idx].size();
    if hole > size {
        // Occupied prefix of exactly the requested size, plus a new
        // hole holding the remainder right after it. The remainder is
        // never zero-sized, since exact fits take the other branch.
        let remainder = hole - size;
        parts[idx] = Partition::occupied(size, name.clone());
        parts.insert(idx + 1, Partition::new(remainder));
    } else {
        parts[idx].occupy(name.clone());
    }
}
