use crate::utils::*;

/// Utilization and fragmentation figures derived from a partition
/// list at some point in time, most usefully the final state after a
/// full run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    /// Percentage of total memory occupied by processes.
    pub utilization:    f64,
    /// Sum of all hole sizes.
    pub free:           Units,
    /// Number of holes.
    pub num_holes:      usize,
    /// Size of the biggest hole, 0 if none exists.
    pub largest_hole:   Units,
}

/// Pure projection over a snapshot; mutates nothing.
pub fn compute(parts: &[Partition], total_memory: Units) -> Snapshot {
    let mut allocated = 0;
    let mut free = 0;
    let mut num_holes = 0;
    let mut largest_hole = 0;

    for part in parts {
        if part.is_free() {
            free += part.size();
            num_holes += 1;
            if part.size() > largest_hole {
                largest_hole = part.size();
            }
        } else {
            allocated += part.size();
        }
    }

    Snapshot {
        // A zero-capacity region is degenerate input, not a fault:
        // report zero instead of dividing by it.
        utilization: if total_memory == 0 {
            0.0
        } else {
            allocated as f64 / total_memory as f64 * 100.0
        },
        free,
        num_holes,
        largest_hole,
    }
}
