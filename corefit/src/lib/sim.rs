use crate::algo::Policy;
use crate::metrics::{self, Snapshot};
use crate::utils::*;

/// Everything one policy run produces: the final layout, the
/// processes that never found a host, where each placed process
/// ended up, and the total search cost.
#[derive(Clone, Debug)]
pub struct RunResult {
    pub policy:         Policy,
    pub partitions:     PartitionList,
    /// Names that failed to find a hole, in the order they were
    /// attempted. A failed request does not block later ones.
    pub waiting:        Vec<ProcName>,
    pub placements:     PlacementMap,
    /// Holes examined across the whole run. Comparative cost
    /// reporting only; correctness never depends on it.
    pub holes_examined: usize,
}

impl RunResult {
    /// Capacity of the region. Conserved across placements, so the
    /// final layout is as good a source as the original sizes.
    #[inline]
    pub fn total_memory(&self) -> Units {
        self.partitions.iter().map(|p| p.size()).sum()
    }

    #[inline]
    pub fn metrics(&self) -> Snapshot {
        metrics::compute(&self.partitions, self.total_memory())
    }
}

/// Replays the full request list against a fresh partition list built
/// from `sizes`, under one policy.
///
/// Every run constructs its own all-free layout: policies must never
/// observe each other's intermediate state. Requests are attempted
/// strictly in input order, with no backtracking; a failure appends
/// the name to the waiting list and the run moves on.
pub fn run(policy: Policy, sizes: &[Units], requests: &[Request]) -> RunResult {
    let mut partitions: PartitionList = sizes.iter().map(|s| Partition::new(*s)).collect();
    let mut waiting = vec![];
    let mut holes_examined = 0;

    for req in requests {
        let (placed, cost) = policy.attempt(&mut partitions, &req.name, req.size);
        holes_examined += cost;
        if !placed {
            waiting.push(req.name.clone());
        }
    }

    // Indices move around while holes are split, so the registry is
    // derived from the final layout rather than tracked per attempt.
    let mut placements = PlacementMap::default();
    for (idx, part) in partitions.iter().enumerate() {
        if let Some(name) = part.occupant() {
            placements.insert(name.clone(), idx);
        }
    }

    RunResult {
        policy,
        partitions,
        waiting,
        placements,
        holes_examined,
    }
}

/// The "compare all" entry point: one independent run per policy,
/// each on its own fresh layout.
///
/// The runs share nothing mutable beyond the read-only inputs, so
/// they are fanned out across threads. Results come back in
/// [Policy::ALL] order regardless of completion order.
pub fn run_all(sizes: &[Units], requests: &[Request]) -> Vec<RunResult> {
    Policy::ALL
        .par_iter()
        .map(|policy| run(*policy, sizes, requests))
        .collect()
}
