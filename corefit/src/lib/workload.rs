use crate::utils::*;
use rand::prelude::*;

/// The validated input of a simulation: one partition layout plus one
/// ordered request sequence. Constructed through [init], never by
/// hand.
#[derive(Clone, Debug)]
pub struct Workload {
    pub sizes:      Vec<Units>,
    pub requests:   Vec<Request>,
}

/// Appears while constructing the [Workload] to be replayed.
#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("Empty partition layout!")]
    EmptyLayout,
    #[error("Partition with 0 size found! (index {0})")]
    ZeroPartition(usize),
    #[error("Request with 0 size found!\n{0:?}")]
    ZeroRequest(Request),
    #[error("Request with empty name found!\n{0:?}")]
    UnnamedRequest(Request),
    #[error("Two requests with same name found!\n{0:?}")]
    DuplicateName(Request),
}

/// Initializes a [Workload] from raw partition sizes and requests.
/// A successfully returned workload is guaranteed to be compliant
/// with all of `corefit`'s assumptions. These are:
/// - at least one partition exists
/// - no partition has zero size
/// - no request has zero size
/// - no request has an empty name
/// - no two requests share a name
///
/// This function is the gatekeeper to the rest of the library: the
/// placement algorithms themselves assume validated input.
pub fn init(sizes: Vec<Units>, requests: Vec<Request>) -> Result<Workload, WorkloadError> {
    if sizes.is_empty() {
        return Err(WorkloadError::EmptyLayout);
    }
    for (idx, s) in sizes.iter().enumerate() {
        if *s == 0 {
            return Err(WorkloadError::ZeroPartition(idx));
        }
    }
    for req in &requests {
        if req.size == 0 {
            return Err(WorkloadError::ZeroRequest(req.clone()));
        } else if req.name.is_empty() {
            return Err(WorkloadError::UnnamedRequest(req.clone()));
        }
    }
    // Duplicate names would make the placement registry ambiguous.
    if let Some(dup) = requests.iter().duplicates_by(|r| r.name.clone()).next() {
        return Err(WorkloadError::DuplicateName(dup.clone()));
    }

    Ok(Workload { sizes, requests })
}

/// Spawns a reproducible random request sequence for comparing the
/// policies on synthetic input. Same seed, same sequence.
///
/// Sizes land in `1..=max_size`, so the result always passes [init].
/// Names follow the `p1`, `p2`, ... convention of hand-written
/// workloads.
pub fn synth(num_requests: usize, max_size: Units, seed: u64) -> Vec<Request> {
    debug_assert!(max_size > 0, "Zero-sized synthesis range!");
    let mut gen = StdRng::seed_from_u64(seed);

    (1..=num_requests)
        .map(|i| Request::new(&format!("p{i}"), gen.gen_range(1..=max_size)))
        .collect()
}
