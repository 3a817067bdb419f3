pub use std::{
    hash::BuildHasherDefault,
    sync::Arc,
};
pub use thiserror::Error;
pub use itertools::Itertools;
pub use rayon::prelude::*;
pub use indexmap::{IndexMap, IndexSet};
pub use ahash::AHasher;

pub use crate::{Partition, Request};

/// The unit for measuring memory quantities. The simulation does not
/// care whether these are bytes, kilobytes or abstract blocks, as
/// long as partition sizes and request sizes agree on the semantics.
pub type Units = usize;

/// Process identifiers travel between the request list, the waiting
/// list and the partitions that host them.
// `Arc` is needed for parallelism.
pub type ProcName = Arc<str>;

/// A single linear memory region, represented as an ordered list of
/// contiguous segments.
///
/// The order of the list is the order of the region: "first", "best"
/// and "worst" are all evaluated over it. Splitting a hole inserts
/// the remainder right after the occupied prefix, so the sum of all
/// sizes is conserved at all times.
pub type PartitionList = Vec<Partition>;

/// A map which holds, for each placed process, the index of its host
/// partition in the final layout. Iteration follows layout order.
pub type PlacementMap = IndexMap<ProcName, usize, BuildHasherDefault<AHasher>>;
