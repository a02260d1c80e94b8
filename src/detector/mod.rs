//! # Deadlock Detection Module
//!
//! This module implements the two detection algorithms. Neither keeps state
//! between calls: every detection pass builds its own graph or work/finish
//! vectors and discards them on return.
//!
//! ## Algorithms
//!
//! - **Wait-for graph**: an iterative depth-first search over the graph built
//!   from the edge list. An edge back into the active path closes a cycle,
//!   which is a circular wait. Runs in O(V + E).
//! - **Banker's algorithm**: grows a work vector by reclaiming the allocation
//!   of every process whose outstanding request fits, until a full pass grants
//!   nothing. Runs in O(n² · m) for n processes and m resource types.
//!
//! ## Example
//!
//! ```
//! use deadlock_detector::core::Edge;
//! use deadlock_detector::detector::{detect_banker_deadlock, detect_wait_for_cycle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let edges = [Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)];
//! let result = detect_wait_for_cycle(&edges);
//! assert_eq!(result.cycle().map(|c| c.nodes().to_vec()), Some(vec![1, 2, 3, 1]));
//!
//! let result = detect_banker_deadlock(
//!     &[0, 0],
//!     &[vec![1, 0], vec![0, 1]],
//!     &[vec![0, 1], vec![1, 0]],
//! )?;
//! assert_eq!(result.processes(), Some(&[0, 1][..]));
//! # Ok(())
//! # }
//! ```

mod banker;
mod wait_for;

pub use banker::{BankerSimulation, BankersDeadlockDetector, validate_shape};
pub use wait_for::{WaitForGraph, WaitForGraphDetector, find_cycle};

use crate::core::{DetectionResult, Edge};
use crate::error::InputShapeError;

/// Look for a circular wait in the graph described by `edges`
pub fn detect_wait_for_cycle(edges: &[Edge]) -> DetectionResult {
    WaitForGraphDetector::new().detect(edges)
}

/// Run the Banker deadlock check; shape errors are reported before any
/// simulation happens
pub fn detect_banker_deadlock(
    available: &[u64],
    allocation: &[Vec<u64>],
    request: &[Vec<u64>],
) -> Result<DetectionResult, InputShapeError> {
    BankersDeadlockDetector::new().detect(available, allocation, request)
}
