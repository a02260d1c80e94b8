use crate::core::{DeadlockEvidence, DetectionResult};
use crate::error::{InputShapeError, Matrix};

/// Final state of a Banker simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankerSimulation {
    work: Vec<u64>,
    finish: Vec<bool>,
    completion_order: Vec<usize>,
    passes: usize,
}

impl BankerSimulation {
    /// Resources available once every grantable process has finished
    pub fn work(&self) -> &[u64] {
        &self.work
    }

    pub fn finish(&self) -> &[bool] {
        &self.finish
    }

    /// Processes in the order the simulation let them finish. When no process
    /// is deadlocked this is a safe sequence.
    pub fn completion_order(&self) -> &[usize] {
        &self.completion_order
    }

    /// Number of passes over the process list, including the final pass that
    /// granted nothing
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Processes that can never finish, ascending
    pub fn deadlocked(&self) -> Vec<usize> {
        self.finish
            .iter()
            .enumerate()
            .filter(|(_, done)| !**done)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_safe(&self) -> bool {
        self.finish.iter().all(|&done| done)
    }

    pub fn to_result(&self) -> DetectionResult {
        let deadlocked = self.deadlocked();
        if deadlocked.is_empty() {
            DetectionResult::Safe
        } else {
            DetectionResult::Deadlock(DeadlockEvidence::Processes(deadlocked))
        }
    }
}

/// Work/finish vectors for one simulation run
struct BankerState<'a> {
    work: Vec<u64>,
    finish: Vec<bool>,
    allocation: &'a [Vec<u64>],
    request: &'a [Vec<u64>],
    completion_order: Vec<usize>,
}

impl<'a> BankerState<'a> {
    fn new(available: &[u64], allocation: &'a [Vec<u64>], request: &'a [Vec<u64>]) -> Self {
        Self {
            work: available.to_vec(),
            finish: vec![false; allocation.len()],
            allocation,
            request,
            completion_order: Vec::with_capacity(allocation.len()),
        }
    }

    // Rows may be narrower than `work`; zip leaves the trailing types untouched
    fn can_grant(&self, process: usize) -> bool {
        self.request[process]
            .iter()
            .zip(&self.work)
            .all(|(needed, free)| needed <= free)
    }

    fn grant(&mut self, process: usize) {
        for (free, held) in self.work.iter_mut().zip(&self.allocation[process]) {
            *free = free.saturating_add(*held);
        }
        self.finish[process] = true;
        self.completion_order.push(process);
    }

    /// One sweep over unfinished processes; true if anything was granted
    fn run_pass(&mut self) -> bool {
        let mut changed = false;
        for process in 0..self.finish.len() {
            if !self.finish[process] && self.can_grant(process) {
                self.grant(process);
                changed = true;
            }
        }
        changed
    }

    fn into_simulation(self, passes: usize) -> BankerSimulation {
        BankerSimulation {
            work: self.work,
            finish: self.finish,
            completion_order: self.completion_order,
            passes,
        }
    }
}

/// Check that the three inputs describe `n` processes over a common row
/// width `k`, with `k` no larger than the number of resource types in
/// `available`. Resource types past `k` count as neither held nor requested.
pub fn validate_shape(
    available: &[u64],
    allocation: &[Vec<u64>],
    request: &[Vec<u64>],
) -> Result<(), InputShapeError> {
    let m = available.len();
    if m == 0 {
        return Err(InputShapeError::NoResourceTypes);
    }
    if allocation.len() != request.len() {
        return Err(InputShapeError::ProcessCountMismatch {
            allocation: allocation.len(),
            request: request.len(),
        });
    }

    let Some(width) = allocation.first().map(Vec::len) else {
        return Ok(());
    };
    if width > m {
        return Err(InputShapeError::RaggedRow {
            matrix: Matrix::Allocation,
            process: 0,
            expected: m,
            found: width,
        });
    }

    for (matrix, rows) in [(Matrix::Allocation, allocation), (Matrix::Request, request)] {
        if let Some((process, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(InputShapeError::RaggedRow {
                matrix,
                process,
                expected: width,
                found: row.len(),
            });
        }
    }

    Ok(())
}

/// Deadlock detection over allocation and request matrices
///
/// Repeatedly grants any unfinished process whose outstanding request fits
/// in the current work vector, reclaiming its allocation, until a full pass
/// grants nothing. Whatever is still unfinished is deadlocked.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankersDeadlockDetector;

impl BankersDeadlockDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn simulate(
        &self,
        available: &[u64],
        allocation: &[Vec<u64>],
        request: &[Vec<u64>],
    ) -> Result<BankerSimulation, InputShapeError> {
        validate_shape(available, allocation, request)?;

        let mut state = BankerState::new(available, allocation, request);
        let mut passes = 1;
        while state.run_pass() {
            passes += 1;
        }

        Ok(state.into_simulation(passes))
    }

    pub fn detect(
        &self,
        available: &[u64],
        allocation: &[Vec<u64>],
        request: &[Vec<u64>],
    ) -> Result<DetectionResult, InputShapeError> {
        Ok(self.simulate(available, allocation, request)?.to_result())
    }
}
