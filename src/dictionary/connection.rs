use crate::error::{Result, WakachiError};

/// Dense bigram connection-cost matrix, `side x side`.
///
/// Stored as a flat `Vec` rather than `Vec<Vec<_>>` for a cache-friendly,
/// single-allocation layout — connection cost lookup sits in the Viterbi
/// inner loop and dominates runtime on long inputs.
#[derive(Debug)]
pub struct ConnectionMatrix {
    side: usize,
    costs: Vec<i32>,
}

impl ConnectionMatrix {
    /// Build a zero-initialized matrix of the given side, to be filled in
    /// by the loader as it reads sparse `left right cost` triples.
    pub fn zeroed(side: usize) -> Self {
        Self {
            side,
            costs: vec![0; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Set `matrix[left][right] = cost`, bounds-checked against `side`.
    pub fn set(&mut self, left: usize, right: usize, cost: i32) -> Result<()> {
        let idx = self.index(left, right)?;
        self.costs[idx] = cost;
        Ok(())
    }

    /// `matrix[left][right]` (§4.A): the transition cost when a node with
    /// `left_context_id = left` follows a node with `right_context_id =
    /// right`. Callers connecting two lattice nodes `u` (predecessor) and
    /// `v` (successor) pass `cost(v.left_context_id, u.right_context_id)`
    /// (§4.F) — `left`/`right` here name matrix axes, not node roles.
    pub fn cost(&self, left: usize, right: usize) -> Result<i32> {
        let idx = self.index(left, right)?;
        Ok(self.costs[idx])
    }

    fn index(&self, left: usize, right: usize) -> Result<usize> {
        if left >= self.side || right >= self.side {
            return Err(WakachiError::OutOfRange {
                left,
                right,
                side: self.side,
            });
        }
        Ok(left * self.side + right)
    }
}
