//! Shortest-path (minimum total cost) search over a [`Lattice`].
//!
//! Grounded in `examples/mocobeta-runome/src/tokenizer.rs`'s `tokenize`
//! method, which walks positions left to right relaxing every live edge, and
//! in `examples/original_source/lattice.py`'s `Lattice.build` — but this
//! implementation deliberately does NOT carry over that file's
//! reachability bug: the original falls back to
//! `previous_node.total_cost or previous_node_term.cost` when
//! `total_cost` is falsy, silently treating an unreached predecessor as if
//! it cost only its own emission cost. That lets a path "teleport" through
//! a node nothing actually connects to. This solver instead skips any
//! predecessor whose `total_cost` is still [`UNREACHABLE`], per the
//! strict-reachability decision recorded in DESIGN.md.

use crate::dictionary::Dictionary;
use crate::error::{Result, WakachiError};
use crate::lattice::{Lattice, NodeKind, UNREACHABLE};

/// Run the forward relaxation pass over every position in `lattice`,
/// writing `total_cost`/`best_predecessor` into each node in place.
pub fn relax(lattice: &mut Lattice, dictionary: &Dictionary) -> Result<()> {
    for position in 0..=lattice.char_len() {
        let ending_here = lattice.nodes_ending_at(position).to_vec();
        let starting_here = lattice.nodes_starting_at(position).to_vec();

        for &next_idx in &starting_here {
            for &prev_idx in &ending_here {
                // BOS is zero-width (start_index == end_index == 0), so at
                // position 0 it appears in both `ending_here` and
                // `starting_here`. Without this guard it would relax
                // against itself.
                if prev_idx == next_idx {
                    continue;
                }

                let prev_total_cost = lattice.node(prev_idx).total_cost;
                if prev_total_cost == UNREACHABLE {
                    continue;
                }

                let (prev_kind, prev_right, next_kind, next_left, next_emission) = {
                    let prev = lattice.node(prev_idx);
                    let next = lattice.node(next_idx);
                    (prev.kind, prev.right_context_id, next.kind, next.left_context_id, next.emission_cost)
                };
                // BOS/EOS carry neither emission nor context (§4.F): a
                // transition touching either boundary is defined as 0,
                // regardless of what the connection matrix holds at
                // context id 0 — it must not be looked up here.
                let transition = if matches!(prev_kind, NodeKind::Bos) || matches!(next_kind, NodeKind::Eos) {
                    0
                } else {
                    dictionary.connection_cost(next_left as usize, prev_right as usize)?
                };
                let candidate = prev_total_cost + transition + next_emission;

                let next = lattice.node_mut(next_idx);
                if candidate < next.total_cost {
                    next.total_cost = candidate;
                    next.best_predecessor = Some(prev_idx);
                }
            }
        }
    }

    if lattice.node(lattice.eos_index()).total_cost == UNREACHABLE {
        return Err(WakachiError::NoPath);
    }
    Ok(())
}

/// Walk `best_predecessor` links from EOS back to BOS, returning node
/// indices in left-to-right (BOS-first) order. Must be called only after
/// [`relax`] has returned `Ok`.
pub fn reconstruct_path(lattice: &Lattice) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(lattice.eos_index());
    while let Some(idx) = current {
        path.push(idx);
        current = lattice.node(idx).best_predecessor;
    }
    path.reverse();
    path
}
