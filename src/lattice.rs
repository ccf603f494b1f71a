//! Word lattice: the set of candidate nodes spanning an input string, laid
//! out by codepoint position so the Viterbi solver can walk it left to
//! right.
//!
//! The teacher's lattice (`examples/mocobeta-runome/src/lattice.rs`) models
//! nodes as `dyn LatticeNode` trait objects (`Node`, `UnknownNode`, `BOS`,
//! `EOS`) connected by `back_pos`/`back_index` indices into per-position
//! vectors. This crate has no unknown-word synthesis, so the open trait
//! hierarchy collapses to one closed tag; we keep the teacher's index-based
//! back-reference idea (`best_predecessor: Option<usize>` into a flat `Vec`)
//! but drop the trait object in favor of a single struct over a small enum,
//! matching the design note in SPEC_FULL.md.

/// What kind of node this is. `Term` is the only variant carrying a payload;
/// `Bos`/`Eos` are the fixed sentinels bracketing every lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Bos,
    Eos,
    Term { term_id: usize },
}

/// Sentinel cost meaning "no path to this node has been found yet". Every
/// node other than BOS must be constructed with this value; the Viterbi
/// forward pass treats it as unreachable rather than a real cost (the
/// strict-reachability fix described in SPEC_FULL.md §9).
pub const UNREACHABLE: i32 = i32::MAX;

/// One candidate node in the lattice. `total_cost`/`best_predecessor` start
/// uninitialized and are filled in by the Viterbi forward pass; nothing
/// before that pass may read them.
#[derive(Debug, Clone)]
pub struct LatticeNode {
    pub kind: NodeKind,
    /// Codepoint index where this node starts (inclusive).
    pub start_index: usize,
    /// Codepoint index where this node ends (exclusive).
    pub end_index: usize,
    pub left_context_id: u16,
    pub right_context_id: u16,
    pub emission_cost: i32,
    pub total_cost: i32,
    pub best_predecessor: Option<usize>,
}

/// The lattice itself: a flat node arena plus position indices for fast
/// "what starts/ends here" queries during construction and Viterbi.
pub struct Lattice {
    nodes: Vec<LatticeNode>,
    starting_at: Vec<Vec<usize>>,
    ending_at: Vec<Vec<usize>>,
    bos_index: usize,
    eos_index: usize,
}

impl Lattice {
    /// Create an empty lattice over an input of `char_len` codepoints,
    /// pre-seeded with its BOS and EOS sentinel nodes.
    pub fn new(char_len: usize) -> Self {
        // `starting_at` only ever needs positions 0..=char_len (no node
        // starts past EOS). `ending_at` needs one more slot: per §3, EOS
        // spans `[char_len, char_len + 1)`, one codepoint wide like any
        // other node, rather than the zero-width `[char_len, char_len)`
        // BOS uses at the other end.
        let mut lattice = Self {
            nodes: Vec::new(),
            starting_at: vec![Vec::new(); char_len + 1],
            ending_at: vec![Vec::new(); char_len + 2],
            bos_index: 0,
            eos_index: 0,
        };

        lattice.bos_index = lattice.add_node(LatticeNode {
            kind: NodeKind::Bos,
            start_index: 0,
            end_index: 0,
            left_context_id: 0,
            right_context_id: 0,
            emission_cost: 0,
            total_cost: 0,
            best_predecessor: None,
        });
        lattice.eos_index = lattice.add_node(LatticeNode {
            kind: NodeKind::Eos,
            start_index: char_len,
            end_index: char_len + 1,
            left_context_id: 0,
            right_context_id: 0,
            emission_cost: 0,
            total_cost: UNREACHABLE,
            best_predecessor: None,
        });

        lattice
    }

    /// Insert a node into the arena, returning its index, and record it in
    /// the start/end position indices.
    pub fn add_node(&mut self, node: LatticeNode) -> usize {
        let index = self.nodes.len();
        self.starting_at[node.start_index].push(index);
        self.ending_at[node.end_index].push(index);
        self.nodes.push(node);
        index
    }

    pub fn node(&self, index: usize) -> &LatticeNode {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: usize) -> &mut LatticeNode {
        &mut self.nodes[index]
    }

    pub fn bos_index(&self) -> usize {
        self.bos_index
    }

    pub fn eos_index(&self) -> usize {
        self.eos_index
    }

    pub fn nodes_starting_at(&self, position: usize) -> &[usize] {
        &self.starting_at[position]
    }

    pub fn nodes_ending_at(&self, position: usize) -> &[usize] {
        &self.ending_at[position]
    }

    /// One past the highest codepoint position in the lattice (the EOS
    /// position).
    pub fn char_len(&self) -> usize {
        self.starting_at.len() - 1
    }
}
