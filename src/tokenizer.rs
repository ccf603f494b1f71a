//! The public tokenize entry point: builds a lattice over the input,
//! solves it with [`crate::viterbi`], and renders the winning path as an
//! ordered list of [`PathNode`]s.
//!
//! Grounded in `examples/mocobeta-runome/src/tokenizer.rs`'s `Tokenizer`,
//! minus the chunking (`MAX_CHUNK_SIZE`/unknown-word synthesis) it needs for
//! open-vocabulary input; this crate's lattice spans are dictionary terms
//! only, so a single pass over the whole input suffices (§4.G).

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::lattice::{Lattice, LatticeNode, NodeKind, UNREACHABLE};
use crate::viterbi;

/// Discriminator for a [`PathNode`]'s origin, mirroring [`NodeKind`] at the
/// public API boundary (§6: "a `kind` discriminator (BOS / EOS / TERM)").
/// Kept as its own enum rather than re-exporting `NodeKind` directly so the
/// lattice's internal `term_id` payload never leaks past the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Bos,
    Eos,
    Term,
}

/// One node of the winning BOS→EOS path, in left-to-right order. BOS and
/// EOS are included (§4.F reconstruction note: "callers may strip them");
/// they carry an empty `surface_form` and no features, since they carry
/// neither emission nor context (§3).
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    pub kind: PathKind,
    pub surface_form: String,
    pub start_index: usize,
    pub end_index: usize,
    pub part_of_speech: Option<crate::dictionary::PartOfSpeech>,
    pub subdivision: Option<String>,
}

impl PathNode {
    pub fn is_term(&self) -> bool {
        self.kind == PathKind::Term
    }
}

/// Tokenize `input` against `dictionary`, returning the minimum-cost path
/// from BOS to EOS (§4.F reconstruction), including the BOS/EOS sentinels
/// themselves. Returns [`crate::error::WakachiError::NoPath`] if no term
/// sequence covers the entire input.
pub fn tokenize(dictionary: &Dictionary, input: &str) -> Result<Vec<PathNode>> {
    let chars: Vec<char> = input.chars().collect();
    let char_len = chars.len();
    let mut lattice = Lattice::new(char_len);

    for start in 0..char_len {
        let suffix: String = chars[start..].iter().collect();
        for (surface, term_id) in dictionary.prefix_search(&suffix) {
            let term = dictionary.term(term_id)?;
            let end = start + surface.chars().count();
            lattice.add_node(LatticeNode {
                kind: NodeKind::Term { term_id },
                start_index: start,
                end_index: end,
                left_context_id: term.left_context_id,
                right_context_id: term.right_context_id,
                emission_cost: term.emission_cost,
                total_cost: UNREACHABLE,
                best_predecessor: None,
            });
        }
    }

    viterbi::relax(&mut lattice, dictionary)?;
    let path = viterbi::reconstruct_path(&lattice);

    let chars_for_span = |start: usize, end: usize| -> String { chars[start..end].iter().collect() };

    let mut result = Vec::with_capacity(path.len());
    for node_index in path {
        let node = lattice.node(node_index);
        match node.kind {
            NodeKind::Term { term_id } => {
                let term = dictionary.term(term_id)?;
                result.push(PathNode {
                    kind: PathKind::Term,
                    surface_form: chars_for_span(node.start_index, node.end_index),
                    start_index: node.start_index,
                    end_index: node.end_index,
                    part_of_speech: Some(term.features.part_of_speech),
                    subdivision: Some(term.features.subdivision.clone()),
                });
            }
            NodeKind::Bos => result.push(PathNode {
                kind: PathKind::Bos,
                surface_form: String::new(),
                start_index: node.start_index,
                end_index: node.end_index,
                part_of_speech: None,
                subdivision: None,
            }),
            NodeKind::Eos => result.push(PathNode {
                kind: PathKind::Eos,
                surface_form: String::new(),
                start_index: node.start_index,
                end_index: node.end_index,
                part_of_speech: None,
                subdivision: None,
            }),
        }
    }

    Ok(result)
}

/// Every [`PathNode`] whose `kind` is [`PathKind::Term`], stripping the
/// BOS/EOS sentinels a caller doesn't need (§4.F: "callers may strip them").
pub fn terms_only(path: &[PathNode]) -> impl Iterator<Item = &PathNode> {
    path.iter().filter(|node| node.is_term())
}
