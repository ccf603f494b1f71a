use std::collections::BTreeMap;

use fst::{Map, MapBuilder};

use crate::error::{Result, WakachiError};

use super::term_table::TermTable;

/// Prefix-search index over surface forms, backed by an `fst::Map`.
///
/// `fst::Map` only stores one `u64` per key, but IPADIC surface forms are
/// not unique (homographs with different readings/costs share a surface
/// form), so the FST maps `surface form -> group id` and a side table maps
/// `group id -> [term_id]`. This keeps the fast path — one FST lookup per
/// candidate prefix length — while still surfacing every duplicate.
pub struct PrefixIndex {
    fst: Map<Vec<u8>>,
    groups: Vec<Vec<usize>>,
}

impl PrefixIndex {
    /// Build the index from every `(surface_form, term_id)` pair in `table`.
    pub fn build(table: &TermTable) -> Result<Self> {
        let mut grouped: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (term_id, entry) in table.iter() {
            grouped.entry(entry.surface_form.as_str()).or_default().push(term_id);
        }

        let mut builder = MapBuilder::memory();
        let mut groups = Vec::with_capacity(grouped.len());
        for (surface, term_ids) in grouped {
            let group_id = groups.len() as u64;
            builder
                .insert(surface.as_bytes(), group_id)
                .map_err(|e| WakachiError::LoadError {
                    path: "<prefix index>".to_string(),
                    reason: format!("failed to insert '{surface}' into fst: {e}"),
                })?;
            groups.push(term_ids);
        }

        let fst_bytes = builder.into_inner().map_err(|e| WakachiError::LoadError {
            path: "<prefix index>".to_string(),
            reason: format!("failed to finalize fst: {e}"),
        })?;
        let fst = Map::new(fst_bytes).map_err(|e| WakachiError::LoadError {
            path: "<prefix index>".to_string(),
            reason: format!("failed to load fst: {e}"),
        })?;

        Ok(Self { fst, groups })
    }

    /// Every `(surface_form, term_id)` pair whose surface form is a prefix
    /// of `s`. Codepoint-boundary aware: prefixes are taken at character
    /// boundaries only, never mid-codepoint.
    pub fn prefixes(&self, s: &str) -> Vec<(String, usize)> {
        if s.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        let mut boundaries: Vec<usize> = s.char_indices().skip(1).map(|(i, _)| i).collect();
        boundaries.push(s.len());

        for end in boundaries {
            let prefix = &s[..end];
            if let Some(group_id) = self.fst.get(prefix) {
                for &term_id in &self.groups[group_id as usize] {
                    results.push((prefix.to_string(), term_id));
                }
            }
        }

        results
    }
}
