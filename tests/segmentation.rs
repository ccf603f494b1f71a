//! End-to-end segmentation scenarios, mirroring the per-file `#[cfg(test)]`
//! style seen throughout `examples/mocobeta-runome/src` but exercised
//! through the public `wakachi` API only, the way the teacher's own
//! `tokenizer_tests.rs` checks whole-sentence segmentation rather than
//! internal lattice state.

use std::io::Write;

use wakachi::{load_dictionary, terms_only, tokenize, PathKind, PathNode, WakachiError};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn dict_with(terms_csv: &str, matrix_def: &str) -> wakachi::Dictionary {
    let terms = write_temp(terms_csv);
    let matrix = write_temp(matrix_def);
    load_dictionary(&[terms.path()], matrix.path(), encoding_rs::UTF_8).unwrap()
}

#[test]
fn multi_term_sentence_with_no_dictionary_ambiguity() {
    // Every span of this sentence has exactly one covering dictionary
    // term, so the winning path is forced by coverage alone - a sanity
    // check on the full load_dictionary -> tokenize pipeline before the
    // cost-driven ambiguity cases below.
    let dict = dict_with(
        "東京,1,1,10,名詞,固有名詞\n\
         に,2,2,5,助詞,格助詞\n\
         行く,1,1,20,動詞,自立\n",
        "3 3\n1 2 0\n2 1 0\n",
    );
    let path = tokenize(&dict, "東京に行く").unwrap();
    let surfaces: Vec<&str> = terms_only(&path).map(|n| n.surface_form.as_str()).collect();
    assert_eq!(surfaces, vec!["東京", "に", "行く"]);
}

#[test]
fn whole_path_reconstructs_original_input() {
    let dict = dict_with(
        "東京,1,1,10,名詞,固有名詞\n都,1,1,10,名詞,一般\n庁,1,1,10,名詞,一般\n",
        "2 2\n1 1 0\n",
    );
    let path = tokenize(&dict, "東京都庁").unwrap();
    let reconstructed: String = terms_only(&path).map(|n| n.surface_form.as_str()).collect();
    assert_eq!(reconstructed, "東京都庁");
}

#[test]
fn path_nodes_are_contiguous_and_cover_the_input() {
    // BOS (0..0) and EOS (length..length+1) are zero-width/one-width
    // sentinels bracketing the term chain (§3); the contiguity property
    // (§8.1) is checked across the whole returned path, sentinels included.
    let dict = dict_with("東,1,1,10,名詞,一般\n京,1,1,10,名詞,一般\n", "2 2\n1 1 0\n");
    let path = tokenize(&dict, "東京").unwrap();

    assert_eq!(path.first().unwrap().kind, PathKind::Bos);
    assert_eq!(path.last().unwrap().kind, PathKind::Eos);

    let mut cursor = 0;
    for node in terms_only(&path) {
        assert_eq!(node.start_index, cursor);
        assert!(node.end_index > node.start_index);
        cursor = node.end_index;
    }
    assert_eq!(cursor, 2);
}

#[test]
fn tokenize_is_deterministic_across_repeated_calls() {
    let dict = dict_with(
        "東京,1,1,10,名詞,固有名詞\n東,1,1,60,名詞,一般\n京,1,1,60,名詞,一般\n",
        "2 2\n1 1 0\n",
    );
    let first = tokenize(&dict, "東京").unwrap();
    let second = tokenize(&dict, "東京").unwrap();
    assert_eq!(first, second);
}

fn term_surfaces(path: &[PathNode]) -> Vec<&str> {
    terms_only(path).map(|n| n.surface_form.as_str()).collect()
}

// S1: single term covering the whole input.
#[test]
fn single_term_covers_whole_input() {
    let dict = dict_with("猫,0,0,10,名詞,一般\n", "1 1\n");
    let path = tokenize(&dict, "猫").unwrap();
    let terms: Vec<&PathNode> = terms_only(&path).collect();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].surface_form, "猫");
    assert_eq!(terms[0].start_index, 0);
    assert_eq!(terms[0].end_index, 1);
}

// S2: two terms concatenate to cover the input, no alternative split.
#[test]
fn concatenation_of_two_terms() {
    let dict = dict_with("東京,0,0,10,名詞,固有名詞\n都,0,0,10,名詞,一般\n", "1 1\n");
    let path = tokenize(&dict, "東京都").unwrap();
    assert_eq!(term_surfaces(&path), vec!["東京", "都"]);
}

// S3: ambiguity resolved in favor of the longer single term when costs
// make the two-term split strictly more expensive.
#[test]
fn ambiguity_prefers_longer_term_when_cheaper() {
    let dict = dict_with(
        "東京,0,0,1,名詞,固有名詞\n東,0,0,100,名詞,一般\n京,0,0,100,名詞,一般\n",
        "1 1\n",
    );
    let path = tokenize(&dict, "東京").unwrap();
    assert_eq!(term_surfaces(&path), vec!["東京"]);
}

// S4: ambiguity resolved in favor of two shorter terms when their
// combined cost undercuts the single long term.
#[test]
fn ambiguity_prefers_two_shorter_terms_when_cheaper() {
    let dict = dict_with(
        "東京,0,0,1000,名詞,固有名詞\n東,0,0,1,名詞,一般\n京,0,0,1,名詞,一般\n",
        "1 1\n",
    );
    let path = tokenize(&dict, "東京").unwrap();
    assert_eq!(term_surfaces(&path), vec!["東", "京"]);
}

// S5: equal emission costs, transition cost in the connection matrix
// decides which split wins.
#[test]
fn transition_cost_breaks_emission_tie() {
    // context ids: 1 = "long noun", 2 = "short noun A", 3 = "short noun B".
    // The connection matrix is indexed matrix[left][right] (§4.A), and a
    // transition from predecessor u to successor v looks up
    // connection_cost(v.left_context_id, u.right_context_id) (§4.F), so the
    // 東(right=2) -> 京(left=3) edge is matrix[3][2].
    let dict = dict_with(
        "東京,1,1,10,名詞,固有名詞\n東,2,2,5,名詞,一般\n京,3,3,5,名詞,一般\n",
        "4 4\n3 2 -50\n",
    );
    let path = tokenize(&dict, "東京").unwrap();
    assert_eq!(term_surfaces(&path), vec!["東", "京"]);
}

// S6: no term sequence covers the input.
#[test]
fn no_path_when_input_is_fully_out_of_vocabulary() {
    let dict = dict_with("猫,0,0,10,名詞,一般\n", "1 1\n");
    let err = tokenize(&dict, "犬").unwrap_err();
    assert!(matches!(err, WakachiError::NoPath));
}
