use std::path::Path;

use encoding_rs::Encoding;
use log::{debug, trace};

use crate::error::{Result, WakachiError};

use super::connection::ConnectionMatrix;
use super::term_table::TermTable;
use super::types::{Features, PartOfSpeech, TermEntry};

/// Minimum number of CSV columns the core consumes (§6): surface form,
/// left/right context id, emission cost, POS major, POS subdivision.
const MIN_TERM_COLUMNS: usize = 6;

/// Read and decode a dictionary file with the given encoding, wrapping I/O
/// failures as [`WakachiError::LoadError`].
fn read_decoded(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| WakachiError::LoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let (decoded, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        debug!(
            "{}: decoding with {} produced replacement characters",
            path.display(),
            encoding.name()
        );
    }
    Ok(decoded.into_owned())
}

/// Parse one or more IPADIC-style term CSV files into a single [`TermTable`],
/// in the order the files are supplied (§6: "files processed in the order
/// supplied").
pub fn load_term_table(term_files: &[impl AsRef<Path>], encoding: &'static Encoding) -> Result<TermTable> {
    let mut table = TermTable::new();
    for file in term_files {
        let path = file.as_ref();
        let text = read_decoded(path, encoding)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| WakachiError::MalformedTerm {
                source: path.display().to_string(),
                line,
                reason: e.to_string(),
            })?;
            if record.len() < MIN_TERM_COLUMNS {
                return Err(WakachiError::MalformedTerm {
                    source: path.display().to_string(),
                    line,
                    reason: format!("expected at least {MIN_TERM_COLUMNS} columns, got {}", record.len()),
                });
            }

            let surface_form = record[0].to_string();
            if surface_form.is_empty() {
                return Err(WakachiError::MalformedTerm {
                    source: path.display().to_string(),
                    line,
                    reason: "surface form must not be empty".to_string(),
                });
            }
            let left_context_id = parse_field::<u16>(path, line, "left_context_id", &record[1])?;
            let right_context_id = parse_field::<u16>(path, line, "right_context_id", &record[2])?;
            let emission_cost = parse_field::<i32>(path, line, "emission_cost", &record[3])?;

            table.push(TermEntry {
                surface_form,
                left_context_id,
                right_context_id,
                emission_cost,
                features: Features {
                    part_of_speech: PartOfSpeech::from_major(&record[4]),
                    subdivision: record[5].to_string(),
                },
            });
        }
        trace!("{}: loaded {} entries so far", path.display(), table.len());
    }
    Ok(table)
}

fn parse_field<T: std::str::FromStr>(path: &Path, line: usize, field: &str, raw: &str) -> Result<T> {
    raw.trim().parse::<T>().map_err(|_| WakachiError::MalformedTerm {
        source: path.display().to_string(),
        line,
        reason: format!("column '{field}' is not a valid integer: '{raw}'"),
    })
}

/// Parse a whitespace-delimited connection matrix file (§6): first
/// non-empty line is `N M`, requiring `N == M`; remaining lines are
/// `left right cost` triples, with omitted cells defaulting to 0.
pub fn load_connection_matrix(path: &Path, encoding: &'static Encoding) -> Result<ConnectionMatrix> {
    let text = read_decoded(path, encoding)?;
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = lines.next().ok_or_else(|| WakachiError::MalformedMatrix {
        reason: "empty matrix file".to_string(),
    })?;
    let dims: Vec<&str> = header.split_whitespace().collect();
    if dims.len() != 2 {
        return Err(WakachiError::MalformedMatrix {
            reason: format!("expected 'N M' header, got '{header}'"),
        });
    }
    let n: usize = dims[0].parse().map_err(|_| WakachiError::MalformedMatrix {
        reason: format!("invalid matrix dimension '{}'", dims[0]),
    })?;
    let m: usize = dims[1].parse().map_err(|_| WakachiError::MalformedMatrix {
        reason: format!("invalid matrix dimension '{}'", dims[1]),
    })?;
    if n != m {
        return Err(WakachiError::MalformedMatrix {
            reason: format!("matrix must be square, got {n}x{m}"),
        });
    }

    let mut matrix = ConnectionMatrix::zeroed(n);
    for line in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(WakachiError::MalformedMatrix {
                reason: format!("expected 'left right cost' triple, got '{line}'"),
            });
        }
        let left: usize = parts[0].parse().map_err(|_| WakachiError::MalformedMatrix {
            reason: format!("invalid left id '{}'", parts[0]),
        })?;
        let right: usize = parts[1].parse().map_err(|_| WakachiError::MalformedMatrix {
            reason: format!("invalid right id '{}'", parts[1]),
        })?;
        let cost: i32 = parts[2].parse().map_err(|_| WakachiError::MalformedMatrix {
            reason: format!("invalid cost '{}'", parts[2]),
        })?;
        matrix.set(left, right, cost).map_err(|_| WakachiError::MalformedMatrix {
            reason: format!("index ({left}, {right}) out of range for {n}x{n} matrix"),
        })?;
    }

    debug!("{}: loaded {n}x{n} connection matrix", path.display());
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_utf8_term_csv() {
        let file = write_temp("猫,1,1,10,名詞,一般\nが,2,2,5,助詞,係助詞\n");
        let table = load_term_table(&[file.path()], encoding_rs::UTF_8).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0).unwrap().surface_form, "猫");
        assert_eq!(table.get(0).unwrap().features.part_of_speech, PartOfSpeech::Noun);
        assert_eq!(table.get(1).unwrap().features.part_of_speech, PartOfSpeech::Particle);
    }

    #[test]
    fn rejects_rows_with_too_few_columns() {
        let file = write_temp("猫,1,1,10\n");
        let err = load_term_table(&[file.path()], encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, WakachiError::MalformedTerm { .. }));
    }

    #[test]
    fn rejects_non_integer_cost() {
        let file = write_temp("猫,1,1,oops,名詞,一般\n");
        let err = load_term_table(&[file.path()], encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, WakachiError::MalformedTerm { .. }));
    }

    #[test]
    fn unmapped_pos_major_is_unknown() {
        let file = write_temp("hello,1,1,1,ENGLISH,*\n");
        let table = load_term_table(&[file.path()], encoding_rs::UTF_8).unwrap();
        assert_eq!(table.get(0).unwrap().features.part_of_speech, PartOfSpeech::Unknown);
    }

    #[test]
    fn concatenates_multiple_files_in_order() {
        let a = write_temp("猫,1,1,10,名詞,一般\n");
        let b = write_temp("犬,1,1,8,名詞,一般\n");
        let table = load_term_table(&[a.path(), b.path()], encoding_rs::UTF_8).unwrap();
        assert_eq!(table.get(0).unwrap().surface_form, "猫");
        assert_eq!(table.get(1).unwrap().surface_form, "犬");
    }

    #[test]
    fn loads_matrix_with_defaults() {
        let file = write_temp("3 3\n0 0 5\n1 2 -3\n");
        let matrix = load_connection_matrix(file.path(), encoding_rs::UTF_8).unwrap();
        assert_eq!(matrix.side(), 3);
        assert_eq!(matrix.cost(0, 0).unwrap(), 5);
        assert_eq!(matrix.cost(1, 2).unwrap(), -3);
        assert_eq!(matrix.cost(2, 2).unwrap(), 0);
    }

    #[test]
    fn rejects_non_square_matrix() {
        let file = write_temp("2 3\n");
        let err = load_connection_matrix(file.path(), encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, WakachiError::MalformedMatrix { .. }));
    }

    #[test]
    fn rejects_out_of_range_matrix_indices() {
        let file = write_temp("2 2\n5 0 1\n");
        let err = load_connection_matrix(file.path(), encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, WakachiError::MalformedMatrix { .. }));
    }

    #[test]
    fn rejects_empty_matrix_file() {
        let file = write_temp("");
        let err = load_connection_matrix(file.path(), encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, WakachiError::MalformedMatrix { .. }));
    }
}
