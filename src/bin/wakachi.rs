//! Command-line front end: load a dictionary directory and tokenize text.
//!
//! Grounded in the pack's common CLI shape (clap derive + `anyhow` context
//! at the binary boundary, `env_logger` wired to `RUST_LOG`), matching
//! `examples/mocobeta-runome/src/dict_builder/build.rs`'s use of `glob` for
//! directory discovery and `anyhow::Context` for I/O error messages.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wakachi", about = "Word-lattice Viterbi tokenizer for IPADIC-style dictionaries")]
struct Args {
    /// Directory containing one or more `*.csv` term files and a
    /// `matrix.def` connection matrix.
    dict_dir: PathBuf,

    /// Text to tokenize. Reads from stdin if omitted.
    text: Option<String>,

    /// Dictionary encoding: `eucjp` (IPADIC default) or `utf8`.
    #[arg(long, default_value = "eucjp")]
    encoding: String,
}

fn resolve_encoding(name: &str) -> Result<&'static encoding_rs::Encoding> {
    match name {
        "eucjp" | "euc-jp" => Ok(encoding_rs::EUC_JP),
        "utf8" | "utf-8" => Ok(encoding_rs::UTF_8),
        other => bail!("unsupported encoding '{other}', expected 'eucjp' or 'utf8'"),
    }
}

/// Discover `*.csv` term files in `dir`, sorted by filename for
/// deterministic term-id assignment (§6A), and the sibling `matrix.def`.
fn discover_dictionary_files(dir: &std::path::Path) -> Result<(Vec<PathBuf>, PathBuf)> {
    let pattern = dir.join("*.csv");
    let mut term_files: Vec<PathBuf> = glob::glob(
        pattern
            .to_str()
            .with_context(|| format!("dictionary directory path is not valid UTF-8: {}", dir.display()))?,
    )?
    .collect::<std::result::Result<Vec<_>, _>>()?;
    term_files.sort();

    if term_files.is_empty() {
        bail!("no *.csv term files found in {}", dir.display());
    }

    let matrix_file = dir.join("matrix.def");
    if !matrix_file.is_file() {
        bail!("expected connection matrix at {}", matrix_file.display());
    }

    Ok((term_files, matrix_file))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let encoding = resolve_encoding(&args.encoding)?;
    let (term_files, matrix_file) = discover_dictionary_files(&args.dict_dir)?;

    log::info!(
        "loading dictionary from {} ({} term file(s))",
        args.dict_dir.display(),
        term_files.len()
    );
    let dictionary = wakachi::load_dictionary(&term_files, &matrix_file, encoding)
        .with_context(|| format!("failed to load dictionary from {}", args.dict_dir.display()))?;

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            buf.trim_end_matches('\n').to_string()
        }
    };

    let path = wakachi::tokenize(&dictionary, &text).context("tokenize failed")?;
    for node in wakachi::terms_only(&path) {
        let part_of_speech = node.part_of_speech.context("term node missing part-of-speech")?;
        let subdivision = node.subdivision.as_deref().context("term node missing subdivision")?;
        println!(
            "{}\t{},{}\t[{}..{})",
            node.surface_form, part_of_speech, subdivision, node.start_index, node.end_index
        );
    }

    Ok(())
}
