//! cssdoc — generate a function reference from documented CSS `@function`s.
//!
//! Each `@function --name(...) {` directly preceded by a `/** ... */` block
//! becomes one entry. Supports two modes:
//!
//! - **stdin mode**: `cssdoc < index.css > docs/functions.md`
//! - **file mode**: `cssdoc index.css -o docs/`

mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Default file name when `--output` names a directory.
const OUTPUT_STEM: &str = "functions";

#[derive(Parser)]
#[command(
    name = "cssdoc",
    about = "Generate a function reference from documented CSS @function definitions"
)]
struct Cli {
    /// Stylesheet to document. If omitted, reads from stdin.
    input: Option<PathBuf>,

    /// Output file, or directory to receive functions.<ext>.
    /// If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Path used for the source links in headings (<path>#L<line>)
    #[arg(short = 'l', long, default_value = "../index.css")]
    source_link: String,

    /// Also match a @param name to a declared parameter when they differ
    /// only by the leading -- (e.g. `--n` finds a declared `n`)
    #[arg(long)]
    ignore_param_sigil: bool,

    /// Suppress progress messages
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = render::RenderOptions {
        source_link: cli.source_link.clone(),
        param_match: if cli.ignore_param_sigil {
            render::ParamMatch::IgnoreSigil
        } else {
            render::ParamMatch::Exact
        },
    };
    let renderer = render::create_renderer(&cli.format, options)?;

    let (label, source) = read_source(cli.input.as_deref())?;

    progress(&cli, &format!("Parsing {}...", label));
    let doc = parser::parse(&source);
    progress(&cli, &format!("Found {} functions", doc.functions.len()));
    if doc.functions.is_empty() {
        eprintln!("warning: no documented functions found in {}", label);
    }

    // Render fully before touching the output
    let output = renderer.render(&doc)?;

    match cli.output {
        Some(ref path) => {
            let out_path = resolve_output_path(path, renderer.file_extension());
            write_output(&out_path, &output)?;
            progress(&cli, &format!("Written to {}", out_path.display()));
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Read the whole stylesheet from a file, or stdin when no path is given.
fn read_source(input: Option<&Path>) -> Result<(String, String)> {
    match input {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), content))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(("stdin".to_string(), content))
        }
    }
}

/// A directory (existing, or spelled with a trailing separator) receives
/// `functions.<ext>`; anything else is used as the file path.
fn resolve_output_path(path: &Path, ext: &str) -> PathBuf {
    let spelled_as_dir = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(['/', std::path::MAIN_SEPARATOR]);
    if spelled_as_dir || path.is_dir() {
        path.join(format!("{}.{}", OUTPUT_STEM, ext))
    } else {
        path.to_path_buf()
    }
}

/// Write the document, creating parent directories as needed.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Progress goes to stderr so stdout stays clean for the document.
fn progress(cli: &Cli, message: &str) {
    if !cli.quiet {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn output_path_for_existing_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_output_path(dir.path(), "md"),
            dir.path().join("functions.md")
        );
    }

    #[test]
    fn output_path_with_trailing_separator() {
        assert_eq!(
            resolve_output_path(Path::new("docs/"), "json"),
            Path::new("docs").join("functions.json")
        );
    }

    #[test]
    fn output_path_for_file() {
        assert_eq!(
            resolve_output_path(Path::new("docs/reference.md"), "md"),
            PathBuf::from("docs/reference.md")
        );
    }

    #[test]
    fn write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/functions.md");
        write_output(&path, "# x\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "# x\n");
    }

    #[test]
    fn write_under_regular_file_fails() {
        let parent = tempfile::NamedTempFile::new().unwrap();
        let err = write_output(&parent.path().join("functions.md"), "# x\n").unwrap_err();
        assert!(err.to_string().contains("failed to create output directory"));
    }

    #[test]
    fn read_missing_file_fails() {
        let err = read_source(Some(Path::new("/nonexistent/index.css"))).unwrap_err();
        assert!(err.to_string().contains("failed to read /nonexistent/index.css"));
    }
}
