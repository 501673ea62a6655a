//! Handlers for the `filetool` commands.

use std::fmt::Write as _;
use std::fs::{self, FileType, Metadata};
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};
use clic::Matches;

const EXIT_OK: i32 = 0;
const EXIT_FAILED: i32 = 1;

// ── info ────────────────────────────────────────────────────────────────────

/// `info`: type and size of a path, plus inode details with `--verbose`.
pub fn info(matches: &Matches<'_>) -> i32 {
    let Some(path) = matches.value_of("--path") else {
        return EXIT_FAILED;
    };
    let verbose = matches.is_present("--verbose");

    match describe(Path::new(path), verbose) {
        Ok(text) => {
            print!("{text}");
            EXIT_OK
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            EXIT_FAILED
        }
    }
}

fn describe(path: &Path, verbose: bool) -> io::Result<String> {
    let metadata = fs::metadata(path)?;

    let mut text = String::with_capacity(256);
    let _ = writeln!(text, "{}", path.display());
    let _ = writeln!(text, "  Type: {}", file_kind(metadata.file_type()));
    let _ = writeln!(text, "  Size: {} bytes", metadata.len());

    if verbose {
        write_unix_details(&mut text, &metadata);
        if let Ok(modified) = metadata.modified() {
            let local: DateTime<Local> = modified.into();
            let _ = writeln!(text, "  Modified: {}", local.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    Ok(text)
}

fn file_kind(file_type: FileType) -> &'static str {
    if file_type.is_dir() {
        "directory"
    } else if file_type.is_file() {
        "file"
    } else if file_type.is_symlink() {
        "symlink"
    } else {
        "other"
    }
}

#[cfg(unix)]
fn write_unix_details(text: &mut String, metadata: &Metadata) {
    use std::os::unix::fs::MetadataExt;

    let _ = writeln!(text, "  Mode: {:o}", metadata.mode() & 0o777);
    let _ = writeln!(text, "  Links: {}", metadata.nlink());
    let _ = writeln!(text, "  Inode: {}", metadata.ino());
}

#[cfg(not(unix))]
fn write_unix_details(_text: &mut String, _metadata: &Metadata) {}

// ── count ───────────────────────────────────────────────────────────────────

/// Line, word and byte totals of one file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub lines: u64,
    pub words: u64,
    pub chars: u64,
}

/// Which totals to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    lines: bool,
    words: bool,
    chars: bool,
}

impl Selection {
    /// Nothing selected means everything.
    fn or_all(self) -> Self {
        if self.lines || self.words || self.chars {
            self
        } else {
            Self {
                lines: true,
                words: true,
                chars: true,
            }
        }
    }
}

/// `count`: lines, words and characters of a file.
pub fn count(matches: &Matches<'_>) -> i32 {
    let Some(path) = matches.value_of("--path") else {
        return EXIT_FAILED;
    };
    let selection = Selection {
        lines: matches.is_present("--lines"),
        words: matches.is_present("--words"),
        chars: matches.is_present("--chars"),
    }
    .or_all();

    match fs::read(path) {
        Ok(bytes) => {
            print!("{}", render_counts(count_bytes(&bytes), selection));
            EXIT_OK
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            EXIT_FAILED
        }
    }
}

/// Whitespace as the C locale defines it.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Counts bytes, newlines, and words (a word starts after whitespace).
pub fn count_bytes(bytes: &[u8]) -> Counts {
    let mut counts = Counts::default();
    let mut prev_space = true;

    for &byte in bytes {
        counts.chars += 1;
        if byte == b'\n' {
            counts.lines += 1;
        }
        let space = is_space(byte);
        if !space && prev_space {
            counts.words += 1;
        }
        prev_space = space;
    }

    counts
}

fn render_counts(counts: Counts, selection: Selection) -> String {
    let mut text = String::new();
    if selection.lines {
        let _ = writeln!(text, "  Lines: {}", counts.lines);
    }
    if selection.words {
        let _ = writeln!(text, "  Words: {}", counts.words);
    }
    if selection.chars {
        let _ = writeln!(text, "  Chars: {}", counts.chars);
    }
    text
}
