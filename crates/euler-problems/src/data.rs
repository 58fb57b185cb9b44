// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Bundled Data Files
//!
//! Discovery and parsing of the small data files some puzzles read. The
//! directory is found by walking up from this crate's manifest directory
//! until a `data/` folder appears, which works from any crate in the
//! workspace as well as from test and bench binaries.
//!
//! All loaders validate their input and return a `SolveError` on anything
//! malformed; nothing here panics on bad data.

use crate::problem::SolveError;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Walks up from the manifest directory looking for `data/`.
pub fn discover_data_dir() -> Option<PathBuf> {
    let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
    while let Some(p) = cur {
        let cand = p.join("data");
        if cand.is_dir() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

/// Reads a file of comma-separated, double-quoted upper-case words
/// (`"MARY","PATRICIA",...`) into a vector.
///
/// The whole file must consist of such tokens; anything else is a
/// [`SolveError::Malformed`].
pub fn read_quoted_list(path: &Path) -> Result<Vec<String>, SolveError> {
    let content = std::fs::read_to_string(path)?;
    let file = path.display().to_string();
    let shape = Regex::new(r#"^\s*"[A-Z]+"(?:\s*,\s*"[A-Z]+")*\s*$"#)
        .expect("quoted-list shape pattern is valid");
    if !shape.is_match(&content) {
        return Err(SolveError::malformed(
            file,
            "expected comma-separated quoted upper-case words",
        ));
    }
    let token = Regex::new(r#""([A-Z]+)""#).expect("quoted-list token pattern is valid");
    Ok(token
        .captures_iter(&content)
        .map(|c| c[1].to_string())
        .collect())
}

/// Reads a file of comma-separated byte values (`36,22,80,...`).
///
/// Values outside `0..=255` and non-numeric tokens are
/// [`SolveError::Malformed`].
pub fn read_byte_list(path: &Path) -> Result<Vec<u8>, SolveError> {
    let content = std::fs::read_to_string(path)?;
    let file = path.display().to_string();
    content
        .trim()
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<u8>()
                .map_err(|_| SolveError::malformed(&file, format!("bad byte value '{token}'")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("euler-data-test-{name}"));
        let mut f = std::fs::File::create(&path).expect("temp file");
        f.write_all(content.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn test_discovers_the_workspace_data_dir() {
        let dir = discover_data_dir().expect("data dir should exist in the workspace");
        assert!(dir.join("answers.json").is_file());
    }

    #[test]
    fn test_quoted_list_parses_words() {
        let path = temp_file("quoted-ok.txt", r#""COLIN","MARY","SKY""#);
        let words = read_quoted_list(&path).unwrap();
        assert_eq!(words, vec!["COLIN", "MARY", "SKY"]);
    }

    #[test]
    fn test_quoted_list_rejects_unquoted_tokens() {
        let path = temp_file("quoted-bad.txt", r#""COLIN",MARY"#);
        assert!(matches!(
            read_quoted_list(&path),
            Err(SolveError::Malformed { .. })
        ));
    }

    #[test]
    fn test_quoted_list_rejects_lower_case() {
        let path = temp_file("quoted-lower.txt", r#""colin""#);
        assert!(read_quoted_list(&path).is_err());
    }

    #[test]
    fn test_byte_list_parses_values() {
        let path = temp_file("bytes-ok.txt", "36, 22,80\n");
        assert_eq!(read_byte_list(&path).unwrap(), vec![36, 22, 80]);
    }

    #[test]
    fn test_byte_list_rejects_out_of_range_values() {
        let path = temp_file("bytes-range.txt", "12,999");
        assert!(matches!(
            read_byte_list(&path),
            Err(SolveError::Malformed { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let missing = Path::new("/nonexistent/euler/names.txt");
        assert!(matches!(
            read_quoted_list(missing),
            Err(SolveError::Io(_))
        ));
    }
}
