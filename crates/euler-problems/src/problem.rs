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

//! # The Problem Trait
//!
//! Every solution in the collection sits behind the same small trait: an id,
//! a title, and a `solve` that produces one integer answer. The harness and
//! the CLI only ever see `Box<dyn Problem>` values, so a solution module is
//! free to use whatever search machinery it needs internally.

use std::path::{Path, PathBuf};

/// Every recorded answer in the collection fits in a signed 64-bit integer
/// (one of them is negative).
pub type Answer = i64;

/// Shared inputs available to every solution.
///
/// Currently this is just the location of the bundled data files; solutions
/// without file input ignore it.
#[derive(Debug, Clone)]
pub struct SolveContext {
    data_dir: PathBuf,
}

impl SolveContext {
    /// Creates a context rooted at an explicit data directory.
    #[inline]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Creates a context by discovering the bundled `data/` directory.
    pub fn discover() -> Result<Self, SolveError> {
        crate::data::discover_data_dir()
            .map(Self::new)
            .ok_or(SolveError::DataDirNotFound)
    }

    /// Returns the data directory this context resolves files against.
    #[inline]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolves a bundled data file by name.
    #[inline]
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

/// The error type shared by every solution.
#[derive(Debug)]
pub enum SolveError {
    /// An I/O error occurred while reading a bundled data file.
    Io(std::io::Error),
    /// No `data/` directory could be discovered.
    DataDirNotFound,
    /// A data file existed but its contents did not match the expected
    /// format.
    Malformed {
        /// The file that failed to parse.
        file: String,
        /// What went wrong.
        message: String,
    },
}

impl SolveError {
    /// Convenience constructor for format violations.
    #[inline]
    pub fn malformed(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            file: file.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataDirNotFound => {
                write!(f, "no data directory found walking up from the manifest")
            }
            Self::Malformed { file, message } => write!(f, "malformed {file}: {message}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SolveError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A single puzzle: one id, one title, one integer answer.
pub trait Problem {
    /// The Project Euler problem number.
    fn id(&self) -> u32;

    /// A short human-readable title.
    fn title(&self) -> &'static str;

    /// Computes the answer.
    fn solve(&self, ctx: &SolveContext) -> Result<Answer, SolveError>;
}

impl std::fmt::Debug for dyn Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Problem({:03}, {})", self.id(), self.title())
    }
}

impl std::fmt::Display for dyn Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03} {}", self.id(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_resolves_files_against_its_directory() {
        let ctx = SolveContext::new("/tmp/data");
        assert_eq!(ctx.data_file("names.txt"), PathBuf::from("/tmp/data/names.txt"));
    }

    #[test]
    fn test_solve_error_display() {
        let err = SolveError::malformed("names.txt", "unquoted token");
        assert_eq!(err.to_string(), "malformed names.txt: unquoted token");
    }

    #[test]
    fn test_io_error_conversion_preserves_source() {
        use std::error::Error;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SolveError::from(io);
        assert!(err.source().is_some());
    }
}
