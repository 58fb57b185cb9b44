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

//! # Answer Key
//!
//! The recorded expected answers, loaded from `answers.json`. Keys follow
//! the `pNNN` naming of the solution modules; entries may be missing, in
//! which case the harness reports the problem as unverified rather than
//! failing.

use euler_problems::Answer;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::Path;

/// The error type for answer-key loading.
#[derive(Debug)]
pub enum AnswerKeyError {
    /// An I/O error occurred while reading the key file.
    Io(std::io::Error),
    /// The file is not a JSON object of integers.
    Json(serde_json::Error),
    /// An entry key does not follow the `pNNN` scheme.
    BadEntry(String),
}

impl std::fmt::Display for AnswerKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::BadEntry(key) => write!(f, "answer key entry '{key}' is not of the form pNNN"),
        }
    }
}

impl std::error::Error for AnswerKeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::BadEntry(_) => None,
        }
    }
}

impl From<std::io::Error> for AnswerKeyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for AnswerKeyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Recorded expected answers by problem id.
#[derive(Debug, Clone, Default)]
pub struct AnswerKey {
    answers: FxHashMap<u32, Answer>,
}

impl AnswerKey {
    /// Loads the key from a JSON object mapping `"pNNN"` to integers.
    pub fn load(path: &Path) -> Result<Self, AnswerKeyError> {
        let content = std::fs::read_to_string(path)?;
        let raw: BTreeMap<String, Answer> = serde_json::from_str(&content)?;
        let mut answers = FxHashMap::default();
        for (key, answer) in raw {
            let id = key
                .strip_prefix('p')
                .and_then(|digits| digits.parse::<u32>().ok())
                .ok_or_else(|| AnswerKeyError::BadEntry(key.clone()))?;
            answers.insert(id, answer);
        }
        Ok(Self { answers })
    }

    /// Builds a key from explicit entries (mainly for tests).
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, Answer)>) -> Self {
        Self {
            answers: entries.into_iter().collect(),
        }
    }

    /// Returns the recorded answer for a problem, if any.
    #[inline]
    pub fn expected(&self, id: u32) -> Option<Answer> {
        self.answers.get(&id).copied()
    }

    /// Returns the number of recorded answers.
    #[inline]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true when the key holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_key(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("euler-key-test-{name}"));
        let mut f = std::fs::File::create(&path).expect("temp file");
        f.write_all(content.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn test_loads_well_formed_key() {
        let path = temp_key("ok.json", r#"{"p001": 233168, "p027": -59231}"#);
        let key = AnswerKey::load(&path).unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(key.expected(1), Some(233_168));
        assert_eq!(key.expected(27), Some(-59_231));
        assert_eq!(key.expected(2), None);
    }

    #[test]
    fn test_rejects_badly_named_entries() {
        let path = temp_key("bad-name.json", r#"{"problem1": 233168}"#);
        assert!(matches!(
            AnswerKey::load(&path),
            Err(AnswerKeyError::BadEntry(_))
        ));
    }

    #[test]
    fn test_rejects_non_integer_values() {
        let path = temp_key("bad-value.json", r#"{"p001": "nope"}"#);
        assert!(matches!(AnswerKey::load(&path), Err(AnswerKeyError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let missing = Path::new("/nonexistent/answers.json");
        assert!(matches!(AnswerKey::load(missing), Err(AnswerKeyError::Io(_))));
    }

    #[test]
    fn test_from_entries_round_trip() {
        let key = AnswerKey::from_entries([(7, 104_743)]);
        assert!(!key.is_empty());
        assert_eq!(key.expected(7), Some(104_743));
    }
}
