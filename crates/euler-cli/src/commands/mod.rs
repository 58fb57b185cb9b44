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

//! Subcommand implementations and the shared problem selection helper.

mod list;
mod run;
mod verify;

pub use list::ListCommand;
pub use run::RunCommand;
pub use verify::VerifyCommand;

use anyhow::anyhow;
use euler_problems::{catalogue, Problem};

/// Resolves requested problem ids into the boxed problems, preserving the
/// requested order. An empty request selects the whole collection.
pub fn select(ids: &[u32]) -> anyhow::Result<Vec<Box<dyn Problem>>> {
    if ids.is_empty() {
        return Ok(catalogue());
    }
    ids.iter()
        .map(|&id| {
            catalogue()
                .into_iter()
                .find(|p| p.id() == id)
                .ok_or_else(|| anyhow!("no problem with id {id} in the collection"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_the_whole_collection() {
        assert_eq!(select(&[]).unwrap().len(), catalogue().len());
    }

    #[test]
    fn test_selection_preserves_request_order() {
        let ids: Vec<u32> = select(&[9, 1, 4]).unwrap().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![9, 1, 4]);
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        assert!(select(&[53]).is_err()); // 53 is not in the collection
    }
}
