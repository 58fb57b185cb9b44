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

//! Runs the whole collection against the bundled answer key.

use euler_harness::Runner;
use euler_problems::catalogue;

#[test]
fn test_every_problem_matches_the_answer_key() {
    let runner = Runner::builder()
        .bundled_answer_key()
        .build()
        .expect("workspace data dir and key");
    let key = runner.answer_key().expect("key was loaded");
    assert_eq!(key.len(), 54, "the key covers the whole collection");

    let report = runner.run(&catalogue());
    for offender in report.offenders() {
        eprintln!("{offender}");
    }
    assert!(report.all_acceptable(), "{}", report.statistics());
    assert_eq!(report.statistics().verified, 54);
    assert_eq!(report.statistics().failed, 0);
}
