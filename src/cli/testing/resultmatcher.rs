use crate::cli::Output;

/// Checks a command's [`anyhow::Result<Output>`] against an expectation.
/// Outputs are compared by what they print.
pub enum ResultMatcher<'a> {
    /// Asserts the result is `Ok` and prints exactly the given text.
    OkExact(&'a str),

    /// Asserts the result is `Ok` and prints text matching the given glob
    /// pattern. Matching is case-insensitive.
    OkGlob(&'a str),

    /// Asserts the result is `Err` and that the error's `to_string()` matches
    /// the given glob pattern. Matching is case-insensitive.
    ErrGlob(&'a str),
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<Output>) {
        let result = result.map(|output| output.to_string());
        match self {
            ResultMatcher::OkExact(want) => {
                let Ok(got) = &result else {
                    panic!("\n\twant: Ok({:?})\n\tgot: {:?}\n", want, result);
                };
                if got != want {
                    text_diff::print_diff(want, got, "\n");
                    panic!("diff between want (red) and got (green), see above");
                }
            }
            ResultMatcher::OkGlob(pattern) => {
                let pattern_obj = wildmatch::WildMatch::new(pattern.to_lowercase().as_str());
                let matches = matches!(
                    result,
                    Ok(ref got) if pattern_obj.matches(got.to_lowercase().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
            ResultMatcher::ErrGlob(pattern) => {
                let pattern_obj = wildmatch::WildMatch::new(pattern.to_lowercase().as_str());
                let matches = matches!(
                    result,
                    Err(ref got_err) if pattern_obj.matches(got_err.to_string().to_lowercase().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
        }
    }
}
