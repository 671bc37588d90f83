//! Parser utilities.

use alloc::string::String;

/// Marker introducing a switch (e.g. /silent).
pub const SWITCH_PREFIX: char = '/';

/// Quote grouping whitespace-separated text into one token.
pub const QUOTE: char = '"';

/// Escape character, only meaningful in front of a quote.
pub const BACKSLASH: char = '\\';

/// Check if the character separates tokens outside of quotes.
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Fold a switch name to its canonical lower case.
pub fn fold_case(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}

/// Compare an already folded name with a name of any case.
pub fn eq_ignore_case(folded: &str, name: &str) -> bool {
    folded.chars().eq(name.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_fold_names() {
        let folded = fold_case("FooP");
        assert_that!(folded.as_str(), eq("foop"));

        let folded = fold_case("ÉTÉ");
        assert_that!(folded.as_str(), eq("été"));
    }

    #[test]
    fn it_should_compare_without_case() {
        assert_that!(eq_ignore_case("foop", "fOOp"), eq(true));
        assert_that!(eq_ignore_case("foop", "FOOP"), eq(true));
        assert_that!(eq_ignore_case("foop", "blah"), eq(false));
        assert_that!(eq_ignore_case("foo", "fooo"), eq(false));
    }
}
