use std::fmt::Display;

use utils_logging::utils_trace;

/// Counts occurrences of `sub_string` in `string`.
///
/// Both arguments are converted to their text form first, so numbers and other
/// `Display` values are compared by how they print. An empty pattern matches at
/// every character position plus once past the end, giving `chars + 1`.
///
/// With `allow_overlapping` the scan resumes one character after each match
/// start; otherwise it resumes after the whole match.
pub fn count_occurrences(
    string: impl Display,
    sub_string: impl Display,
    allow_overlapping: bool,
) -> usize {
    let haystack = string.to_string();
    let needle = sub_string.to_string();

    if needle.is_empty() {
        return haystack.chars().count() + 1;
    }

    let mut count = 0;
    let mut cursor = 0;
    while let Some(offset) = haystack[cursor..].find(&needle) {
        let pos = cursor + offset;
        count += 1;
        cursor = pos + step_len(&needle, allow_overlapping);
    }

    utils_trace!(
        "count_occurrences: {count} match(es) of {needle:?} (overlapping: {allow_overlapping})"
    );
    count
}

/// Byte distance to advance past a match start. Always lands on a char boundary.
fn step_len(needle: &str, allow_overlapping: bool) -> usize {
    if allow_overlapping {
        needle.chars().next().map_or(1, char::len_utf8)
    } else {
        needle.len()
    }
}

#[cfg(test)]
mod tests {
    use super::step_len;

    #[test]
    fn overlapping_step_is_first_char_width() {
        assert_eq!(step_len("aa", true), 1);
        assert_eq!(step_len("éa", true), 'é'.len_utf8());
    }

    #[test]
    fn plain_step_is_needle_width() {
        assert_eq!(step_len("abc", false), 3);
        assert_eq!(step_len("éé", false), 4);
    }
}
