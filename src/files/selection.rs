//! Parsing of the "which files?" answer.

/// Keyword that selects every candidate.
pub const SELECT_ALL: &str = "all";

/// Resolves a selection string against `candidates`.
///
/// `selection` is either exactly `all` or a comma-separated list of 1-based positions.
/// Within each comma-separated token only ASCII digits are kept, so `" 2 "` and `"#2"`
/// both mean position 2. Tokens without digits, position 0 and positions past the end
/// are skipped. Order follows the input and repeated positions repeat the entry.
///
/// Never fails: malformed input simply yields fewer (or no) entries.
pub fn parse_selection<T: Clone>(selection: &str, candidates: &[T]) -> Vec<T> {
    if selection == SELECT_ALL {
        return candidates.to_vec();
    }

    selection
        .split(',')
        .filter_map(|token| {
            let digits: String = token.chars().filter(char::is_ascii_digit).collect();
            if digits.is_empty() {
                return None;
            }
            // Overflowing numbers are out of range by definition.
            let position: usize = digits.parse().ok()?;
            position
                .checked_sub(1)
                .and_then(|index| candidates.get(index))
                .cloned()
        })
        .collect()
}
