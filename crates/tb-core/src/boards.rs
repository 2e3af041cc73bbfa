//! # Board Registry
//!
//! The set of boards is fixed for the lifetime of the process. Boards are
//! identified by their slug only; there is no per-board configuration.

/// Default board slugs, in display order.
pub const DEFAULT_BOARDS: &[&str] = &[
    "tech", "random", "gaming", "movies", "music", "science", "books",
    "sports", "art", "history", "travel", "food", "fitness", "programming",
    "photography", "fashion", "cars", "finance", "education", "politics",
    "space", "nature", "memes", "anime", "diy", "gardening", "pets",
    "comics", "languages", "health",
];

/// Filters board slugs to those starting with the given letter,
/// case-insensitive, preserving registry order.
///
/// Anything other than a single alphabetic character is treated as
/// "no filter" rather than an error.
pub fn filter_by_letter(boards: &[String], letter: Option<&str>) -> Vec<String> {
    let letter = letter.filter(|l| l.chars().count() == 1 && l.chars().all(char::is_alphabetic));
    match letter {
        Some(l) => {
            let l = l.to_lowercase();
            boards
                .iter()
                .filter(|b| b.to_lowercase().starts_with(&l))
                .cloned()
                .collect()
        }
        None => boards.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Vec<String> {
        DEFAULT_BOARDS.iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn filter_t_yields_boards_starting_with_t() {
        let filtered = filter_by_letter(&registry(), Some("t"));
        assert_eq!(filtered, vec!["tech", "travel"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert_eq!(
            filter_by_letter(&registry(), Some("T")),
            filter_by_letter(&registry(), Some("t")),
        );
    }

    #[test]
    fn non_letter_filters_are_ignored() {
        let all = registry();
        assert_eq!(filter_by_letter(&all, Some("ab")), all);
        assert_eq!(filter_by_letter(&all, Some("7")), all);
        assert_eq!(filter_by_letter(&all, Some("")), all);
        assert_eq!(filter_by_letter(&all, None), all);
    }
}
