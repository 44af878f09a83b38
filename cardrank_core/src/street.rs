//! Street naming, a presentational helper for dealing sequences.

/// A named street with the number of cards dealt on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Street {
    /// The street name: `"Ante"`, an ordinal like `"3rd"`, or `"River"`.
    pub name: String,
    /// Cards dealt on this street.
    pub cards: usize,
}

/// Builds named streets from per-street card counts.
///
/// The first street is `Ante` and the last is `River`; every street in
/// between is named by the ordinal of the cumulative card count.
///
/// # Examples
///
/// ```rust
/// use cardrank_core::numbered_streets;
///
/// let streets = numbered_streets(&[0, 1, 1, 1]);
/// let names: Vec<&str> = streets.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["Ante", "1st", "2nd", "River"]);
/// ```
pub fn numbered_streets(counts: &[usize]) -> Vec<Street> {
    let mut streets = Vec::with_capacity(counts.len());
    let mut dealt = 0usize;
    for (i, &cards) in counts.iter().enumerate() {
        dealt += cards;
        let name = if i == 0 {
            "Ante".to_string()
        } else if i == counts.len() - 1 {
            "River".to_string()
        } else {
            ordinal(dealt)
        };
        streets.push(Street { name, cards });
    }
    streets
}

/// English ordinal: 1st, 2nd, 3rd, 4th, ... 11th, 12th, 13th, ... 101st.
fn ordinal(n: usize) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_streets() {
        let counts = [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 90, 1, 1];
        let streets = numbered_streets(&counts);
        let names: Vec<&str> = streets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Ante", "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th",
                "11th", "101st", "102nd", "River"
            ]
        );
        assert_eq!(streets[12].cards, 90);
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(102), "102nd");
    }

    #[test]
    fn test_short_sequences() {
        let streets = numbered_streets(&[0]);
        assert_eq!(streets.len(), 1);
        assert_eq!(streets[0].name, "Ante");

        let streets = numbered_streets(&[0, 5]);
        let names: Vec<&str> = streets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ante", "River"]);

        assert!(numbered_streets(&[]).is_empty());
    }
}
