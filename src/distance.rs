//! Levenshtein distance.

/// `distance` computes the Levenshtein distance between `a` and `b`.
///
/// Insertions, deletions and substitutions of a single `char` each cost one.
/// Runs in `O(len(a) * len(b))` time and keeps one row of the table.
///
/// # Example
///
/// ```
/// use spell_context::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("teh", "the"), 2);
/// assert_eq!(distance("", "abc"), 3);
/// ```
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short: Vec<char> = short.chars().collect();
    if short.is_empty() {
        return long.chars().count();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, c1) in long.chars().enumerate() {
        // row[j] of the previous iteration, before it was overwritten
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &c2) in short.iter().enumerate() {
            let substitution = diagonal + usize::from(c1 != c2);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[short.len()]
}
