use std::mem;

/// Returns the Levenshtein distance between `a` and `b`: the smallest number of single char
/// insertions, deletions and substitutions that turn one into the other.
///
/// Only two rows of the distance matrix are kept at a time.
///
/// # Time Complexity
/// `O(n * m)` time and `O(m)` space, where `n` and `m` are the char counts of `a` and `b`.
///
/// # Examples
/// ```
/// # use anenome::strings::levenshtein;
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Box<[char]> = b.chars().collect();

    let mut prev: Box<[usize]> = (0..=b.len()).collect();
    let mut curr = prev.clone();

    for (i, a_char) in a.chars().enumerate() {
        curr[0] = i + 1;

        for (j, b_char) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(a_char != *b_char);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;

            curr[j + 1] = substitution.min(deletion).min(insertion);
        }

        mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
