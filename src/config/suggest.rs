//! Typo suggestions for unknown config keys.

use super::schema::KNOWN_KEYS;

/// Largest edit distance that still counts as a likely typo.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Closest known key to `unknown`, if it is within two edits.
pub fn suggest_key(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for rule in KNOWN_KEYS {
        let dist = levenshtein(unknown, rule.name);
        best = match best {
            None => Some((rule.name, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((rule.name, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist > 0 && dist <= MAX_SUGGESTION_DISTANCE => {
            Some(candidate.to_string())
        }
        _ => None,
    }
}

/// Byte-wise Levenshtein distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
