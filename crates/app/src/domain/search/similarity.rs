//! Query/title similarity.
//!
//! A query contained verbatim in a title scores at least `0.9`, topped up by
//! how much of the title the query covers. Anything else falls back to the
//! Ratcliff/Obershelp ratio `2 * M / T`, where `M` is the number of characters
//! in matching blocks found by recursively taking the longest common substring
//! and `T` the combined length of both strings.

use rustc_hash::FxHashMap;

/// Score awarded to any title containing the query.
const CONTAINED_BASE_SCORE: f64 = 0.9;

/// Extra score spread over the share of the title the query covers.
const CONTAINED_COVERAGE_WEIGHT: f64 = 0.1;

/// Sequences at least this long drop very frequent characters from the match
/// index.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Case-insensitive relevance of `title` to `query`, in `[0, 1]`.
#[must_use]
pub fn score(query: &str, title: &str) -> f64 {
    let query = query.to_lowercase();
    let title = title.to_lowercase();

    let query_chars: Vec<char> = query.chars().collect();
    let title_chars: Vec<char> = title.chars().collect();

    if !title_chars.is_empty() && title.contains(query.as_str()) {
        return CONTAINED_BASE_SCORE
            + (ratio_of(query_chars.len(), title_chars.len()) * CONTAINED_COVERAGE_WEIGHT);
    }

    ratio(&query_chars, &title_chars)
}

/// Ratcliff/Obershelp similarity of two character sequences.
#[must_use]
pub fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();

    if total == 0 {
        return 1.0;
    }

    ratio_of(2 * matching_characters(a, b), total)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "string lengths are far below 2^52"
)]
fn ratio_of(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}

/// Total size of the matching blocks between `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let index = BIndex::new(b);

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let Block { a_start, b_start, size } = index.longest_match(a, b, alo, ahi, blo, bhi);

        if size == 0 {
            continue;
        }

        matched += size;

        if alo < a_start && blo < b_start {
            pending.push((alo, a_start, blo, b_start));
        }

        if a_start + size < ahi && b_start + size < bhi {
            pending.push((a_start + size, ahi, b_start + size, bhi));
        }
    }

    matched
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

/// Positions of each character of `b`, minus characters that are too common
/// in long sequences to be useful anchors.
#[derive(Debug)]
struct BIndex {
    positions: FxHashMap<char, Vec<usize>>,
}

impl BIndex {
    fn new(b: &[char]) -> Self {
        let mut positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();

        for (j, ch) in b.iter().enumerate() {
            positions.entry(*ch).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;

            positions.retain(|_, seen| seen.len() <= limit);
        }

        Self { positions }
    }

    /// Longest block with `a[alo..ahi]` and `b[blo..bhi]` in common.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    fn longest_match(
        &self,
        a: &[char],
        b: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> Block {
        let mut best = Block {
            a_start: alo,
            b_start: blo,
            size: 0,
        };

        let mut run_lengths: FxHashMap<usize, usize> = FxHashMap::default();

        for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next_lengths: FxHashMap<usize, usize> = FxHashMap::default();

            if let Some(positions) = self.positions.get(ch) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }

                    if j >= bhi {
                        break;
                    }

                    let length = j
                        .checked_sub(1)
                        .and_then(|previous| run_lengths.get(&previous))
                        .copied()
                        .unwrap_or(0)
                        + 1;

                    next_lengths.insert(j, length);

                    if length > best.size {
                        best = Block {
                            a_start: i + 1 - length,
                            b_start: j + 1 - length,
                            size: length,
                        };
                    }
                }
            }

            run_lengths = next_lengths;
        }

        // Characters dropped from the index can still extend a block at its edges.
        while best.a_start > alo
            && best.b_start > blo
            && a.get(best.a_start - 1) == b.get(best.b_start - 1)
        {
            best.a_start -= 1;
            best.b_start -= 1;
            best.size += 1;
        }

        while best.a_start + best.size < ahi
            && best.b_start + best.size < bhi
            && a.get(best.a_start + best.size) == b.get(best.b_start + best.size)
        {
            best.size += 1;
        }

        best
    }
}
