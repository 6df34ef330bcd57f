// Copyright 2014-2016 Johannes Köster, Taylor Cramer.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The Burrows-Wheeler Transform, built via an internally constructed suffix array.
//!
//! Any correct construction algorithm satisfies the BD-BWT index's contract; this module picks
//! the classic prefix-doubling suffix array algorithm (`O(n log n)` comparisons) because it is
//! easy to verify and needs no external C dependency, unlike the original C++ implementation's
//! approach of linking a suffix-array library for this step.

/// Computes the Burrows-Wheeler Transform of `s`, which must end with its sentinel byte and not
/// contain that sentinel anywhere else.
///
/// `b[i]` is the byte immediately preceding the start of the `i`-th lexicographically smallest
/// rotation of `s` (the byte at the end of the text wraps to its last position).
pub fn bwt(s: &[u8]) -> Vec<u8> {
    let sa = suffix_array(s);
    sa.iter()
        .map(|&i| {
            if i == 0 {
                s[s.len() - 1]
            } else {
                s[i - 1]
            }
        })
        .collect()
}

/// Builds the suffix array of `s` by prefix doubling: start by ranking suffixes on their first
/// byte, then repeatedly double the compared prefix length by ranking pairs of previous ranks,
/// until ranks are already a total order.
fn suffix_array(s: &[u8]) -> Vec<usize> {
    let n = s.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = s.iter().map(|&b| b as i64).collect();
    let mut tmp = vec![0i64; n];

    let mut k = 1;
    while k < n {
        let rank_at = |i: usize| -> i64 {
            if i + k < n {
                rank[i + k]
            } else {
                -1
            }
        };
        sa.sort_unstable_by(|&a, &b| (rank[a], rank_at(a)).cmp(&(rank[b], rank_at(b))));

        tmp[sa[0]] = 0;
        for i in 1..n {
            let prev = (rank[sa[i - 1]], rank_at(sa[i - 1]));
            let cur = (rank[sa[i]], rank_at(sa[i]));
            tmp[sa[i]] = tmp[sa[i - 1]] + if cur > prev { 1 } else { 0 };
        }
        rank.copy_from_slice(&tmp);

        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        k *= 2;
    }

    sa
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_bwt(s: &[u8]) -> Vec<u8> {
        let n = s.len();
        let mut rotations: Vec<Vec<u8>> = (0..n)
            .map(|i| {
                let mut r = s[i..].to_vec();
                r.extend_from_slice(&s[..i]);
                r
            })
            .collect();
        rotations.sort();
        rotations.iter().map(|r| r[n - 1]).collect()
    }

    #[test]
    fn matches_naive_rotation_sort() {
        for text in ["a\x01", "ab\x01", "banana\x01", "mississippi\x01", "aaaa\x01"] {
            assert_eq!(bwt(text.as_bytes()), naive_bwt(text.as_bytes()), "text={text:?}");
        }
    }

    #[test]
    fn suffix_array_is_a_permutation_in_sorted_suffix_order() {
        let s = b"mississippi\x01";
        let sa = suffix_array(s);
        let mut seen = vec![false; s.len()];
        for &i in &sa {
            assert!(!seen[i]);
            seen[i] = true;
        }
        for w in sa.windows(2) {
            assert!(s[w[0]..] <= s[w[1]..]);
        }
    }
}
