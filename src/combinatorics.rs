//! Integer combinatorics used to compress pieces of cube state into small ordinals.
//!
//! Permutations are ranked with the factorial number system (the Lehmer code), and choices of `k`
//! marked slots out of `n` are ranked lexicographically among the ascending `k`-subsets.

/// `FACTORIALS[n] = n!` for every `n` a permutation coordinate can use.
const FACTORIALS: [usize; 13] = [
    1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800, 39916800, 479001600,
];

/// The largest permutation length `permutation_to_ordinal` accepts.
pub const MAX_PERMUTATION_LEN: usize = FACTORIALS.len() - 1;

/// `n!`, for `n <= MAX_PERMUTATION_LEN`.
pub fn factorial(n: usize) -> usize {
    FACTORIALS[n]
}

/// The binomial coefficient `n` choose `k`, which is 0 when `k > n`.
///
/// ```rust
/// use cube_solver::combinatorics::binomial;
///
/// assert_eq!(binomial(12, 4), 495);
/// assert_eq!(binomial(3, 4), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    // n choose k == n choose n-k, fewer iterations this way
    let k = k.min(n - k);
    // acc is (n choose i) at the start of step i, so the division is always exact
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Rank a permutation of `perm.len()` distinct symbols in `[0, perm.len()!)`. Only the relative
/// order of the symbols matters, so e.g. `[8, 9, 10, 11]` and `[0, 1, 2, 3]` both rank 0.
///
/// The rank is the sum over each position `i` of the number of later symbols smaller than
/// `perm[i]`, times `(len - i - 1)!`.
pub fn permutation_to_ordinal(perm: &[u8]) -> usize {
    debug_assert!(perm.len() <= MAX_PERMUTATION_LEN);
    perm.iter().enumerate().fold(0, |acc, (i, &p)| {
        let smaller_later = perm[i + 1..].iter().filter(|&&q| q < p).count();
        acc + smaller_later * FACTORIALS[perm.len() - i - 1]
    })
}

/// Fill `perm` with the permutation of the symbols `base..base + perm.len()` whose rank is
/// `ordinal`. This is the inverse of [`permutation_to_ordinal`].
pub fn ordinal_to_permutation(mut ordinal: usize, perm: &mut [u8], base: u8) {
    let n = perm.len();
    debug_assert!(n <= MAX_PERMUTATION_LEN);
    debug_assert!(ordinal < FACTORIALS[n]);

    let mut symbols: [u8; MAX_PERMUTATION_LEN] = std::array::from_fn(|i| base + i as u8);
    let mut len = n;

    for (i, slot) in perm.iter_mut().enumerate() {
        let f = FACTORIALS[n - i - 1];
        let digit = ordinal / f;
        ordinal %= f;

        *slot = symbols[digit];
        symbols.copy_within(digit + 1..len, digit);
        len -= 1;
    }
}

/// Whether a permutation is odd, i.e. has an odd number of inversions.
pub fn permutation_parity(perm: &[u8]) -> bool {
    let inversions: usize = perm
        .iter()
        .enumerate()
        .map(|(i, &p)| perm[i + 1..].iter().filter(|&&q| q < p).count())
        .sum();
    inversions % 2 == 1
}

/// Rank a choice of `positions.len()` slots out of `n` in `[0, binomial(n, positions.len()))`.
/// `positions` must be strictly ascending. The rank is the index of the choice when all ascending
/// choices are listed in lexicographic order, so `[0, 1, 2, 3]` is 0 and `[8, 9, 10, 11]` is 494
/// for `n = 12`.
pub fn combination_ordinal(positions: &[usize], n: usize) -> usize {
    debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    debug_assert!(positions.last().map_or(true, |&p| p < n));

    let mut remaining = positions.len();
    let mut chosen = positions.iter().peekable();
    let mut ordinal = 0;

    for pos in 0..n {
        if remaining == 0 {
            break;
        }
        if chosen.peek() == Some(&&pos) {
            chosen.next();
            remaining -= 1;
        } else {
            // every choice that has `pos` marked here comes before ours
            ordinal += binomial(n - 1 - pos, remaining - 1);
        }
    }

    ordinal
}

/// Fill `positions` (ascending) with the choice of `positions.len()` slots out of `n` whose rank
/// is `ordinal`. This is the inverse of [`combination_ordinal`].
pub fn combination_from_ordinal(mut ordinal: usize, n: usize, positions: &mut [usize]) {
    let k = positions.len();
    debug_assert!(ordinal < binomial(n, k));

    let mut pos = 0;
    for (found, slot) in positions.iter_mut().enumerate() {
        // Divide by repeatedly subtracting the number of choices with the next slot at `pos`
        loop {
            let skipped = binomial(n - 1 - pos, k - 1 - found);
            pos += 1;
            if ordinal < skipped {
                break;
            }
            ordinal -= skipped;
        }
        *slot = pos - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::Itertools;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(12, 0), 1);
        assert_eq!(binomial(12, 12), 1);
        assert_eq!(binomial(11, 3), 165);
        assert_eq!(binomial(12, 4), 495);
        assert_eq!(binomial(4, 5), 0);
        for n in 1..20 {
            for k in 1..n {
                assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
            }
        }
    }

    #[test]
    fn identity_ranks_zero() {
        assert_eq!(permutation_to_ordinal(&[0, 1, 2, 3, 4, 5, 6, 7]), 0);
        assert_eq!(permutation_to_ordinal(&[8, 9, 10, 11]), 0);
        assert_eq!(permutation_to_ordinal(&[3, 2, 1, 0]), 23);
    }

    #[test]
    fn parity_counts_inversions() {
        assert!(!permutation_parity(&[0, 1, 2, 3]));
        assert!(permutation_parity(&[1, 0, 2, 3]));
        // a 4-cycle is odd, a 3-cycle even
        assert!(permutation_parity(&[3, 0, 1, 2]));
        assert!(!permutation_parity(&[1, 2, 0, 3]));
    }

    #[test]
    fn permutations_of_eight_are_a_bijection() {
        let mut seen = vec![false; factorial(8)];
        for p in (0..8u8).permutations(8) {
            let o = permutation_to_ordinal(&p);
            assert!(!seen[o]);
            seen[o] = true;

            let mut q = [0; 8];
            ordinal_to_permutation(o, &mut q, 0);
            assert_eq!(&q[..], &p[..]);
        }
        assert!(seen.into_iter().all(|b| b));
    }

    #[test]
    fn decode_respects_base() {
        let mut perm = [0; 4];
        ordinal_to_permutation(0, &mut perm, 8);
        assert_eq!(perm, [8, 9, 10, 11]);
        ordinal_to_permutation(23, &mut perm, 8);
        assert_eq!(perm, [11, 10, 9, 8]);
    }

    #[test]
    fn choices_rank_lexicographically() {
        // itertools hands out combinations in lexicographic order
        for (i, c) in (0..12).combinations(4).enumerate() {
            assert_eq!(combination_ordinal(&c, 12), i);

            let mut positions = [0; 4];
            combination_from_ordinal(i, 12, &mut positions);
            assert_eq!(&positions[..], &c[..]);
        }
        assert_eq!(combination_ordinal(&[8, 9, 10, 11], 12), 494);
    }

    #[test]
    fn choices_are_unique() {
        let ordinals: HashSet<_> = (0..9)
            .combinations(3)
            .map(|c| combination_ordinal(&c, 9))
            .collect();
        assert_eq!(ordinals.len(), binomial(9, 3));
        assert!(ordinals.into_iter().all(|o| o < binomial(9, 3)));
    }

    proptest! {
        #[test]
        fn permutation_round_trip(perm in (1..=12usize).prop_flat_map(|n| Just((0..n as u8).collect::<Vec<_>>()).prop_shuffle())) {
            let o = permutation_to_ordinal(&perm);
            prop_assert!(o < factorial(perm.len()));
            let mut q = vec![0; perm.len()];
            ordinal_to_permutation(o, &mut q, 0);
            prop_assert_eq!(q, perm);
        }

        #[test]
        fn combination_round_trip(marks in proptest::collection::vec(any::<bool>(), 1..=12)) {
            let n = marks.len();
            let positions: Vec<usize> = marks.iter().positions(|&m| m).collect();
            let o = combination_ordinal(&positions, n);
            prop_assert!(o < binomial(n, positions.len()));
            let mut decoded = vec![0; positions.len()];
            combination_from_ordinal(o, n, &mut decoded);
            prop_assert_eq!(decoded, positions);
        }
    }
}
