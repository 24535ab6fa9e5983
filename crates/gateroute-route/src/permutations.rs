//! Lazy enumeration of visiting orders.

/// Iterator over every permutation of `0..n`, in lexicographic order.
///
/// Permutations are produced one at a time, so memory stays at `O(n)` no
/// matter how many orders there are. `n == 0` yields a single empty
/// permutation.
#[derive(Debug, Clone)]
pub struct Permutations {
    next: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            next: Some((0..n).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut succ = current.clone();
        if advance(&mut succ) {
            self.next = Some(succ);
        }
        Some(current)
    }
}

/// Rearrange `perm` into its lexicographic successor. Returns `false` when
/// `perm` was already the last permutation.
fn advance(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    // Longest non-increasing suffix starts right after `i`.
    let Some(i) = (0..n - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        return false;
    };
    let j = (i + 1..n)
        .rev()
        .find(|&j| perm[j] > perm[i])
        .unwrap_or(i + 1);
    perm.swap(i, j);
    perm[i + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_elements_in_lexicographic_order() {
        let all: Vec<_> = Permutations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn counts_are_factorial() {
        assert_eq!(Permutations::new(0).count(), 1);
        assert_eq!(Permutations::new(1).count(), 1);
        assert_eq!(Permutations::new(4).count(), 24);
        assert_eq!(Permutations::new(6).count(), 720);
    }

    #[test]
    fn every_item_is_a_permutation() {
        for p in Permutations::new(5) {
            let mut sorted = p.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        }
    }
}
