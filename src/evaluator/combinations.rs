/// Iterator over all 5-element index combinations of `0..n`, in
/// lexicographic order. For the hold'em evaluator `n` is 5, 6 or 7,
/// yielding 1, 6 or 21 combinations.
pub(crate) struct FiveFrom {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl FiveFrom {
    pub(crate) fn new(n: usize) -> Self {
        debug_assert!(n >= 5);
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for FiveFrom {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.indices;

        // Advance: bump the rightmost index that has room, reset the tail.
        let mut i = 4;
        loop {
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}
