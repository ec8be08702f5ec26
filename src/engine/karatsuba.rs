// ============================================================================
// Karatsuba Multiplication
// Divide-and-conquer digit multiplication, O(n^log2(3))
// ============================================================================

use super::schoolbook::schoolbook_mul;
use crate::domain::{DEFAULT_CUTOFF, MIN_CUTOFF};
use crate::interfaces::{assert_digits_in_radix, MultiplicationAlgorithm};
use crate::numeric::{add, shift, sub, Digits, Radix};
use std::panic;

/// Recursion depth below which no more worker threads are forked.
/// Depth 3 gives at most 7 extra threads per top-level product.
const MAX_FORK_DEPTH: u32 = 3;

/// Karatsuba multiplication with a schoolbook cutoff
///
/// Splits both operands at `half = max(len) / 2` digits:
///
/// ```text
/// a = a1 * B^half + a0          z0 = a0 * b0
/// b = b1 * B^half + b0          z2 = a1 * b1
///                               z1 = (a0 + a1)(b0 + b1) - z2 - z0
///
/// a * b = z2 * B^(2 half) + z1 * B^half + z0
/// ```
///
/// Three half-size products instead of four. An operand no longer than
/// `half` splits as (itself, 0).
pub struct Karatsuba {
    cutoff: usize,
    parallel_threshold: Option<usize>,
}

impl Karatsuba {
    /// Sequential Karatsuba. Cutoffs below 2 are raised to 2.
    pub fn new(cutoff: usize) -> Self {
        Self {
            cutoff: cutoff.max(MIN_CUTOFF),
            parallel_threshold: None,
        }
    }

    /// Fork `z2` onto a scoped thread while both operands have at least
    /// `threshold` digits.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn parallel_threshold(&self) -> Option<usize> {
        self.parallel_threshold
    }

    fn multiply_at(&self, a: &Digits, b: &Digits, radix: Radix, depth: u32) -> Digits {
        if a.is_zero() || b.is_zero() {
            return Digits::zero();
        }
        if a.is_one() {
            return b.clone();
        }
        if b.is_one() {
            return a.clone();
        }
        if a.len() < self.cutoff || b.len() < self.cutoff {
            return schoolbook_mul(a, b, radix);
        }

        let half = a.len().max(b.len()) / 2;
        let (a_low, a_high) = a.split_at(half);
        let (b_low, b_high) = b.split_at(half);
        let a_sum = add(&a_low, &a_high, radix);
        let b_sum = add(&b_low, &b_high, radix);

        let (z0, z1, z2) = if self.should_fork(a, b, depth) {
            self.fork(
                (&a_low, &b_low),
                (&a_sum, &b_sum),
                (&a_high, &b_high),
                radix,
                depth,
            )
        } else {
            (
                self.multiply_at(&a_low, &b_low, radix, depth + 1),
                self.multiply_at(&a_sum, &b_sum, radix, depth + 1),
                self.multiply_at(&a_high, &b_high, radix, depth + 1),
            )
        };

        // (a0 + a1)(b0 + b1) >= a1 b1 + a0 b0 for non-negative halves
        let middle = sub(&sub(&z1, &z2, radix), &z0, radix);

        let upper = add(&shift(&z2, 2 * half), &shift(&middle, half), radix);
        add(&upper, &z0, radix)
    }

    fn should_fork(&self, a: &Digits, b: &Digits, depth: u32) -> bool {
        depth < MAX_FORK_DEPTH
            && self
                .parallel_threshold
                .is_some_and(|threshold| a.len().min(b.len()) >= threshold)
    }

    /// Evaluate `z2` on a scoped worker while this thread does `z0` and `z1`.
    /// A panic on either side is re-raised here.
    fn fork(
        &self,
        low: (&Digits, &Digits),
        sum: (&Digits, &Digits),
        high: (&Digits, &Digits),
        radix: Radix,
        depth: u32,
    ) -> (Digits, Digits, Digits) {
        let outcome = crossbeam::thread::scope(|scope| {
            let worker = scope.spawn(move |_| self.multiply_at(high.0, high.1, radix, depth + 1));
            let z0 = self.multiply_at(low.0, low.1, radix, depth + 1);
            let z1 = self.multiply_at(sum.0, sum.1, radix, depth + 1);
            worker.join().map(|z2| (z0, z1, z2))
        });

        match outcome {
            Ok(Ok(parts)) => parts,
            Ok(Err(payload)) | Err(payload) => panic::resume_unwind(payload),
        }
    }
}

impl Default for Karatsuba {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF)
    }
}

impl MultiplicationAlgorithm for Karatsuba {
    fn multiply(&self, lhs: &Digits, rhs: &Digits, radix: Radix) -> Digits {
        assert_digits_in_radix(lhs, rhs, radix);
        tracing::trace!(
            lhs_digits = lhs.len(),
            rhs_digits = rhs.len(),
            cutoff = self.cutoff,
            "karatsuba multiply"
        );
        self.multiply_at(lhs, rhs, radix, 0)
    }

    fn name(&self) -> &str {
        if self.parallel_threshold.is_some() {
            "Karatsuba (fork-join)"
        } else {
            "Karatsuba"
        }
    }
}
