//! Fibonacci sequences `F(0..=n)` over 64-bit unsigned accumulators.
//!
//! [`compute`] is the plain bottom-up computation: one forward pass, sums
//! wrap at 64 bits. [`compute_into`] fills a caller-provided buffer instead of
//! allocating, and [`compute_checked`] reports the first term that no longer
//! fits in a `u64`.

mod error;
mod sequence;

pub use error::FibError;
pub use sequence::Sequence;

use tracing::{debug, trace};

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_EXACT_INDEX: usize = 93;

/// Computes `F(0..=n)`.
///
/// Terms past [`MAX_EXACT_INDEX`] wrap modulo 2^64 without error.
///
/// ```
/// let seq = fib_sequence::compute(6).unwrap();
/// assert_eq!(seq, [0, 1, 1, 2, 3, 5, 8]);
/// assert!(fib_sequence::compute(-1).is_err());
/// ```
pub fn compute(n: isize) -> Result<Sequence, FibError> {
    let len = sequence_len(n)?;
    let mut terms = vec![0u64; len];
    fill(&mut terms);
    Ok(Sequence::new(terms))
}

/// Writes `F(0..=n)` into `out[..=n]`, leaving the rest of `out` untouched.
///
/// Fails without writing anything if `out` holds fewer than `n + 1` elements.
pub fn compute_into(n: isize, out: &mut [u64]) -> Result<(), FibError> {
    let required = sequence_len(n)?;
    let actual = out.len();
    if actual < required {
        debug!(required, actual, "output buffer too small");
        return Err(FibError::BufferTooSmall { required, actual });
    }
    fill(&mut out[..required]);
    Ok(())
}

/// Like [`compute`], but fails with [`FibError::Overflow`] instead of wrapping.
pub fn compute_checked(n: isize) -> Result<Sequence, FibError> {
    let len = sequence_len(n)?;
    let mut terms = Vec::with_capacity(len.min(MAX_EXACT_INDEX + 1));
    terms.push(0u64);
    if len > 1 {
        terms.push(1);
    }
    for index in 2..len {
        let term = terms[index - 1]
            .checked_add(terms[index - 2])
            .ok_or_else(|| {
                debug!(index, "term exceeds u64");
                FibError::Overflow { index }
            })?;
        terms.push(term);
    }
    Ok(Sequence::new(terms))
}

fn sequence_len(n: isize) -> Result<usize, FibError> {
    if n < 0 {
        trace!(n, "rejecting negative index");
        return Err(FibError::InvalidInput);
    }
    Ok(n.unsigned_abs() + 1)
}

/// Fills `out` with `F(0..out.len())`. `out` must not be empty.
fn fill(out: &mut [u64]) {
    out[0] = 0;
    if let Some(second) = out.get_mut(1) {
        *second = 1;
    }
    for i in 2..out.len() {
        // Naturally overflow at 64 bits
        out[i] = out[i - 1].wrapping_add(out[i - 2]);
    }
}
