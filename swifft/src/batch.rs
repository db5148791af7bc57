//! Shared batching helper for the `_multiple` operations in
//! [`crate::hash`], [`crate::arithmetic`], and [`crate::compact`].
//!
//! Below [`BLOCKS_PARALLELIZATION_THRESHOLD`] blocks, the per-block work
//! runs sequentially: rayon's work-stealing overhead would dominate a
//! batch of one or two blocks. At or above it, the batch is driven
//! through `rayon`'s parallel iterators, one block per task.

use rayon::prelude::*;

/// Minimum batch size before a `_multiple` operation switches from a
/// sequential loop to a `rayon` parallel iterator.
pub const BLOCKS_PARALLELIZATION_THRESHOLD: usize = 8;

/// Applies `f` to each `(input, output)` pair, choosing sequential or
/// parallel iteration based on batch size.
pub fn drive2<I, O, F>(inputs: &[I], outputs: &mut [O], f: F)
where
    I: Sync,
    O: Send,
    F: Fn(&I, &mut O) + Sync + Send,
{
    debug_assert_eq!(inputs.len(), outputs.len());
    if inputs.len() >= BLOCKS_PARALLELIZATION_THRESHOLD {
        inputs
            .par_iter()
            .zip(outputs.par_iter_mut())
            .for_each(|(i, o)| f(i, o));
    } else {
        inputs.iter().zip(outputs.iter_mut()).for_each(|(i, o)| f(i, o));
    }
}

/// Applies `f` to each `(a, b, output)` triple, choosing sequential or
/// parallel iteration based on batch size.
pub fn drive3<A, B, O, F>(a: &[A], b: &[B], outputs: &mut [O], f: F)
where
    A: Sync,
    B: Sync,
    O: Send,
    F: Fn(&A, &B, &mut O) + Sync + Send,
{
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), outputs.len());
    if a.len() >= BLOCKS_PARALLELIZATION_THRESHOLD {
        a.par_iter()
            .zip(b.par_iter())
            .zip(outputs.par_iter_mut())
            .for_each(|((x, y), o)| f(x, y, o));
    } else {
        a.iter()
            .zip(b.iter())
            .zip(outputs.iter_mut())
            .for_each(|((x, y), o)| f(x, y, o));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive2_runs_below_threshold() {
        let inputs = [1, 2, 3];
        let mut outputs = [0, 0, 0];
        drive2(&inputs, &mut outputs, |i, o| *o = i * 10);
        assert_eq!(outputs, [10, 20, 30]);
    }

    #[test]
    fn drive2_runs_at_and_above_threshold() {
        let inputs: Vec<i32> = (0..16).collect();
        let mut outputs = vec![0; 16];
        drive2(&inputs, &mut outputs, |i, o| *o = i * 2);
        assert_eq!(outputs, inputs.iter().map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn drive3_combines_two_inputs() {
        let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let b = [10, 20, 30, 40, 50, 60, 70, 80, 90];
        let mut outputs = [0; 9];
        drive3(&a, &b, &mut outputs, |x, y, o| *o = x + y);
        for i in 0..9 {
            assert_eq!(outputs[i], a[i] + b[i]);
        }
    }
}
