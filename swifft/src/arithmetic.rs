//! Element-wise algebra on composable SWIFFT hash values.
//!
//! These mirror the ancestor FFI crate's `set`/`add`/`sub`/`mul` and
//! `const_*` family one-for-one, but without that crate's "buffers
//! must not alias" contract. The borrow checker already rejects a call
//! like `add(&mut h, &h)` at compile time, since `h` can't be borrowed
//! both mutably and immutably at once. Doubling a value in place is the
//! one case that contract used to cover and Rust's aliasing rules don't
//! rule out automatically; it gets its own [`double`] helper instead of
//! relying on a caller to pass the same buffer twice.

use swifft_core::{Lane1, N};

use crate::batch::drive2;
use crate::buffer::HashBlock;

fn elementwise(output: &mut HashBlock, operand: &HashBlock, f: impl Fn(i16, i16) -> i16) {
    for i in 0..N {
        output.0[i] = f(output.0[i], operand.0[i]);
    }
}

fn elementwise_const(output: &mut HashBlock, operand: i16, f: impl Fn(i16, i16) -> i16) {
    let operand = (operand as i32).rem_euclid(257) as i16;
    for v in &mut output.0 {
        *v = f(*v, operand);
    }
}

fn add_mod(a: i16, b: i16) -> i16 {
    ((a as i32 + b as i32).rem_euclid(257)) as i16
}

fn sub_mod(a: i16, b: i16) -> i16 {
    ((a as i32 - b as i32).rem_euclid(257)) as i16
}

fn mul_mod(a: i16, b: i16) -> i16 {
    Lane1([a]).safe_mult(Lane1([b])).mod_p().0[0]
}

/// Sets `output` to `operand`, element-wise.
pub fn set(output: &mut HashBlock, operand: &HashBlock) {
    output.0 = operand.0;
}

/// Sets each block in `output` to the corresponding block in `operand`.
pub fn set_multiple(output: &mut [HashBlock], operand: &[HashBlock]) {
    drive2(operand, output, |src, dst| set(dst, src));
}

/// Adds `operand` into `output`, element-wise, modulo 257.
pub fn add(output: &mut HashBlock, operand: &HashBlock) {
    elementwise(output, operand, add_mod);
}

/// Adds each block in `operand` into the corresponding block in `output`.
pub fn add_multiple(output: &mut [HashBlock], operand: &[HashBlock]) {
    drive2(operand, output, |src, dst| add(dst, src));
}

/// Subtracts `operand` from `output`, element-wise, modulo 257.
pub fn sub(output: &mut HashBlock, operand: &HashBlock) {
    elementwise(output, operand, sub_mod);
}

/// Subtracts each block in `operand` from the corresponding block in `output`.
pub fn sub_multiple(output: &mut [HashBlock], operand: &[HashBlock]) {
    drive2(operand, output, |src, dst| sub(dst, src));
}

/// Multiplies `output` by `operand`, element-wise, modulo 257.
pub fn mul(output: &mut HashBlock, operand: &HashBlock) {
    elementwise(output, operand, mul_mod);
}

/// Multiplies each block in `output` by the corresponding block in `operand`.
pub fn mul_multiple(output: &mut [HashBlock], operand: &[HashBlock]) {
    drive2(operand, output, |src, dst| mul(dst, src));
}

/// Sets every element of `output` to the constant `operand`, taken
/// modulo 257.
pub fn const_set(output: &mut HashBlock, operand: i16) {
    let operand = (operand as i32).rem_euclid(257) as i16;
    output.0 = [operand; N];
}

/// Applies [`const_set`] to each block in `output`, one constant per block.
pub fn const_set_multiple(output: &mut [HashBlock], operand: &[i16]) {
    debug_assert_eq!(output.len(), operand.len());
    for (block, &c) in output.iter_mut().zip(operand.iter()) {
        const_set(block, c);
    }
}

/// Adds the constant `operand` to every element of `output`, modulo 257.
pub fn const_add(output: &mut HashBlock, operand: i16) {
    elementwise_const(output, operand, add_mod);
}

/// Applies [`const_add`] to each block in `output`, one constant per block.
pub fn const_add_multiple(output: &mut [HashBlock], operand: &[i16]) {
    debug_assert_eq!(output.len(), operand.len());
    for (block, &c) in output.iter_mut().zip(operand.iter()) {
        const_add(block, c);
    }
}

/// Subtracts the constant `operand` from every element of `output`, modulo 257.
pub fn const_sub(output: &mut HashBlock, operand: i16) {
    elementwise_const(output, operand, sub_mod);
}

/// Applies [`const_sub`] to each block in `output`, one constant per block.
pub fn const_sub_multiple(output: &mut [HashBlock], operand: &[i16]) {
    debug_assert_eq!(output.len(), operand.len());
    for (block, &c) in output.iter_mut().zip(operand.iter()) {
        const_sub(block, c);
    }
}

/// Multiplies every element of `output` by the constant `operand`, modulo 257.
pub fn const_mul(output: &mut HashBlock, operand: i16) {
    elementwise_const(output, operand, mul_mod);
}

/// Applies [`const_mul`] to each block in `output`, one constant per block.
pub fn const_mul_multiple(output: &mut [HashBlock], operand: &[i16]) {
    debug_assert_eq!(output.len(), operand.len());
    for (block, &c) in output.iter_mut().zip(operand.iter()) {
        const_mul(block, c);
    }
}

/// Doubles `output` in place, equivalent to `add(output, &output.clone())`
/// without the clone.
pub fn double(output: &mut HashBlock) {
    for v in &mut output.0 {
        *v = add_mod(*v, *v);
    }
}
