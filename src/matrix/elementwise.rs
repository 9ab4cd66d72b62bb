//! Per-element loops over equally sized buffers.

/// `dst[i] = f(a[i], b[i])` for every element.
///
/// All three slices must have the same length.
#[inline]
pub fn zip_with<F>(a: &[f32], b: &[f32], dst: &mut [f32], f: F)
where
    F: Fn(f32, f32) -> f32,
{
    debug_assert!(a.len() == b.len() && a.len() == dst.len());
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = f(x, y);
    }
}

/// `buf[i] *= s` in place.
#[inline]
pub fn scale(buf: &mut [f32], s: f32) {
    for x in buf {
        *x *= s;
    }
}

/// Sum of squares, accumulated from `+0.0`.
#[inline]
pub fn sum_of_squares(buf: &[f32]) -> f32 {
    buf.iter().fold(0.0, |acc, &x| acc + x * x)
}
