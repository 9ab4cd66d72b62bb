//! Out-of-place transpose on row-major buffers.

/// Writes `dst[i, j] = src[j, i]`.
///
/// `src` is `src_rows × src_cols` and `dst` is `src_cols × src_rows`, both
/// row-major. The loop walks `dst` in storage order, so writes are
/// sequential and reads stride through `src` by column.
///
/// ```
/// use densemat::matrix::transpose::transpose;
///
/// // a 3×1 column becomes a 1×3 row
/// let mut row = [0.0; 3];
/// transpose(&[7.0, 8.0, 9.0], &mut row, 3, 1);
/// assert_eq!(row, [7.0, 8.0, 9.0]);
///
/// let mut t = [0.0; 4];
/// transpose(&[1.0, 2.0, 3.0, 4.0], &mut t, 2, 2);
/// assert_eq!(t, [1.0, 3.0, 2.0, 4.0]);
/// ```
pub fn transpose(src: &[f32], dst: &mut [f32], src_rows: usize, src_cols: usize) {
    for (i, dst_row) in dst.chunks_exact_mut(src_rows.max(1)).take(src_cols).enumerate() {
        for (j, cell) in dst_row.iter_mut().enumerate() {
            *cell = src[j * src_cols + i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_to_tall() {
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2×3
        let mut dst = [0.0; 6];
        transpose(&src, &mut dst, 2, 3);
        assert_eq!(dst, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn zero_rows_writes_nothing() {
        let mut dst: [f32; 0] = [];
        transpose(&[], &mut dst, 0, 4);
    }
}
