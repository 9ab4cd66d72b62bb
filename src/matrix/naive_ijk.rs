/// Matrix multiplication using i-j-k loop order: C = A * B
///
/// Each output element is the dot product of a row of A with a column
/// of B, accumulated in `f32`. C is overwritten, not accumulated into.
///
/// The innermost loop reads B with stride `n`, so this is a correctness
/// kernel rather than a fast one.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            c[i * n + j] = dot_row_col(a, b, i, j, n, k);
        }
    }
}

/// Row `i` of A dotted with column `j` of B.
#[inline]
fn dot_row_col(a: &[f32], b: &[f32], i: usize, j: usize, n: usize, k: usize) -> f32 {
    let row = &a[i * k..(i + 1) * k];
    row.iter()
        .enumerate()
        .fold(0.0, |acc, (p, &x)| acc + x * b[p * n + j])
}
