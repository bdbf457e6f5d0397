//! Longest common subsequence over character sequences.

/// Length of the longest common subsequence of two character sequences.
///
/// Classic full dynamic-programming table: `table[i][j]` holds the LCS
/// length of `a[..i]` and `b[..j]`, so each cell extends the diagonal on a
/// character match and otherwise carries the better of the two neighbors.
/// Quadratic in both time and space; the table is the dominant cost of a
/// pipeline run with many candidates.
pub fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let cols = b.len() + 1;
    let mut table = vec![0u32; (a.len() + 1) * cols];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i * cols + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * cols + (j - 1)] + 1
            } else {
                table[(i - 1) * cols + j].max(table[i * cols + (j - 1)])
            };
        }
    }
    table[a.len() * cols + b.len()] as usize
}
