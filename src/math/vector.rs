/// Inner product of two equal-length slices.
///
/// # Panics
/// Panics if the lengths differ.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot product of vectors with different lengths");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Index of the maximum element in a slice. Ties resolve to the first
/// occurrence; NaN entries never win. Returns 0 for an empty slice.
pub fn argmax(values: &[f64]) -> usize {
    let mut index = 0;
    let mut highest = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > highest {
            highest = v;
            index = i;
        }
    }
    index
}
