use errors::*;
use rank::weighted_rank;

// sum(w*x) / sum(w), without validation
fn wmean(values: &[f64], weights: &[f64], sum_w: f64) -> f64 {
    let sum = values.iter().zip(weights.iter()).map({|(val, w)| w * val}).sum::<f64>();
    sum / sum_w
}

/// Weighted arithmetic mean `sum(w*x) / sum(w)`.
///
/// A zero weight sum yields NaN.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Result<f64> {
    check_lengths(&[("x", values.len()), ("w", weights.len())])?;
    let sum_w = weights.iter().sum::<f64>();
    Ok(wmean(values, weights, sum_w))
}

/// Weighted Pearson correlation coefficient of `values1` and `values2`.
///
/// All three slices must have the same nonzero length and the weights
/// should be nonnegative. A zero weight sum or a zero weighted variance in
/// either input is not an error: the result is NaN (or infinite) as IEEE-754
/// arithmetic dictates.
pub fn weighted_pearson(values1: &[f64], values2: &[f64], weights: &[f64]) -> Result<f64> {
    let n = check_lengths(&[
        ("x", values1.len()),
        ("y", values2.len()),
        ("w", weights.len()),
    ])?;
    trace!("weighted pearson correlation, n = {}", n);

    let sum_w = weights.iter().sum::<f64>();
    if sum_w == 0.0 {
        warn!("weights sum to zero, correlation is undefined");
    }
    let mean1 = wmean(values1, weights, sum_w);
    let mean2 = wmean(values2, weights, sum_w);

    let (mut cov, mut var1, mut var2) = (0.0, 0.0, 0.0);
    for ((val1, val2), w) in values1.iter().zip(values2.iter()).zip(weights.iter()) {
        let d1 = val1 - mean1;
        let d2 = val2 - mean2;
        cov += w * d1 * d2;
        var1 += w * d1 * d1;
        var2 += w * d2 * d2;
    }

    let den = (var1 * var2).sqrt();
    if den == 0.0 {
        warn!("zero weighted variance, correlation is undefined");
    }
    Ok(cov / den)
}

/// Weighted Spearman correlation: the weighted Pearson correlation of the
/// weighted mid-ranks of both inputs.
pub fn weighted_spearman(values1: &[f64], values2: &[f64], weights: &[f64]) -> Result<f64> {
    check_lengths(&[
        ("x", values1.len()),
        ("y", values2.len()),
        ("w", weights.len()),
    ])?;
    let rank1 = weighted_rank(values1, weights)?;
    let rank2 = weighted_rank(values2, weights)?;
    weighted_pearson(&rank1, &rank2, weights)
}
