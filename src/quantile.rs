//! Order statistics over samples with missing values.

pub trait NanQuantile {
    /// The `q`-th quantile of the non-`NaN` elements, linearly interpolating between the two
    /// nearest order statistics. Returns `NaN` if there are no such elements.
    fn nan_quantile(&self, q: f64) -> f64;

    fn nan_median(&self) -> f64 {
        self.nan_quantile(0.5)
    }

    /// Computes several quantiles in one pass, sorting the sample only once.
    fn nan_quantiles<const N: usize>(&self, qs: [f64; N]) -> [f64; N];
}
impl NanQuantile for [f64] {
    fn nan_quantile(&self, q: f64) -> f64 {
        let [quantile] = self.nan_quantiles([q]);
        quantile
    }

    fn nan_quantiles<const N: usize>(&self, qs: [f64; N]) -> [f64; N] {
        let mut sorted: Vec<_> = self.iter().copied().filter(|value| !value.is_nan()).collect();
        sorted.sort_unstable_by(f64::total_cmp);
        qs.map(|q| interpolate(&sorted, q))
    }
}

#[inline]
fn interpolate(sorted: &[f64], q: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&q), "quantile {q} outside [0, 1]");
    if sorted.is_empty() {
        return f64::NAN;
    }
    let rank = (sorted.len() - 1) as f64 * q;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
