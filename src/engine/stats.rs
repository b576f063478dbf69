//! Sample statistics and significance tests.
//!
//! Everything here works on plain `f64` slices. The significance tests return
//! a two-sided p-value or a `TestError` explaining why no p-value exists.

use std::fmt;

/// Why a significance test could not produce a p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestError {
    SampleSize,
    SamplesEqual,
    ZeroVariance,
}

impl TestError {
    /// Annotation shown in the significance column.
    pub fn note(&self) -> &'static str {
        match self {
            TestError::SampleSize => "(too few samples)",
            TestError::SamplesEqual => "(all equal)",
            TestError::ZeroVariance => "(zero variance)",
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TestError::SampleSize => "sample is too small",
            TestError::SamplesEqual => "all samples are equal",
            TestError::ZeroVariance => "sample has zero variance",
        };
        f.write_str(msg)
    }
}

/// Significance test applied between the two configurations of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTest {
    /// Every change counts as significant; no p-value is reported
    None,
    /// Mann-Whitney U-test
    UTest,
    /// Welch's two-sample t-test
    TTest,
}

impl DeltaTest {
    /// Returns the p-value, or `None` when the test does not compute one.
    pub fn p_value(&self, old: &[f64], new: &[f64]) -> Result<Option<f64>, TestError> {
        match self {
            DeltaTest::None => Ok(None),
            DeltaTest::UTest => mann_whitney_u(old, new).map(Some),
            DeltaTest::TTest => welch_t_test(old, new).map(Some),
        }
    }
}

pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Unbiased sample variance.
pub fn variance(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() - 1) as f64
}

pub fn bounds(xs: &[f64]) -> (f64, f64) {
    xs.iter().fold((f64::NAN, f64::NAN), |(lo, hi), &x| {
        (if lo.is_nan() || x < lo { x } else { lo }, if hi.is_nan() || x > hi { x } else { hi })
    })
}

pub fn geomean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    (xs.iter().map(|x| x.ln()).sum::<f64>() / xs.len() as f64).exp()
}

/// Percentile of a sorted sample, using the R8 (median-unbiased) estimator.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[sorted.len() - 1];
    }
    let n = sorted.len() as f64;
    let pos = 1.0 / 3.0 + p * (n + 1.0 / 3.0);
    let k = pos.trunc() as usize;
    let frac = pos.fract();
    if k == 0 {
        return sorted[0];
    }
    if k >= sorted.len() {
        return sorted[sorted.len() - 1];
    }
    sorted[k - 1] + frac * (sorted[k] - sorted[k - 1])
}

/// Drop values outside `[q1 - 1.5*IQR, q3 + 1.5*IQR]`, keeping input order.
pub fn reject_outliers(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let q1 = percentile(&sorted, 0.25);
    let q3 = percentile(&sorted, 0.75);
    let lo = q1 - 1.5 * (q3 - q1);
    let hi = q3 + 1.5 * (q3 - q1);
    values.iter().copied().filter(|v| lo <= *v && *v <= hi).collect()
}

/// Largest sample size per side for which the exact U distribution is used.
const EXACT_U_LIMIT: usize = 50;

/// Two-sided Mann-Whitney U-test.
pub fn mann_whitney_u(xs: &[f64], ys: &[f64]) -> Result<f64, TestError> {
    let (n1, n2) = (xs.len(), ys.len());
    if n1 == 0 || n2 == 0 {
        return Err(TestError::SampleSize);
    }

    let mut merged: Vec<(f64, bool)> = xs.iter().map(|&x| (x, true)).chain(ys.iter().map(|&y| (y, false))).collect();
    merged.sort_by(|a, b| a.0.total_cmp(&b.0));
    if merged[0].0 == merged[merged.len() - 1].0 {
        return Err(TestError::SamplesEqual);
    }

    // Average ranks over ties, tracking tie group sizes for the correction.
    let n = merged.len();
    let mut rank_sum_x = 0.0;
    let mut tie_sizes = Vec::new();
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && merged[j].0 == merged[i].0 {
            j += 1;
        }
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        let from_x = merged[i..j].iter().filter(|(_, is_x)| *is_x).count();
        rank_sum_x += avg_rank * from_x as f64;
        if j - i > 1 {
            tie_sizes.push(j - i);
        }
        i = j;
    }

    let u1 = rank_sum_x - (n1 * (n1 + 1)) as f64 / 2.0;
    let u = u1.min((n1 * n2) as f64 - u1);

    if tie_sizes.is_empty() && n1 <= EXACT_U_LIMIT && n2 <= EXACT_U_LIMIT {
        let p = 2.0 * exact_u_cdf(u.round() as usize, n1, n2);
        return Ok(p.min(1.0));
    }

    let nf = n as f64;
    let mu = (n1 * n2) as f64 / 2.0;
    let tie_term: f64 = tie_sizes.iter().map(|&t| (t * t * t - t) as f64).sum();
    let sigma = ((n1 * n2) as f64 / 12.0 * ((nf + 1.0) - tie_term / (nf * (nf - 1.0)))).sqrt();
    if sigma == 0.0 {
        return Err(TestError::SamplesEqual);
    }
    // Continuity correction toward the mean
    let z = (u - mu + 0.5) / sigma;
    let p = 2.0 * normal_cdf(z);
    Ok(p.min(1.0))
}

/// P(U <= u) for sample sizes n1, n2 without ties.
fn exact_u_cdf(u: usize, n1: usize, n2: usize) -> f64 {
    let max_u = n1 * n2;
    // counts[m][k] = number of arrangements of m x's among n2 y's with U == k,
    // built up one x at a time.
    let mut prev: Vec<Vec<f64>> = vec![vec![0.0; max_u + 1]; n2 + 1];
    for row in prev.iter_mut() {
        row[0] = 1.0;
    }
    for _ in 1..=n1 {
        let mut cur: Vec<Vec<f64>> = vec![vec![0.0; max_u + 1]; n2 + 1];
        for ny in 0..=n2 {
            for k in 0..=max_u {
                // Last element is an x: it beats every y seen so far
                let mut count = if k >= ny { prev[ny][k - ny] } else { 0.0 };
                // Last element is a y
                if ny > 0 {
                    count += cur[ny - 1][k];
                }
                cur[ny][k] = count;
            }
        }
        prev = cur;
    }
    let counts = &prev[n2];
    let total: f64 = counts.iter().sum();
    counts[..=u.min(max_u)].iter().sum::<f64>() / total
}

/// Two-sided Welch t-test.
pub fn welch_t_test(xs: &[f64], ys: &[f64]) -> Result<f64, TestError> {
    if xs.len() < 2 || ys.len() < 2 {
        return Err(TestError::SampleSize);
    }
    let (n1, n2) = (xs.len() as f64, ys.len() as f64);
    let (v1, v2) = (variance(xs), variance(ys));
    if v1 == 0.0 && v2 == 0.0 {
        return Err(TestError::ZeroVariance);
    }
    let (a, b) = (v1 / n1, v2 / n2);
    let t = (mean(xs) - mean(ys)) / (a + b).sqrt();
    let df = (a + b) * (a + b) / (a * a / (n1 - 1.0) + b * b / (n2 - 1.0));
    // Two-sided tail of Student's t via the regularized incomplete beta
    Ok(incomplete_beta(df / 2.0, 0.5, df / (df + t * t)))
}

pub fn normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
}

/// Complementary error function, fractional error below 1.2e-7.
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.26551223
        + t * (1.00002368
            + t * (0.37409196
                + t * (0.09678418
                    + t * (-0.18628806
                        + t * (0.27886807 + t * (-1.13520398 + t * (1.48851587 + t * (-0.82215223 + t * 0.17087277))))))));
    let r = t * poly.exp();
    if x >= 0.0 { r } else { 2.0 - r }
}

fn ln_gamma(x: f64) -> f64 {
    const COF: [f64; 6] = [
        76.18009172947146,
        -86.50532032941677,
        24.01409824083091,
        -1.231739572450155,
        0.1208650973866179e-2,
        -0.5395239384953e-5,
    ];
    let mut y = x;
    let tmp = x + 5.5;
    let tmp = tmp - (x + 0.5) * tmp.ln();
    let mut ser = 1.000000000190015;
    for c in COF {
        y += 1.0;
        ser += c / y;
    }
    -tmp + (2.5066282746310005 * ser / x).ln()
}

/// Regularized incomplete beta function I_x(a, b).
fn incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let front = (ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln()).exp();
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_cf(a, b, x) / a
    } else {
        1.0 - front * beta_cf(b, a, 1.0 - x) / b
    }
}

/// Continued fraction for the incomplete beta function (modified Lentz).
fn beta_cf(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITER: usize = 300;
    const EPS: f64 = 3e-14;
    const FPMIN: f64 = 1e-300;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;
    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < FPMIN {
        d = FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;
    for m in 1..=MAX_ITER {
        let m = m as f64;
        let m2 = 2.0 * m;
        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;
        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;
        if (del - 1.0).abs() < EPS {
            break;
        }
    }
    h
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
