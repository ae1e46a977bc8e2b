//! Closed-form approximation of the standard normal quantile (probit)
//! function, using Peter J. Acklam's rational coefficients. Relative error
//! is about 1.15e-9 over the whole open interval, no iteration involved.

/// Inputs are clamped into `[EPSILON, 1 - EPSILON]` so no infinity escapes
const EPSILON: f64 = 1e-12;

/// Below this the tail rational takes over from the central one
const P_LOW: f64 = 0.02425;

const CENTRAL_NUM: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

const CENTRAL_DEN: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

const TAIL_NUM: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

const TAIL_DEN: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// z such that the standard normal CDF at z equals `p`.
///
/// The lower half `p <= 0.5` is evaluated directly; the upper half by
/// reflection, so `inverse_normal_cdf(0.5) == 0` and the function is
/// antisymmetric about 0.5. NaN maps to 0.
pub fn inverse_normal_cdf(p: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }

    let p = p.clamp(EPSILON, 1.0 - EPSILON);

    if p <= 0.5 {
        lower_half(p)
    } else {
        -lower_half(1.0 - p)
    }
}

fn lower_half(p: f64) -> f64 {
    if p < P_LOW {
        lower_tail(p)
    } else {
        central(p)
    }
}

fn central(p: f64) -> f64 {
    let q = p - 0.5;
    let r = q * q;
    let a = &CENTRAL_NUM;
    let b = &CENTRAL_DEN;

    (((((a[0] * r + a[1]) * r + a[2]) * r + a[3]) * r + a[4]) * r + a[5]) * q
        / (((((b[0] * r + b[1]) * r + b[2]) * r + b[3]) * r + b[4]) * r + 1.0)
}

fn lower_tail(p: f64) -> f64 {
    let q = (-2.0 * p.ln()).sqrt();
    let c = &TAIL_NUM;
    let d = &TAIL_DEN;

    (((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
        / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_median_is_zero() {
        assert_eq!(inverse_normal_cdf(0.5), 0.0);
    }

    #[test]
    fn test_known_quantiles() {
        let cases = [
            (0.975, 1.959_963_985),
            (0.025, -1.959_963_985),
            (0.9, 1.281_551_566),
            (0.841_344_746, 1.0),
            (0.001, -3.090_232_306),
            (0.01, -2.326_347_874),
        ];

        for (p, expected) in cases {
            let z = inverse_normal_cdf(p);
            assert!(
                (z - expected).abs() < TOLERANCE,
                "p = {}: got {}, expected {}",
                p,
                z,
                expected
            );
        }
    }

    #[test]
    fn test_antisymmetric_about_median() {
        for i in 1..100 {
            let p = i as f64 / 100.0;
            let sum = inverse_normal_cdf(p) + inverse_normal_cdf(1.0 - p);
            assert!(sum.abs() < 1e-9, "p = {}: asymmetry {}", p, sum);
        }
    }

    #[test]
    fn test_monotonic_across_branch_boundary() {
        let below = inverse_normal_cdf(P_LOW - 1e-6);
        let at = inverse_normal_cdf(P_LOW);
        let above = inverse_normal_cdf(P_LOW + 1e-6);

        assert!(below < at && at < above);
    }

    #[test]
    fn test_boundaries_stay_finite() {
        for p in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(inverse_normal_cdf(p).is_finite(), "p = {}", p);
        }
        assert!(inverse_normal_cdf(0.0) < -6.0);
        assert!(inverse_normal_cdf(1.0) > 6.0);
    }
}
