//! Expected token price curves

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, ProjectionError, Result};

/// One knot of a piecewise-linear price table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub month: f64,
    pub price: f64,
}

/// Expected price as a function of projection month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PriceCurve {
    /// K / (1 + exp(-r (m - t0)))
    Logistic {
        /// Asymptotic maximum price
        k: f64,
        /// Growth rate (steepness)
        r: f64,
        /// Inflection month, where price = K/2
        t0: f64,
    },
    /// Linear interpolation between knots, flat outside the table
    PiecewiseLinear { points: Vec<PricePoint> },
}

impl Default for PriceCurve {
    fn default() -> Self {
        PriceCurve::Logistic {
            k: 10.0,
            r: 0.5,
            t0: 12.0,
        }
    }
}

impl PriceCurve {
    /// Two-segment illustrative table: $0.04 → $1.00 by month 12, $2.50 by month 24
    pub fn default_piecewise() -> Self {
        PriceCurve::PiecewiseLinear {
            points: vec![
                PricePoint { month: 1.0, price: 0.04 },
                PricePoint { month: 12.0, price: 1.00 },
                PricePoint { month: 24.0, price: 2.50 },
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            PriceCurve::Logistic { k, r, t0 } => {
                ensure_positive("price_curve.k", *k)?;
                ensure_positive("price_curve.r", *r)?;
                if !t0.is_finite() {
                    return Err(ProjectionError::invalid("price_curve.t0", "must be finite"));
                }
                Ok(())
            }
            PriceCurve::PiecewiseLinear { points } => {
                if points.len() < 2 {
                    return Err(ProjectionError::invalid(
                        "price_curve.points",
                        format!("need at least 2 points, got {}", points.len()),
                    ));
                }
                for point in points {
                    ensure_non_negative("price_curve.points.price", point.price)?;
                    if !point.month.is_finite() {
                        return Err(ProjectionError::invalid(
                            "price_curve.points.month",
                            "must be finite",
                        ));
                    }
                }
                if points.windows(2).any(|w| w[1].month <= w[0].month) {
                    return Err(ProjectionError::invalid(
                        "price_curve.points",
                        "months must be strictly increasing",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Expected price at `month`
    pub fn price(&self, month: f64) -> f64 {
        match self {
            PriceCurve::Logistic { k, r, t0 } => k / (1.0 + (-r * (month - t0)).exp()),
            PriceCurve::PiecewiseLinear { points } => interpolate(points, month),
        }
    }
}

fn interpolate(points: &[PricePoint], month: f64) -> f64 {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };
    if month <= first.month {
        return first.price;
    }
    if month >= last.month {
        return last.price;
    }

    for w in points.windows(2) {
        let (lo, hi) = (w[0], w[1]);
        if month <= hi.month {
            let t = (month - lo.month) / (hi.month - lo.month);
            return lo.price + t * (hi.price - lo.price);
        }
    }
    last.price
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_logistic_midpoint() {
        let curve = PriceCurve::Logistic { k: 10.0, r: 0.5, t0: 12.0 };
        assert_eq!(curve.price(12.0), 5.0);

        let curve = PriceCurve::Logistic { k: 3.7, r: 1.3, t0: 7.0 };
        assert_eq!(curve.price(7.0), 3.7 / 2.0);
    }

    #[test]
    fn test_logistic_strictly_increasing_and_bounded() {
        let curve = PriceCurve::default();
        let prices: Vec<f64> = (1..=24).map(|m| curve.price(m as f64)).collect();
        for w in prices.windows(2) {
            assert!(w[1] > w[0]);
        }
        assert!(prices.iter().all(|&p| p > 0.0 && p < 10.0));
    }

    #[test]
    fn test_piecewise_knots_and_segments() {
        let curve = PriceCurve::default_piecewise();
        assert_eq!(curve.price(1.0), 0.04);
        assert_eq!(curve.price(12.0), 1.0);
        assert_eq!(curve.price(24.0), 2.5);
        // Midway through the second segment
        assert_relative_eq!(curve.price(18.0), 1.75, max_relative = 1e-12);
        // Flat outside the table
        assert_eq!(curve.price(0.0), 0.04);
        assert_eq!(curve.price(30.0), 2.5);
    }

    #[test]
    fn test_rejects_bad_curves() {
        assert!(PriceCurve::Logistic { k: 0.0, r: 0.5, t0: 12.0 }.validate().is_err());
        assert!(PriceCurve::Logistic { k: 10.0, r: -0.5, t0: 12.0 }.validate().is_err());

        let single = PriceCurve::PiecewiseLinear {
            points: vec![PricePoint { month: 1.0, price: 0.04 }],
        };
        assert!(single.validate().is_err());

        let unordered = PriceCurve::PiecewiseLinear {
            points: vec![
                PricePoint { month: 12.0, price: 1.0 },
                PricePoint { month: 1.0, price: 0.04 },
            ],
        };
        assert!(unordered.validate().is_err());
        assert!(PriceCurve::default_piecewise().validate().is_ok());
    }

    #[test]
    fn test_serde_tagged_mode() {
        let json = r#"{"mode":"logistic","k":8.0,"r":0.4,"t0":10.0}"#;
        let curve: PriceCurve = serde_json::from_str(json).unwrap();
        assert_eq!(curve, PriceCurve::Logistic { k: 8.0, r: 0.4, t0: 10.0 });
    }
}
