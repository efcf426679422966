//! Single-feature weighted least squares with standardisation.
//!
//! A row with weight `w` contributes exactly as `w` identical rows would, so
//! means and (population) standard deviations match the duplicated table.

use serde::Serialize;

/// One observation: feature, target, replication weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedPoint {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

impl WeightedPoint {
    pub fn new(x: f64, y: f64, w: f64) -> Self {
        Self { x, y, w }
    }
}

/// Centers and scales a feature to unit variance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardScaler {
    pub mean: f64,
    pub scale: f64,
}

impl StandardScaler {
    /// Fit on weighted samples; `None` when there is no positive weight
    pub fn fit(points: &[WeightedPoint]) -> Option<Self> {
        let total = total_weight(points);
        if total <= 0.0 {
            return None;
        }

        let mean = points.iter().map(|p| p.w * p.x).sum::<f64>() / total;
        let variance = points.iter().map(|p| p.w * (p.x - mean).powi(2)).sum::<f64>() / total;
        let std = variance.sqrt();

        // Constant feature: leave it unscaled
        let scale = if std.is_finite() && std > 10.0 * f64::EPSILON * mean.abs().max(1.0) {
            std
        } else {
            1.0
        };

        Some(Self { mean, scale })
    }

    pub fn transform(&self, x: f64) -> f64 {
        (x - self.mean) / self.scale
    }
}

/// `y = intercept + slope * z`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearRegression {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearRegression {
    /// Weighted ordinary least squares on an already transformed feature
    pub fn fit(points: &[WeightedPoint]) -> Option<Self> {
        let total = total_weight(points);
        if total <= 0.0 {
            return None;
        }

        let x_mean = points.iter().map(|p| p.w * p.x).sum::<f64>() / total;
        let y_mean = points.iter().map(|p| p.w * p.y).sum::<f64>() / total;

        let sxx = points.iter().map(|p| p.w * (p.x - x_mean).powi(2)).sum::<f64>();
        let sxy = points.iter().map(|p| p.w * (p.x - x_mean) * (p.y - y_mean)).sum::<f64>();

        let slope = if sxx > f64::EPSILON { sxy / sxx } else { 0.0 };
        let intercept = y_mean - slope * x_mean;

        Some(Self { intercept, slope })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Scaler plus regression fitted on raw distances
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FittedModel {
    pub scaler: StandardScaler,
    pub regression: LinearRegression,

    /// Sum of row weights the model was fitted on
    pub weight: f64,
}

impl FittedModel {
    pub fn fit(points: &[WeightedPoint]) -> Option<Self> {
        let scaler = StandardScaler::fit(points)?;
        let scaled: Vec<WeightedPoint> = points
            .iter()
            .map(|p| WeightedPoint::new(scaler.transform(p.x), p.y, p.w))
            .collect();
        let regression = LinearRegression::fit(&scaled)?;

        Some(Self {
            scaler,
            regression,
            weight: total_weight(points),
        })
    }

    /// Raw (unclamped) prediction for a distance
    pub fn predict(&self, x: f64) -> f64 {
        self.regression.predict(self.scaler.transform(x))
    }
}

fn total_weight(points: &[WeightedPoint]) -> f64 {
    points.iter().map(|p| p.w).sum()
}
