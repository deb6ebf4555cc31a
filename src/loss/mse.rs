/// Squared-error helpers shared by the backward pass and evaluation.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        MseLoss::sum_squared(predicted, expected) / n
    }

    /// sum((predicted - expected)²)
    pub fn sum_squared(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }

    /// Per-output gradient with respect to the prediction, up to a constant
    /// factor: `predicted - expected`. Subtracting it from the weights
    /// descends the loss.
    pub fn gradient(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}
