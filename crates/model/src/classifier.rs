//! Balanced-class logistic regression trained in-process
//!
//! Binary classifier with a `fit`/`predict` contract. Class imbalance is
//! handled with balanced sample weights (`n / (2 * n_c)`), so the rare
//! delayed class is not drowned out by the on-time majority. Training is
//! deterministic: weights start at zero and the regularized loss is convex,
//! so two fits on the same data produce identical parameters.

use crate::error::ModelError;
use crate::models::{FeatureMatrix, LabelVector};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Training hyperparameters; fixed defaults keep fits reproducible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    pub max_iterations: usize,
    pub learning_rate: f64,
    /// Stop when the infinity norm of the gradient drops below this
    pub gradient_tolerance: f64,
    /// Inverse regularization strength (larger means weaker L2 penalty)
    pub inverse_regularization: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            learning_rate: 0.1,
            gradient_tolerance: 1e-6,
            inverse_regularization: 1.0,
        }
    }
}

/// Trained binary logistic regression model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    weights: Array1<f64>,
    intercept: f64,
    /// Balanced class weights used at fit time, [negative, positive]
    class_weights: [f64; 2],
    hyperparameters: Hyperparameters,
    iterations_run: usize,
}

impl LogisticClassifier {
    /// Fit with the default hyperparameters
    pub fn fit(features: &FeatureMatrix, labels: &LabelVector) -> Result<Self, ModelError> {
        Self::fit_with(features, labels, Hyperparameters::default())
    }

    /// Fit by batch gradient descent on the weighted mean log-loss.
    /// The intercept is not regularized.
    pub fn fit_with(
        features: &FeatureMatrix,
        labels: &LabelVector,
        hyperparameters: Hyperparameters,
    ) -> Result<Self, ModelError> {
        if features.nrows() != labels.len() {
            return Err(ModelError::LabelCount {
                features: features.nrows(),
                labels: labels.len(),
            });
        }
        let class_weights = balanced_class_weights(labels)?;
        let sample_weights: Array1<f64> = labels.mapv(|y| {
            if y > 0.5 {
                class_weights[1]
            } else {
                class_weights[0]
            }
        });
        let weight_sum = sample_weights.sum();
        let penalty = 1.0 / hyperparameters.inverse_regularization;

        let mut weights: Array1<f64> = Array1::zeros(features.ncols());
        let mut intercept = 0.0;
        let mut iterations_run = hyperparameters.max_iterations;

        for iteration in 0..hyperparameters.max_iterations {
            let z = features.dot(&weights) + intercept;
            let predictions = z.mapv(sigmoid);
            let residual: Array1<f64> = (&predictions - labels) * &sample_weights;

            let mut weight_gradient = features.t().dot(&residual);
            weight_gradient.mapv_inplace(|g| g / weight_sum);
            weight_gradient.scaled_add(penalty / weight_sum, &weights);
            let intercept_gradient = residual.sum() / weight_sum;

            let gradient_norm = weight_gradient
                .iter()
                .fold(intercept_gradient.abs(), |norm, g| norm.max(g.abs()));
            if gradient_norm < hyperparameters.gradient_tolerance {
                iterations_run = iteration;
                break;
            }

            weights.scaled_add(-hyperparameters.learning_rate, &weight_gradient);
            intercept -= hyperparameters.learning_rate * intercept_gradient;
        }

        debug!(
            rows = features.nrows(),
            iterations = iterations_run,
            "Classifier fit complete"
        );

        Ok(Self {
            weights,
            intercept,
            class_weights,
            hyperparameters,
            iterations_run,
        })
    }

    /// Predict one binary label per input row, in input order
    pub fn predict(&self, features: &FeatureMatrix) -> Result<Vec<i32>, ModelError> {
        Ok(self
            .predict_proba(features)?
            .iter()
            .map(|&p| i32::from(p > 0.5))
            .collect())
    }

    /// Delay probability per input row
    pub fn predict_proba(&self, features: &FeatureMatrix) -> Result<Array1<f64>, ModelError> {
        if features.ncols() != self.weights.len() {
            return Err(ModelError::FeatureWidth {
                expected: self.weights.len(),
                actual: features.ncols(),
            });
        }
        let z = features.dot(&self.weights) + self.intercept;
        Ok(z.mapv(sigmoid))
    }

    pub fn num_features(&self) -> usize {
        self.weights.len()
    }

    /// Gradient descent iterations actually run at fit time
    pub fn iterations_run(&self) -> usize {
        self.iterations_run
    }
}

/// sklearn-style balanced weights: n / (n_classes * n_c)
fn balanced_class_weights(labels: &LabelVector) -> Result<[f64; 2], ModelError> {
    let total = labels.len() as f64;
    let positives = labels.iter().filter(|&&y| y > 0.5).count() as f64;
    let negatives = total - positives;
    if positives == 0.0 {
        return Err(ModelError::SingleClass { class: 0 });
    }
    if negatives == 0.0 {
        return Err(ModelError::SingleClass { class: 1 });
    }
    Ok([total / (2.0 * negatives), total / (2.0 * positives)])
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
