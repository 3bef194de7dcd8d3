use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::{
    boundary::DecisionBoundary,
    error::{LmsError, Result},
    loss_functions::mse_loss,
    matrix::{augment, dot, FeatureMatrix, LabelVector},
    sampler::{IndexSampler, RandomSampler},
};

const PROGRESS_EVERY: usize = 1000;

/// Labels in the order the nearest-target search visits them. On a tie the
/// earlier one wins.
const TARGETS: [u8; 2] = [0, 1];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LmsConfig {
    /// Step size (eta) of every update.
    pub learning_rate: f64,
    /// Number of single-sample updates run by `fit`.
    pub iterations: usize,
    /// Seed for the default sampler. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for LmsConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            iterations: 10_000,
            seed: None,
        }
    }
}

impl LmsConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LmsError::InvalidConfig(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.iterations == 0 {
            return Err(LmsError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Two-class linear classifier trained with the Widrow-Hoff (LMS) rule.
///
/// Labels 0 and 1 are regressed on as real targets, and a score is mapped back
/// to whichever label it is closer to. The learned weights hold one entry per
/// feature followed by the bias.
#[derive(Debug, Clone)]
pub struct LmsClassifier {
    config: LmsConfig,
    weights: Option<Vec<f64>>,
}

impl Default for LmsClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LmsClassifier {
    pub fn new() -> Self {
        Self {
            config: LmsConfig::default(),
            weights: None,
        }
    }

    pub fn with_config(config: LmsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            weights: None,
        })
    }

    /// A classifier that is already fitted with `weights` (bias last).
    pub fn from_weights(config: LmsConfig, weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(LmsError::mismatch("weights", 1, 0));
        }
        let mut classifier = Self::with_config(config)?;
        classifier.weights = Some(weights);
        Ok(classifier)
    }

    pub fn config(&self) -> &LmsConfig {
        &self.config
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Fits with the sampler implied by the config: seeded when `seed` is set,
    /// entropy-backed otherwise.
    pub fn fit(&mut self, x: &FeatureMatrix, y: &LabelVector) -> Result<()> {
        match self.config.seed {
            Some(seed) => self.fit_with_sampler(x, y, RandomSampler::seeded(seed)),
            None => self.fit_with_sampler(x, y, RandomSampler::from_entropy()),
        }
    }

    /// Runs exactly `iterations` updates starting from all-ones weights,
    /// drawing one row per update from `sampler`. Previous weights are dropped.
    pub fn fit_with_sampler<S: IndexSampler>(
        &mut self,
        x: &FeatureMatrix,
        y: &LabelVector,
        mut sampler: S,
    ) -> Result<()> {
        if x.n_rows() != y.len() {
            return Err(LmsError::mismatch("labels", x.n_rows(), y.len()));
        }
        let n_rows = x.n_rows();
        if n_rows == 0 {
            return Err(LmsError::EmptyTrainingSet);
        }

        let LmsConfig {
            learning_rate,
            iterations,
            ..
        } = self.config;
        debug!(
            rows = n_rows,
            features = x.n_cols(),
            learning_rate,
            iterations,
            "starting LMS fit"
        );

        let rows: Vec<Vec<f64>> = x.rows().map(augment).collect();
        let targets = y.targets();
        let mut weights = vec![1.0; x.n_cols() + 1];

        for step in 0..iterations {
            let index = sampler.sample_index(n_rows);
            let row = &rows[index];
            let predict = dot(row, &weights);
            let error = targets[index] - predict;

            // Move the score toward the target
            let scale = learning_rate * error;
            for (w_i, x_i) in weights.iter_mut().zip(row) {
                *w_i += scale * x_i;
            }

            if (step + 1) % PROGRESS_EVERY == 0 {
                trace!(step = step + 1, error, "LMS progress");
            }
        }

        let scores: Vec<f64> = rows.iter().map(|row| dot(row, &weights)).collect();
        let loss = mse_loss(&scores, &targets)?;
        info!(iterations, train_mse = loss, weights = ?weights, "LMS fit finished");

        self.weights = Some(weights);
        Ok(())
    }

    /// Raw linear scores `w . [x, 1]` for every row.
    pub fn decision_function(&self, x: &FeatureMatrix) -> Result<Vec<f64>> {
        let weights = self.weights.as_deref().ok_or(LmsError::NotFitted)?;
        if x.n_cols() + 1 != weights.len() {
            return Err(LmsError::mismatch("features", weights.len() - 1, x.n_cols()));
        }
        Ok(x.rows().map(|row| dot(&augment(row), weights)).collect())
    }

    pub fn predict(&self, x: &FeatureMatrix) -> Result<LabelVector> {
        let scores = self.decision_function(x)?;
        LabelVector::from_values(scores.into_iter().map(|score| nearest_label(score) as i64))
    }

    /// Line where the score is 0.5, recomputed from the current weights.
    pub fn decision_boundary(&self) -> Result<DecisionBoundary> {
        let weights = self.weights.as_deref().ok_or(LmsError::NotFitted)?;
        DecisionBoundary::from_weights(weights)
    }
}

fn nearest_label(score: f64) -> u8 {
    let mut best = TARGETS[0];
    let mut best_distance = (TARGETS[0] as f64 - score).powi(2);
    for &label in &TARGETS[1..] {
        let distance = (label as f64 - score).powi(2);
        if distance < best_distance {
            best = label;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::RoundRobinSampler;

    fn square() -> (FeatureMatrix, LabelVector) {
        let x = FeatureMatrix::from_rows(vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ])
        .unwrap();
        let y = LabelVector::from_values([0, 0, 1, 1]).unwrap();
        (x, y)
    }

    #[test]
    fn test_nearest_label() {
        assert_eq!(nearest_label(0.49), 0);
        assert_eq!(nearest_label(0.5), 0);
        assert_eq!(nearest_label(0.51), 1);
        assert_eq!(nearest_label(-4.0), 0);
        assert_eq!(nearest_label(7.0), 1);
        assert_eq!(nearest_label(f64::NAN), 0);
    }

    #[test]
    fn test_single_step_from_ones() {
        let (x, y) = square();
        let config = LmsConfig {
            learning_rate: 0.1,
            iterations: 1,
            seed: None,
        };
        let mut lms = LmsClassifier::with_config(config).unwrap();
        lms.fit_with_sampler(&x, &y, RoundRobinSampler::new()).unwrap();

        // row 0 augments to [0, 0, 1]: score 1, target 0, only the bias moves
        assert_eq!(lms.weights().unwrap(), &[1.0, 1.0, 0.9]);
    }

    #[test]
    fn test_refit_replaces_weights() {
        let (x, y) = square();
        let config = LmsConfig {
            learning_rate: 0.1,
            iterations: 1,
            seed: None,
        };
        let mut lms = LmsClassifier::with_config(config).unwrap();
        lms.fit_with_sampler(&x, &y, RoundRobinSampler::new()).unwrap();
        lms.fit_with_sampler(&x, &y, RoundRobinSampler::new()).unwrap();
        assert_eq!(lms.weights().unwrap(), &[1.0, 1.0, 0.9]);
    }

    #[test]
    fn test_config_validation() {
        for learning_rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = LmsConfig {
                learning_rate,
                ..Default::default()
            };
            assert!(matches!(
                LmsClassifier::with_config(config),
                Err(LmsError::InvalidConfig(_))
            ));
        }
        let config = LmsConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(LmsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_training_set() {
        let mut lms = LmsClassifier::new();
        let result = lms.fit(&FeatureMatrix::with_columns(2), &LabelVector::default());
        assert!(matches!(result, Err(LmsError::EmptyTrainingSet)));
        assert!(lms.weights().is_none());
    }

    #[test]
    fn test_zero_width_rows_fit_bias_only() {
        let x = FeatureMatrix::from_rows(vec![vec![], vec![]]).unwrap();
        let mut lms = LmsClassifier::new();

        let three = LabelVector::from_values([0, 1, 1]).unwrap();
        assert!(matches!(
            lms.fit(&x, &three),
            Err(LmsError::DimensionMismatch {
                expected: 2,
                got: 3,
                ..
            })
        ));

        let two = LabelVector::from_values([0, 1]).unwrap();
        lms.fit_with_sampler(&x, &two, RoundRobinSampler::new()).unwrap();
        assert_eq!(lms.weights().unwrap().len(), 1);
    }

    #[test]
    fn test_predict_column_mismatch() {
        let lms = LmsClassifier::from_weights(LmsConfig::default(), vec![1.0, 1.0, 1.0]).unwrap();
        let x = FeatureMatrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        assert!(matches!(
            lms.predict(&x),
            Err(LmsError::DimensionMismatch {
                expected: 2,
                got: 3,
                ..
            })
        ));
    }
}
