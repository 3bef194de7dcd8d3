use crate::{
    error::{LmsError, Result},
    matrix::LabelVector,
};

/// Mean squared error between scores and real-valued targets. Empty input gives 0.
pub fn mse_loss(input: &[f64], target: &[f64]) -> Result<f64> {
    if input.len() != target.len() {
        return Err(LmsError::mismatch("mse_loss target", input.len(), target.len()));
    }
    if input.is_empty() {
        return Ok(0.0);
    }

    let sum: f64 = input
        .iter()
        .zip(target)
        .map(|(input_i, target_i)| (input_i - target_i).powi(2))
        .sum();
    Ok(sum / input.len() as f64)
}

/// Fraction of predictions equal to the truth. Empty input gives 0.
pub fn accuracy(truth: &LabelVector, predicted: &LabelVector) -> Result<f64> {
    if truth.len() != predicted.len() {
        return Err(LmsError::mismatch("accuracy predictions", truth.len(), predicted.len()));
    }
    if truth.is_empty() {
        return Ok(0.0);
    }

    let correct = truth
        .iter()
        .zip(predicted.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / truth.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse_loss() {
        let loss = mse_loss(&[0.5, 1.0, -1.0], &[0.0, 1.0, 1.0]).unwrap();
        assert!((loss - (0.25 + 0.0 + 4.0) / 3.0).abs() < 1e-12, "{}", loss);
        assert_eq!(mse_loss(&[], &[]).unwrap(), 0.0);
        assert!(mse_loss(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_accuracy() {
        let truth = LabelVector::from_values([0, 0, 1, 1]).unwrap();
        let predicted = LabelVector::from_values([0, 1, 1, 1]).unwrap();
        assert_eq!(accuracy(&truth, &predicted).unwrap(), 0.75);
        assert_eq!(accuracy(&truth, &truth).unwrap(), 1.0);
        assert!(accuracy(&truth, &LabelVector::default()).is_err());
    }
}
