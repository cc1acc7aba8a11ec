// Multinomial Naive Bayes over sparse TF-IDF vectors

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// Laplace smoothing
const ALPHA: f64 = 1.0;

/// Multinomial Naive Bayes classifier. Classes are ordered
/// lexicographically; probabilities are normalized with log-sum-exp so each
/// lies in [0, 1] and they sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit the classifier on sparse feature vectors and their labels
    pub fn fit(rows: &[HashMap<usize, f64>], labels: &[String], n_features: usize) -> Result<Self> {
        ensure!(!rows.is_empty(), "Cannot fit Naive Bayes on an empty set");
        ensure!(
            rows.len() == labels.len(),
            "Feature rows ({}) and labels ({}) differ in length",
            rows.len(),
            labels.len()
        );

        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let class_index: HashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        let mut class_counts = vec![0usize; classes.len()];
        let mut feature_counts = vec![vec![0.0f64; n_features]; classes.len()];

        for (row, label) in rows.iter().zip(labels) {
            let c = class_index[label.as_str()];
            class_counts[c] += 1;
            for (&feature, &value) in row {
                feature_counts[c][feature] += value;
            }
        }

        let n_samples = rows.len() as f64;
        let class_log_prior = class_counts
            .iter()
            .map(|&count| (count as f64 / n_samples).ln())
            .collect();

        let feature_log_prob = feature_counts
            .iter()
            .map(|counts| {
                let total: f64 = counts.iter().sum::<f64>() + ALPHA * n_features as f64;
                counts
                    .iter()
                    .map(|&count| ((count + ALPHA) / total).ln())
                    .collect()
            })
            .collect();

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Class labels in prediction order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Per-class probabilities for one sparse feature vector
    pub fn predict_proba(&self, row: &HashMap<usize, f64>) -> Vec<f64> {
        let joint: Vec<f64> = (0..self.classes.len())
            .map(|c| {
                let likelihood: f64 = row
                    .iter()
                    .map(|(&feature, &value)| value * self.feature_log_prob[c][feature])
                    .sum();
                self.class_log_prior[c] + likelihood
            })
            .collect();

        // Normalize in log space to avoid underflow
        let max = joint.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let log_sum = max + joint.iter().map(|j| (j - max).exp()).sum::<f64>().ln();

        joint.iter().map(|j| (j - log_sum).exp()).collect()
    }

    /// Most probable class label for one sparse feature vector
    pub fn predict(&self, row: &HashMap<usize, f64>) -> &str {
        let probabilities = self.predict_proba(row);
        let best = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(index, _)| index)
            .unwrap_or(0);
        &self.classes[best]
    }
}
