// Fetches the labeled bill set, fits the pipeline and reports metrics

use anyhow::{ensure, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::congress::CongressClient;
use crate::model::StancePipeline;

pub const CONGRESS_SESSION: u32 = 117;
pub const HOUSE_BILL_TYPE: &str = "hr";

// Fraction of rows held out for evaluation, and the split seed
const TEST_SIZE: f64 = 0.8;
const SPLIT_SEED: u64 = 32;

/// Hand-labeled House bills from the 117th Congress. Each bill number is
/// paired with its stance label explicitly so the two cannot drift apart.
pub const TRAINING_SET: &[(u32, &str)] = &[
    (21, "Middle"),
    (22, "Republican"),
    (23, "Middle"),
    (24, "Republican"),
    (25, "Republican"),
    (29, "Democratic"),
    (65, "Middle"),
    (69, "Republican"),
    (71, "Republican"),
    (75, "Democratic"),
    (79, "Middle"),
    (108, "Republican"),
    (112, "Republican"),
    (208, "Middle"),
    (340, "Republican"),
    (355, "Democratic"),
    (370, "Republican"),
    (401, "Middle"),
    (410, "Republican"),
    (450, "Democratic"),
];

/// Per-class evaluation metrics
#[derive(Debug, Clone)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Outcome of one training run
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub accuracy: f64,
    pub per_class: Vec<ClassMetrics>,
    pub train_size: usize,
    pub test_size: usize,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy: {:.4}", self.accuracy)?;
        writeln!(f, "Classification Report:")?;
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        for metrics in &self.per_class {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                metrics.label, metrics.precision, metrics.recall, metrics.f1, metrics.support
            )?;
        }
        write!(
            f,
            "(trained on {} bills, evaluated on {})",
            self.train_size, self.test_size
        )
    }
}

/// Fetch every bill in the training set, fit the pipeline on a seeded
/// train/test split, evaluate on the held-out rows and save the artifact.
pub async fn run_training(client: &CongressClient, model_path: &Path) -> Result<TrainingReport> {
    tracing::info!(
        congress = CONGRESS_SESSION,
        bills = TRAINING_SET.len(),
        "Fetching bill data"
    );

    let mut rows: Vec<(String, String)> = Vec::with_capacity(TRAINING_SET.len());
    for &(bill_num, label) in TRAINING_SET {
        let bill = client
            .fetch_bill(CONGRESS_SESSION, HOUSE_BILL_TYPE, bill_num)
            .await
            .with_context(|| format!("Failed to fetch bill hr {bill_num}"))?;

        tracing::info!(bill_num, title = %bill.title, "Fetched bill");
        rows.push((bill.text, label.to_string()));
    }

    let (train, test) = train_test_split(&rows, TEST_SIZE, SPLIT_SEED);
    ensure!(!train.is_empty(), "Train split is empty");
    ensure!(!test.is_empty(), "Test split is empty");

    let (train_texts, train_labels): (Vec<String>, Vec<String>) = train.into_iter().unzip();
    let pipeline = StancePipeline::fit(&train_texts, &train_labels)?;

    let actual: Vec<String> = test.iter().map(|(_, label)| label.clone()).collect();
    let predicted: Vec<String> = test
        .iter()
        .map(|(text, _)| pipeline.predict(text).to_string())
        .collect();

    let report = TrainingReport {
        accuracy: accuracy(&actual, &predicted),
        per_class: classification_report(&actual, &predicted),
        train_size: train_texts.len(),
        test_size: actual.len(),
    };

    pipeline.save(model_path)?;

    Ok(report)
}

/// Seeded shuffle split; `test_size` is the held-out fraction
pub fn train_test_split<T: Clone>(rows: &[T], test_size: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((rows.len() as f64) * test_size).round() as usize;
    let (test_indices, train_indices) = indices.split_at(n_test.min(rows.len()));

    let train = train_indices.iter().map(|&i| rows[i].clone()).collect();
    let test = test_indices.iter().map(|&i| rows[i].clone()).collect();
    (train, test)
}

fn accuracy(actual: &[String], predicted: &[String]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let correct = actual
        .iter()
        .zip(predicted)
        .filter(|(a, p)| a == p)
        .count();
    correct as f64 / actual.len() as f64
}

fn classification_report(actual: &[String], predicted: &[String]) -> Vec<ClassMetrics> {
    let labels: BTreeSet<&String> = actual.iter().chain(predicted).collect();

    labels
        .into_iter()
        .map(|label| {
            let tp = actual
                .iter()
                .zip(predicted)
                .filter(|(a, p)| *a == label && *p == label)
                .count() as f64;
            let predicted_positive = predicted.iter().filter(|p| *p == label).count() as f64;
            let support = actual.iter().filter(|a| *a == label).count();

            let precision = if predicted_positive > 0.0 {
                tp / predicted_positive
            } else {
                0.0
            };
            let recall = if support > 0 { tp / support as f64 } else { 0.0 };
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            ClassMetrics {
                label: label.clone(),
                precision,
                recall,
                f1,
                support,
            }
        })
        .collect()
}
