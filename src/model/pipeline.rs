// Fitted vectorizer + classifier artifact with JSON persistence

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::naive_bayes::MultinomialNb;
use super::vectorizer::TfidfVectorizer;

/// The combined TF-IDF + Naive Bayes pipeline. Created by the train flow,
/// persisted as JSON, and loaded read-only by the serve flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StancePipeline {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
    trained_at: DateTime<Utc>,
}

impl StancePipeline {
    /// Fit the vectorizer and classifier on a labeled corpus
    pub fn fit(texts: &[String], labels: &[String]) -> Result<Self> {
        let vectorizer = TfidfVectorizer::fit(texts);
        let rows: Vec<_> = texts.iter().map(|text| vectorizer.transform(text)).collect();
        let classifier = MultinomialNb::fit(&rows, labels, vectorizer.n_features())?;

        Ok(Self {
            vectorizer,
            classifier,
            trained_at: Utc::now(),
        })
    }

    /// Class labels known to the fitted classifier
    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    /// Predicted label for one document
    pub fn predict(&self, text: &str) -> &str {
        self.classifier.predict(&self.vectorizer.transform(text))
    }

    /// Per-class probabilities for one document, paired with class labels
    pub fn predict_proba(&self, text: &str) -> Vec<(String, f64)> {
        let probabilities = self
            .classifier
            .predict_proba(&self.vectorizer.transform(text));
        self.classes()
            .iter()
            .cloned()
            .zip(probabilities)
            .collect()
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    /// Persist the fitted pipeline as JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self).context("Failed to serialize pipeline")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write pipeline to {}", path.display()))?;

        tracing::info!(path = %path.display(), "Saved trained pipeline");
        Ok(())
    }

    /// Load a previously saved pipeline
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pipeline from {}", path.display()))?;
        let pipeline =
            serde_json::from_str(&contents).context("Failed to deserialize pipeline")?;

        tracing::info!(path = %path.display(), "Loaded trained pipeline");
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> StancePipeline {
        let texts = vec![
            "worker union wage protection".to_string(),
            "union labor wage rights".to_string(),
            "border security enforcement wall".to_string(),
            "border patrol security funding".to_string(),
        ];
        let labels = vec![
            "Democratic".to_string(),
            "Democratic".to_string(),
            "Republican".to_string(),
            "Republican".to_string(),
        ];
        StancePipeline::fit(&texts, &labels).unwrap()
    }

    #[test]
    fn test_fit_and_predict() {
        let pipeline = fitted();
        assert_eq!(pipeline.classes(), ["Democratic", "Republican"]);
        assert_eq!(pipeline.predict("union wage"), "Democratic");
        assert_eq!(pipeline.predict("border security"), "Republican");
    }

    #[test]
    fn test_predict_proba_covers_all_classes() {
        let pipeline = fitted();
        let probabilities = pipeline.predict_proba("wage protection");
        assert_eq!(probabilities.len(), 2);
        let sum: f64 = probabilities.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(probabilities.iter().all(|(_, p)| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_save_load_round_trip() {
        let pipeline = fitted();
        let file = tempfile::NamedTempFile::new().unwrap();
        pipeline.save(file.path()).unwrap();

        let loaded = StancePipeline::load(file.path()).unwrap();
        assert_eq!(loaded.classes(), pipeline.classes());
        assert_eq!(loaded.trained_at(), pipeline.trained_at());
        assert_eq!(loaded.predict("union wage"), pipeline.predict("union wage"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(StancePipeline::load(Path::new("/nonexistent/model.json")).is_err());
    }

    #[test]
    fn test_fit_rejects_empty_corpus() {
        assert!(StancePipeline::fit(&[], &[]).is_err());
    }
}
