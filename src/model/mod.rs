// Text classification pipeline: TF-IDF vectorizer + multinomial Naive Bayes

mod naive_bayes;
mod pipeline;
mod vectorizer;

pub use naive_bayes::MultinomialNb;
pub use pipeline::StancePipeline;
pub use vectorizer::TfidfVectorizer;
