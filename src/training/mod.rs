// Bulk fetch-and-train flow

mod trainer;

pub use trainer::{
    run_training, train_test_split, ClassMetrics, TrainingReport, CONGRESS_SESSION,
    HOUSE_BILL_TYPE, TRAINING_SET,
};
