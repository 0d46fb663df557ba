pub mod classifier;
pub mod manager;

pub use classifier::PotholeClassifier;
pub use manager::{get_classifier, ModelManager};
