pub mod pipeline;
pub mod types;

pub use pipeline::ClassifyPipeline;
pub use types::{Prediction, LABEL_PLAIN_ROAD, LABEL_POTHOLE, POTHOLE_THRESHOLD};
