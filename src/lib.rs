pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod loader;
    pub mod pipeline;
    pub mod score;
}
pub mod view {
    pub mod score;
}

pub use controller::pipeline::{PipelineOutput, run_analysis};
pub use error::GolfError;
