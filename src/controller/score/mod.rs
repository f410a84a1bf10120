pub mod analysis;
pub mod chart_data;
pub mod score_aggregators;
pub mod sort_utils;
pub mod streaks;

pub use analysis::*;
pub use chart_data::*;
pub use score_aggregators::*;
pub use sort_utils::*;
pub use streaks::*;
