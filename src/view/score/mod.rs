pub mod chart;
pub mod summary;
pub mod template;
pub mod types;
pub mod utils;

pub use chart::*;
pub use summary::*;
pub use template::*;
pub use types::*;
pub use utils::*;
