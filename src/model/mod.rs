pub mod analysis;
pub mod defaults;
pub mod score;

pub use analysis::*;
pub use defaults::*;
pub use score::*;
