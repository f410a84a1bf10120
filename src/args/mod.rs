pub mod paths;
pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;

#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    args.clean()
}
