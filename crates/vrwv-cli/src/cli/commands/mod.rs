//! CLI command handlers, one per file.

mod check;
mod completions;
mod demo;
mod normalize;
mod rules;
mod sync;

pub use check::run_check;
pub use completions::run_completions;
pub use demo::run_demo;
pub use normalize::run_normalize;
pub use rules::run_rules;
pub use sync::run_sync;
