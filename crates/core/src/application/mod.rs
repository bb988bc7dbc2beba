// Application Layer - Use Cases

pub mod check;
pub mod constants;
pub mod evaluator;
pub mod report;

// Re-exports
pub use check::CheckService;
pub use evaluator::{Evaluator, StatsPolicy};
pub use report::Report;
