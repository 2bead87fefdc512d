pub mod batch;
pub mod input;
pub mod promoter;

pub use batch::{run, run_batch, BatchReport, RequestOutcome};
pub use promoter::Promoter;
