//! Parallel access-window computation over a fleet's satellites, sensors,
//! and areas of interest.

pub mod error;
mod result;
mod unit_of_work;
mod worker_pool;

pub use error::PreprocessorError;
pub use result::{PreprocessedAoi, PreprocessingResult};
pub use unit_of_work::UnitOfWork;
pub use worker_pool::run;
