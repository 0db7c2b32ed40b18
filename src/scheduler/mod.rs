//! The pushbroom batch scheduler: per-(satellite, sensor) MILP solving,
//! duty-cycle accounting, and the resulting schedule/result taxonomy.

pub mod batch;
pub mod duty_cycle;
pub mod error;
pub mod model;
pub mod result_code;
pub mod schedule;

pub use batch::{schedule_all, BatchResult, SensorConfig};
pub use duty_cycle::DutyCycleTracker;
pub use error::{ScheduleError, SchedulerError};
pub use model::{solve_batch, SolvedInterval};
pub use result_code::ResultCode;
pub use schedule::{Schedule, ScheduleActivity};
