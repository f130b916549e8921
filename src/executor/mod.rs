pub mod dispatcher;
pub mod report;
pub mod runner;

pub use dispatcher::MessageDispatcher;
pub use report::{RunReport, SendResult};
pub use runner::{BulkRunner, Pacing, RunState};
