pub mod prompt;
pub mod progress;

pub use prompt::{ConfirmPrompt, InputCollector, RunSummary};
pub use progress::{create_spinner, BatchProgressDisplay};
