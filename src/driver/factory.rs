use crate::config::Config;
use crate::driver::{
    browser::BrowserDriver, dry_run::DryRunDriver, helper::HelperDriver, MessageDriver,
};
use crate::error::{Result, SenderError};
use std::sync::Arc;

/// Driver factory for creating delivery backends based on the driver name
pub struct DriverFactory;

impl DriverFactory {
    /// Create a driver instance based on the driver name
    ///
    /// # Errors
    /// * Returns `SenderError::UnknownDriver` if the driver name is unknown
    pub fn create(driver_name: &str, config: &Config) -> Result<Arc<dyn MessageDriver>> {
        match driver_name.to_lowercase().as_str() {
            "browser" => Ok(Arc::new(BrowserDriver::new())),
            "helper" => Ok(Arc::new(HelperDriver::new(
                config.helper_command.clone(),
                config.helper_timeout(),
            ))),
            "dry-run" | "dryrun" => Ok(Arc::new(DryRunDriver::new())),
            _ => Err(SenderError::UnknownDriver(format!(
                "{} (supported: {})",
                driver_name,
                Self::supported_drivers().join(", ")
            ))),
        }
    }

    pub fn supported_drivers() -> Vec<&'static str> {
        vec!["browser", "helper", "dry-run"]
    }
}
