pub mod add;
pub mod day;
pub mod holidays;
pub mod month;
pub mod remove;
pub mod toggle;

use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::{PlannerError, PlannerResult};

/// Downgrade a failed write to a warning. The change itself was applied.
pub fn warn_if_not_saved<T>(result: PlannerResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(PlannerError::Persistence(reason)) => {
            eprintln!("{} {}", "Warning: changes may not be saved:".yellow(), reason);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
