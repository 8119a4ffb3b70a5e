use anyhow::{Context, Result};
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use planner_core::store::Backend;
use planner_core::{DateKey, Planner};

use super::warn_if_not_saved;

pub fn run<B: Backend>(planner: &mut Planner<B>, date: DateKey, index: usize, yes: bool) -> Result<()> {
    let Some(event) = planner.events(date).get(index) else {
        println!("{}", format!("No event #{} on {}", index, date).dimmed());
        return Ok(());
    };

    // Confirm unless --yes
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete \"{}\" ({}) on {}?",
                event.title, event.start_time, date
            ))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            return Ok(());
        }
    }

    if let Some(Some(removed)) = warn_if_not_saved(planner.remove_event(date, index))? {
        println!("{} {}", "-".red(), removed.title.red());
    }

    Ok(())
}
