use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::store::Backend;
use planner_core::{DateKey, Planner};

use super::warn_if_not_saved;

pub fn run<B: Backend>(planner: &mut Planner<B>, date: DateKey, index: usize) -> Result<()> {
    let title = match planner.events(date).get(index) {
        Some(event) => event.title.clone(),
        None => {
            println!("{}", format!("No event #{} on {}", index, date).dimmed());
            return Ok(());
        }
    };

    if let Some(Some(completed)) = warn_if_not_saved(planner.toggle_completed(date, index))? {
        if completed {
            println!("{} {}", "✓".green(), title.strikethrough());
        } else {
            println!("{} {}", "○".dimmed(), title);
        }
    }

    Ok(())
}
