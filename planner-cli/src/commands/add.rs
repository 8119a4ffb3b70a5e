use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::store::Backend;
use planner_core::{DateKey, EventDraft, Planner, PlannerError, TimeOfDay, ValidationError};

use super::warn_if_not_saved;

pub fn run<B: Backend>(
    planner: &mut Planner<B>,
    date: DateKey,
    title: String,
    start: TimeOfDay,
    end: TimeOfDay,
    urgent: bool,
    important: bool,
) -> Result<()> {
    let draft = EventDraft::new(title, start, end)
        .urgent(urgent)
        .important(important);
    let summary = format!("{} {} ~ {}", draft.title, start, end);

    match planner.add_event(date, draft) {
        Err(PlannerError::Validation(e)) => anyhow::bail!(validation_message(e)),
        result => {
            if warn_if_not_saved(result)?.is_some() {
                println!("{} {} {}", "+".green(), summary.green(), date.dimmed());
            }
        }
    }

    Ok(())
}

fn validation_message(error: ValidationError) -> &'static str {
    match error {
        ValidationError::EmptyTitle => "Please enter a title for the event.",
        ValidationError::InvalidRange => "The end time must be later than the start time.",
        ValidationError::Overlap => {
            "Another event is already scheduled at that time.\nPlease adjust the time."
        }
    }
}
