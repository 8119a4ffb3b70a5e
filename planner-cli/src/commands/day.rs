use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use planner_core::Planner;
use planner_core::store::Backend;
use planner_core::timeline::TimelineSlot;

use crate::render::{Render, pluralize};

/// Indentation per stacking level, in columns.
const STACK_INDENT: usize = 2;

/// Print the timeline of the selected day.
pub fn run<B: Backend>(planner: &Planner<B>, all: bool, json: bool) -> Result<()> {
    let date = planner.selected().context("No day selected")?;
    let timeline = planner.day_timeline(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    let heading = date.date().format("%A, %B %-d, %Y").to_string();
    match planner.holidays().lookup(date) {
        Some(name) => println!("{} {}", heading.bold(), name.red()),
        None => println!("{}", heading.bold()),
    }

    if !all && timeline.occupied().next().is_none() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    for slot in &timeline.slots {
        if all || !slot.events.is_empty() {
            print_slot(slot);
        }
    }

    Ok(())
}

fn print_slot(slot: &TimelineSlot) {
    let label = slot.label.to_string();

    if slot.events.is_empty() {
        println!("{} {}", label.dimmed(), "│".dimmed());
        return;
    }

    for (i, entry) in slot.events.iter().enumerate() {
        let gutter = if i == 0 { label.clone() } else { " ".repeat(label.len()) };
        let indent = " ".repeat(entry.stack * STACK_INDENT);
        let span = format!(
            "({} {})",
            entry.duration_slots,
            pluralize("slot", entry.duration_slots)
        );

        println!(
            "{} {} {}{} {}",
            gutter,
            "│".dimmed(),
            indent,
            entry.render(),
            span.dimmed()
        );
    }
}
