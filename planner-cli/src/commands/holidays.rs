use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::Planner;
use planner_core::store::Backend;

pub fn run<B: Backend>(planner: &Planner<B>) -> Result<()> {
    for holiday in planner.holidays().iter() {
        let label = holiday.date.date().format("%a %b %-d").to_string();
        println!("  {} {} {}", holiday.date, label.dimmed(), holiday.name.red());
    }
    Ok(())
}
