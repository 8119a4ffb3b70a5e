use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use planner_core::Planner;
use planner_core::month::{DayCell, MonthGrid};
use planner_core::store::Backend;

use crate::render::{Render, pluralize, render_day_number};

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

pub fn run<B: Backend>(planner: &Planner<B>, today: NaiveDate, json: bool) -> Result<()> {
    let (year, month) = planner.current_month();
    let grid = planner
        .month_grid(today)
        .with_context(|| format!("Failed to build grid for {year}-{month:02}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    print_grid(&grid);

    let notable: Vec<&DayCell> = grid
        .days
        .iter()
        .filter(|cell| cell.is_holiday() || !cell.previews.is_empty())
        .collect();

    if !notable.is_empty() {
        println!();
    }
    for cell in notable {
        print_day_summary(cell);
    }

    Ok(())
}

fn print_grid(grid: &MonthGrid) {
    let title = NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();

    println!("{:^28}", title.bold());
    println!("{}", WEEKDAY_HEADER.dimmed());

    let mut line = String::new();
    let mut column = 0;

    for filler in &grid.leading {
        line.push_str(&format!(" {:>2} ", filler.day).dimmed().to_string());
        column += 1;
    }

    for cell in &grid.days {
        let mark = if cell.previews.is_empty() { " " } else { "•" };
        line.push_str(&format!(" {}{}", render_day_number(cell), mark));
        column += 1;

        if column % 7 == 0 {
            println!("{}", line);
            line.clear();
        }
    }

    if !line.is_empty() {
        println!("{}", line);
    }
}

fn print_day_summary(cell: &DayCell) {
    let label = cell.date.date().format("%a %-d").to_string();
    match &cell.holiday {
        Some(name) => println!("{} {}", label.bold(), name.red()),
        None => println!("{}", label.bold()),
    }

    for preview in &cell.previews {
        println!("   {}", preview.render());
    }

    if cell.overflow > 0 {
        let more = format!("+ {} more {}", cell.overflow, pluralize("event", cell.overflow));
        println!("   {}", more.dimmed());
    }
}
