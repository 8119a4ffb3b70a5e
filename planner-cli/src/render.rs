//! Terminal rendering for planner projections.
//!
//! Extension traits that turn planner-core's plain projection data into
//! colored lines using owo_colors.

use owo_colors::OwoColorize;
use planner_core::month::{DayCell, DayMarker, EventPreview};
use planner_core::priority::PriorityClass;
use planner_core::timeline::TimelineEntry;

pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to priority class
fn colorize_priority(priority: PriorityClass, text: &str) -> String {
    match priority {
        PriorityClass::High => text.red().bold().to_string(),
        PriorityClass::Urgent => text.red().to_string(),
        PriorityClass::Important => text.yellow().to_string(),
        PriorityClass::Normal => text.blue().to_string(),
    }
}

fn badges(urgent: bool, important: bool) -> String {
    let mut out = String::new();
    if urgent {
        out.push_str(&"!".red().to_string());
    }
    if important {
        out.push_str(&"★".yellow().to_string());
    }
    out
}

/// Day number padded to the grid column, colored by its marker.
pub fn render_day_number(cell: &DayCell) -> String {
    let number = format!("{:>2}", cell.day);
    let number = match cell.marker {
        DayMarker::Red => number.red().to_string(),
        DayMarker::Blue => number.blue().to_string(),
        DayMarker::Plain => number,
    };

    if cell.is_today {
        number.reversed().to_string()
    } else {
        number
    }
}

impl Render for EventPreview {
    fn render(&self) -> String {
        let title = colorize_priority(self.priority, &self.title);
        if self.completed {
            format!("{} {}", "✓".green(), title.strikethrough().dimmed())
        } else {
            format!("• {}", title)
        }
    }
}

impl Render for TimelineEntry {
    fn render(&self) -> String {
        let number = format!("[{}]", self.index);
        let range = match self.end {
            Some(end) => format!("{} ~ {}", self.start, end),
            None => self.start.to_string(),
        };
        let flags = badges(self.urgent, self.important);
        let title = colorize_priority(self.priority, &self.title);

        let body = if flags.is_empty() {
            title
        } else {
            format!("{} {}", flags, title)
        };

        if self.completed {
            format!(
                "{} {} {} {}",
                number.dimmed(),
                "✓".green(),
                body.strikethrough().dimmed(),
                range.dimmed()
            )
        } else {
            format!("{} {} {}", number.dimmed(), body, range.dimmed())
        }
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
