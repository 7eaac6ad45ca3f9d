use chrono::{Datelike, Local};
use std::collections::HashMap;

use pathway_core::progress::calendar::{MonthView, WEEKDAYS};
use pathway_core::progress::{today_key, DailyScore, SCORES_KEY};
use pathway_core::storage::{Database, ProgressStore};

pub fn run(year: Option<i32>, month: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let scores: HashMap<String, DailyScore> = db.get_all(SCORES_KEY);

    let today = Local::now().date_naive();
    let view = MonthView::new(
        year.unwrap_or_else(|| today.year()),
        month.unwrap_or_else(|| today.month()),
    );

    println!("Your progress");
    println!("Check = you practiced. Score is shown next to the day.\n");
    println!("{} {}", view.month_name(), view.year);

    for weekday in WEEKDAYS {
        print!("{weekday:>8}");
    }
    println!();

    for (i, cell) in view.cells.iter().enumerate() {
        match cell {
            None => print!("{:>8}", ""),
            Some(day) => match view.mark(&scores, *day) {
                Some(entry) => print!("{:>8}", format!("{day} {}/{}", entry.score, entry.total)),
                None => print!("{day:>8}"),
            },
        }
        if (i + 1) % 7 == 0 {
            println!();
        }
    }
    println!();

    if let Some(entry) = scores.get(&today_key()) {
        println!("Today's score: {} / {}", entry.score, entry.total);
    }

    Ok(())
}
