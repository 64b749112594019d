use crate::cli::commands::clock_for;
use crate::cli::parser::Cli;
use crate::core::calendar::MealCalendar;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::time::format_time;

/// Handle the `meals` command: serving windows, edit deadlines and live status.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let now = clock_for(cli)?.now();
    let at = now.time();
    let next = MealCalendar::next_meal(at);

    header(format!("Meals on {}", now.format("%Y-%m-%d %H:%M")));

    for meal in MealCalendar::order() {
        let timing = MealCalendar::timing(meal);
        let status = MealCalendar::status_at(meal, at);
        let marker = if next == Some(meal) { "  ← next" } else { "" };

        println!(
            "{} {:<10} {}–{} ({:>3} min)  edit until {}  {}{:<12}{}{}",
            meal.icon(),
            meal.as_str(),
            format_time(timing.serving_start),
            format_time(timing.serving_end),
            timing.duration().num_minutes(),
            format_time(timing.edit_deadline),
            color_for_status(status),
            status.label(),
            RESET,
            marker
        );
    }

    if next.is_none() {
        info("All meals for today are over.");
    }

    Ok(())
}
