mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use nest_api::{
    adapters::{
        inbound::http::{CreateTaskPayload, MonthAgendaResponse, MonthGridResponse},
        outbound::InMemoryTaskStore,
    },
    config::{read_config, Settings},
    domain::{
        models::MonthAgenda,
        ports::inbound::PlannerService,
        services::PlannerServiceImpl,
    },
};
use nest_calendar::{
    build_month_grid_with, format_date_string, parse_date_string,
    schedule::{format_iso, ScheduledAt},
    to_task_identity, weekday_of, CalendarDate, CalendarTime, LegacyTaskKey, MonthGrid,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = read_config().context("Failed to read configuration")?;
    init_tracing(&settings.application.log_level);

    run(cli, &settings).await
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, settings: &Settings) -> Result<()> {
    match cli.command {
        Commands::Grid {
            month,
            year,
            layout,
        } => {
            let layout = layout.unwrap_or(settings.calendar.grid_layout);
            let grid = build_month_grid_with(month, year, layout)?;
            if cli.json {
                print_json(&MonthGridResponse::from(&grid))?;
            } else {
                print!("{}", render_grid(&grid));
            }
        }
        Commands::Weekday { day, month, year } => {
            let weekday = weekday_of(day, month, year)?;
            if cli.json {
                print_json(&json!({ "weekday": weekday.index(), "name": weekday.to_string() }))?;
            } else {
                println!("{} ({})", weekday, weekday.index());
            }
        }
        Commands::Identity {
            day,
            month,
            year,
            time,
        } => {
            let date = CalendarDate::new(day, month, year)?;
            let time: CalendarTime = time.parse()?;
            let identity = to_task_identity(&date, &time)?;
            let legacy = LegacyTaskKey::new(&date, &time);
            if cli.json {
                print_json(&json!({ "identity": identity, "legacyKey": legacy.as_str() }))?;
            } else {
                println!("identity   {identity}");
                println!("legacy key {legacy}");
            }
        }
        Commands::ParseDate { value } => {
            let date = parse_date_string(&value)?;
            if cli.json {
                print_json(&date)?;
            } else {
                println!("{} ({})", date, date.weekday());
            }
        }
        Commands::Normalize { value } => {
            let resolution = settings.calendar.date_resolution()?;
            let scheduled = ScheduledAt::parse(&value)?;
            let timestamp = scheduled.resolve(resolution.default_time, resolution.utc_offset)?;
            let iso = format_iso(timestamp)?;
            let date_string = format_date_string(&scheduled.date(resolution.utc_offset));
            if cli.json {
                print_json(&json!({ "date": iso, "dateString": date_string }))?;
            } else {
                println!("{iso}  {date_string}");
            }
        }
        Commands::Agenda { tasks, month, year } => {
            let raw = std::fs::read_to_string(&tasks)
                .with_context(|| format!("Failed to read tasks at {}", tasks.display()))?;
            let payloads: Vec<CreateTaskPayload> = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse tasks at {}", tasks.display()))?;

            let options = settings.calendar.planner_options()?;
            let resolution = settings.calendar.date_resolution()?;
            let service =
                PlannerServiceImpl::with_options(Arc::new(InMemoryTaskStore::new()), options);

            for payload in payloads {
                let title = payload.title.clone();
                let task = payload.into_new_task(&resolution)?;
                service
                    .schedule_task(&task)
                    .await
                    .with_context(|| format!("Failed to schedule '{title}'"))?;
            }

            let agenda = service.month_agenda(month, year).await?;
            if cli.json {
                print_json(&MonthAgendaResponse::from_agenda(agenda, options.utc_offset))?;
            } else {
                print!("{}", render_agenda(&agenda, options.utc_offset));
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_grid(grid: &MonthGrid) -> String {
    let mut out = format!("{:04}-{:02}\n", grid.year(), grid.month() + 1);
    out.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");
    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                if cell.in_month() {
                    format!(" {:>2} ", cell.date.day())
                } else {
                    format!("({:>2})", cell.date.day())
                }
            })
            .collect();
        out.push_str(row.join("").trim_end());
        out.push('\n');
    }
    out
}

fn render_agenda(agenda: &MonthAgenda, offset: time::UtcOffset) -> String {
    let mut out = format!(
        "{:04}-{:02}: {} tasks, {} open\n",
        agenda.year,
        agenda.month + 1,
        agenda.task_count(),
        agenda.open_task_count()
    );
    for day in agenda.days.iter().filter(|day| !day.tasks.is_empty()) {
        out.push_str(&format!("{} {}\n", day.cell.date, day.cell.weekday));
        for task in &day.tasks {
            let (_, time) = nest_calendar::schedule::split_timestamp(task.scheduled_at, offset);
            let mark = if task.is_completed { "x" } else { " " };
            out.push_str(&format!("  [{mark}] {time} {} ({})\n", task.title, task.id));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nest_calendar::build_month_grid;

    #[test]
    fn grid_renders_six_rows_with_neighbours_in_parentheses() {
        let rendered = render_grid(&build_month_grid(0, 2024).unwrap());
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "2024-01");
        assert!(lines[2].starts_with("(24)(25)"));
        assert!(lines[3].starts_with("(31)  1 "));
    }

    #[tokio::test]
    async fn agenda_lists_only_days_with_tasks() {
        let service = PlannerServiceImpl::new(Arc::new(InMemoryTaskStore::new()));
        let payload: CreateTaskPayload =
            serde_json::from_str(r#"{"title":"Feed","date":"2024-01-05T09:30:00Z"}"#).unwrap();
        service
            .schedule_task(&payload.try_into().unwrap())
            .await
            .unwrap();

        let agenda = service.month_agenda(0, 2024).await.unwrap();
        let rendered = render_agenda(&agenda, time::UtcOffset::UTC);

        assert_eq!(
            rendered,
            "2024-01: 1 tasks, 1 open\n2024-01-05 Friday\n  [ ] 09:30:00 Feed (20240105093000)\n"
        );
    }
}
