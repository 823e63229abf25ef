use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::calendar::{BucketSpan, CalendarBucket, Granularity, calendar_buckets};
use crate::errors::{AppError, AppResult};
use crate::models::{Event, YearMonth};
use crate::store::Mirror;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, REVERSE, color_for_status};
use crate::utils::date::{WEEKDAY_HEADERS, parse_date};
use chrono::Datelike;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Calendar {
        view,
        date,
        next,
        prev,
    } = cmd
    {
        let granularity = Granularity::from_code(view)?;

        let mut reference = match date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => ctx.today,
        };
        if *next {
            reference = granularity.step(reference, true);
        } else if *prev {
            reference = granularity.step(reference, false);
        }

        let mut store = ctx.open_store()?;
        let mirror = Mirror::attach(store.as_mut())?;
        let snapshot = mirror.snapshot();

        tracing::info!("calendar {} around {}", granularity.code(), reference);
        let buckets = calendar_buckets(&snapshot.events, reference, ctx.today, granularity);

        match granularity {
            Granularity::Monthly => print_month_grid(&buckets, YearMonth::from_date(reference)),
            Granularity::ThreeMonth => {
                header(format!("Three months around {}", YearMonth::from_date(reference).name()));
                print_month_buckets(&buckets);
            }
            Granularity::Annual => {
                header(format!("Year {}", reference.year()));
                print_month_buckets(&buckets);
            }
        }
    }

    Ok(())
}

fn print_month_grid(buckets: &[CalendarBucket<'_>], month: YearMonth) {
    header(format!("{} {}", month.name(), month.year));

    let head: Vec<String> = WEEKDAY_HEADERS.iter().map(|d| format!("{d:>5}")).collect();
    println!("{}", head.join(" "));

    for week in buckets.chunks(7) {
        let cells: Vec<String> = week.iter().map(grid_cell).collect();
        println!("{}", cells.join(" "));
    }
    println!();

    let with_events: Vec<&CalendarBucket<'_>> =
        buckets.iter().filter(|b| !b.events.is_empty()).collect();

    if with_events.is_empty() {
        println!("{GREY}No events in this view.{RESET}");
        return;
    }

    for bucket in with_events {
        if let BucketSpan::Day(day) = bucket.span {
            for ev in &bucket.events {
                print_event_line(&day.format("%a %d %b").to_string(), ev);
            }
        }
    }
}

/// Five columns: the day number and, when busy, a dot with the event count.
fn grid_cell(bucket: &CalendarBucket<'_>) -> String {
    let day = match bucket.span {
        BucketSpan::Day(d) => d.day(),
        BucketSpan::Month(m) => m.month,
    };

    let marker = match bucket.events.len() {
        0 => "  ".to_string(),
        n if n < 10 => format!("•{n}"),
        _ => "•+".to_string(),
    };

    let text = format!(" {day:>2}{marker}");

    if bucket.is_today {
        format!("{REVERSE}{text}{RESET}")
    } else if !bucket.is_current {
        format!("{GREY}{text}{RESET}")
    } else {
        text
    }
}

fn print_month_buckets(buckets: &[CalendarBucket<'_>]) {
    for bucket in buckets {
        let BucketSpan::Month(month) = bucket.span else {
            continue;
        };

        let mut title = format!("{} {} ({} event(s))", month.name(), month.year, bucket.events.len());
        if bucket.is_today {
            title.push_str("  ◀ today");
        }

        if bucket.is_current {
            println!("{title}");
        } else {
            println!("{GREY}{title}{RESET}");
        }

        for ev in &bucket.events {
            print_event_line(&ev.date.format("  %d %a").to_string(), ev);
        }
    }
}

fn print_event_line(when: &str, ev: &Event) {
    let color = color_for_status(ev.status);
    println!(
        "{when}  #{:<4} {}  {color}[{}]{RESET}",
        ev.id,
        ev.title,
        ev.status.to_db_str()
    );
}
