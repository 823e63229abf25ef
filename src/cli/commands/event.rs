use crate::cli::context::Context;
use crate::cli::parser::{Commands, EventAction, EventFields};
use crate::core::form::EventForm;
use crate::core::upcoming_events;
use crate::errors::{AppError, AppResult};
use crate::models::{Event, RecordId, YearMonth};
use crate::store::{Mirror, RecordStore, persist_event};
use crate::ui::messages::{confirm, header, info, success};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::resolve_month;
use crate::utils::formatting::pad_right;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Event { action } = cmd {
        let mut store = ctx.open_store()?;

        match action {
            EventAction::Add {
                title,
                date,
                fields,
                repeat,
                until,
            } => {
                let mut form = EventForm {
                    title: title.clone(),
                    date: date.clone(),
                    repeat: repeat.clone().unwrap_or_default(),
                    repeat_until: until.clone().unwrap_or_default(),
                    ..EventForm::default()
                };
                apply_fields(&mut form, fields);
                add(store.as_mut(), form, ctx)?;
            }
            EventAction::Edit {
                id,
                title,
                date,
                fields,
                clear_lists,
            } => {
                let current = fetch(store.as_ref(), *id)?;
                let mut form = EventForm::from_event(&current);
                if let Some(t) = title {
                    form.title = t.clone();
                }
                if let Some(d) = date {
                    form.date = d.clone();
                }
                if *clear_lists {
                    form.lists.clear();
                }
                apply_fields(&mut form, fields);
                edit(store.as_mut(), *id, form, ctx)?;
            }
            EventAction::Del { id } => {
                let current = fetch(store.as_ref(), *id)?;
                let prompt = format!(
                    "Delete event #{} '{}' on {}? This action is irreversible.",
                    id,
                    current.title,
                    current.date_str()
                );
                if !confirm(&prompt, ctx.assume_yes) {
                    info("Operation cancelled.");
                    return Ok(());
                }
                if !store.delete_event(*id)? {
                    return Err(not_found(*id));
                }
                success(format!("Event #{id} deleted."));
                ctx.warn_if_volatile();
            }
            EventAction::Show { id } => {
                let ev = fetch(store.as_ref(), *id)?;
                print_event_details(&ev, ctx);
            }
            EventAction::List { month, upcoming } => {
                let mirror = Mirror::attach(store.as_mut())?;
                let events = &mirror.snapshot().events;

                let selected: Vec<&Event> = if *upcoming {
                    upcoming_events(events, ctx.today, usize::MAX)
                } else if month.is_some() {
                    let m = resolve_month(month.as_deref(), ctx.today)?;
                    let mut v: Vec<&Event> = events.iter().filter(|e| m.contains(e.date)).collect();
                    v.sort_by_key(|e| e.date);
                    v
                } else {
                    let mut v: Vec<&Event> = events.iter().collect();
                    v.sort_by_key(|e| e.date);
                    v
                };

                let title = match (month.as_deref(), *upcoming) {
                    (_, true) => format!("Upcoming events from {}", ctx.today),
                    (Some(m), _) => match YearMonth::parse(m) {
                        Some(ym) => format!("Events in {} {}", ym.name(), ym.year),
                        None => "Events".to_string(),
                    },
                    (None, false) => "All events".to_string(),
                };
                print_event_table(&title, &selected, ctx);
            }
        }
    }

    Ok(())
}

/// Copy the options that were actually given onto `form`.
fn apply_fields(form: &mut EventForm, fields: &EventFields) {
    let pairs = [
        (&fields.est_revenue, &mut form.estimated_revenue),
        (&fields.est_food, &mut form.estimated_food_cost),
        (&fields.est_labor, &mut form.estimated_labor_cost),
        (&fields.revenue, &mut form.actual_revenue),
        (&fields.food, &mut form.actual_food_cost),
        (&fields.labor, &mut form.actual_labor_cost),
        (&fields.status, &mut form.status),
        (&fields.notes, &mut form.notes),
    ];
    for (value, slot) in pairs {
        if let Some(v) = value {
            *slot = v.clone();
        }
    }
    form.lists.extend(fields.lists.iter().cloned());
}

fn add(store: &mut dyn RecordStore, form: EventForm, ctx: &Context) -> AppResult<()> {
    let template = form.into_event()?;
    let ids = persist_event(store, &template)?;

    match ids.as_slice() {
        [id] => success(format!(
            "Event #{} '{}' added for {}.",
            id,
            template.title,
            template.date_str()
        )),
        _ => success(format!(
            "{} '{}' events added ({}, ids {}).",
            ids.len(),
            template.title,
            template.repeat.to_db_str(),
            ids.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
        )),
    }
    ctx.warn_if_volatile();
    Ok(())
}

fn edit(store: &mut dyn RecordStore, id: RecordId, form: EventForm, ctx: &Context) -> AppResult<()> {
    let updated = form.into_event()?;
    if !store.update_event(id, &updated)? {
        return Err(not_found(id));
    }
    success(format!("Event #{id} updated."));
    ctx.warn_if_volatile();
    Ok(())
}

fn fetch(store: &dyn RecordStore, id: RecordId) -> AppResult<Event> {
    store.get_event(id)?.ok_or_else(|| not_found(id))
}

fn not_found(id: RecordId) -> AppError {
    AppError::NotFound {
        collection: "event",
        id,
    }
}

fn print_event_table(title: &str, events: &[&Event], ctx: &Context) {
    header(title);

    if events.is_empty() {
        info("No events found.");
        return;
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("DATE"),
        Column::left("TITLE").max(32),
        Column::left("STATUS"),
        Column::right("REVENUE"),
        Column::right("FOOD"),
        Column::right("LABOR"),
        Column::left("LISTS").max(30),
    ]);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.date_str(),
            ev.title.clone(),
            ev.status.to_db_str().to_string(),
            ctx.money(ev.effective_revenue()),
            ctx.money(ev.effective_food_cost()),
            ctx.money(ev.effective_labor_cost()),
            ev.lists.join(", "),
        ]);
    }

    print!("{}", table.render());
    println!("{} event(s)", events.len());
}

fn print_event_details(ev: &Event, ctx: &Context) {
    header(format!("Event #{}", ev.id));

    let status_color = color_for_status(ev.status);
    let line = |label: &str, value: String| println!("{} {}", pad_right(label, 16), value);

    line("Title", ev.title.clone());
    line("Date", ev.date.format("%A %Y-%m-%d").to_string());
    line(
        "Status",
        format!("{status_color}{}{RESET}", ev.status.to_db_str()),
    );
    line(
        "Revenue",
        format!(
            "{} estimated / {} actual",
            ctx.money(ev.estimated_revenue),
            ctx.money(ev.actual_revenue)
        ),
    );
    line(
        "Food cost",
        format!(
            "{} estimated / {} actual",
            ctx.money(ev.estimated_food_cost),
            ctx.money(ev.actual_food_cost)
        ),
    );
    line(
        "Labor cost",
        format!(
            "{} estimated / {} actual",
            ctx.money(ev.estimated_labor_cost),
            ctx.money(ev.actual_labor_cost)
        ),
    );

    if !ev.lists.is_empty() {
        line("Lists", ev.lists.join(", "));
    }

    if !ev.notes.trim().is_empty() {
        println!("Notes");
        let opts = textwrap::Options::new(72)
            .initial_indent("  ")
            .subsequent_indent("  ");
        println!("{}", textwrap::fill(&ev.notes, opts));
    }
}
