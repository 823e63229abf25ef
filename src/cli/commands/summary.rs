use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::FinancialSummary;
use crate::errors::AppResult;
use crate::store::Mirror;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_margin};
use crate::utils::date::resolve_month;
use crate::utils::formatting::{pad_left, pad_right};
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Summary { month, limit, json } = cmd {
        let spending_month = resolve_month(month.as_deref(), ctx.today)?;
        let limit = limit.unwrap_or(ctx.cfg.upcoming_limit);

        let mut store = ctx.open_store()?;
        let mirror = Mirror::attach(store.as_mut())?;
        let summary = FinancialSummary::build(mirror.snapshot(), ctx.today, spending_month, limit);

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        print_cards(&summary, ctx);
        print_receipts(&summary, ctx);
        print_upcoming(&summary, ctx);
    }

    Ok(())
}

fn card(label: &str, value: String) {
    println!("  {} {}", pad_right(label, 24), pad_left(&value, 14));
}

fn print_cards(summary: &FinancialSummary<'_>, ctx: &Context) {
    header(format!(
        "Financial summary: {} to end of {}",
        summary.reference,
        summary.reference.year()
    ));

    card("Future revenue", ctx.money(summary.totals.revenue));
    card("Food cost", ctx.money(summary.totals.food_cost));
    card("Labor cost", ctx.money(summary.totals.labor_cost));
    card("Cost of goods", ctx.money(summary.cost_of_goods()));

    let margin = summary.gross_margin();
    let color = color_for_margin(margin);
    println!(
        "  {} {color}{}{RESET}",
        pad_right("Gross margin", 24),
        pad_left(&ctx.money(margin), 14)
    );
    println!();
}

fn print_receipts(summary: &FinancialSummary<'_>, ctx: &Context) {
    header(format!(
        "Food spending: {} {}",
        summary.spending_month.name(),
        summary.spending_month.year
    ));
    card("Total", ctx.money(summary.monthly_spending));

    if summary.receipts.is_empty() {
        info("No receipts this month.");
        println!();
        return;
    }

    let mut table = Table::new(vec![
        Column::left("DATE"),
        Column::left("STORE").max(32),
        Column::right("TOTAL"),
    ]);
    for r in &summary.receipts {
        table.add_row(vec![r.date_str(), r.store.clone(), ctx.money(r.total)]);
    }
    print!("{}", table.render());
    println!();
}

fn print_upcoming(summary: &FinancialSummary<'_>, ctx: &Context) {
    header("Upcoming events");

    if summary.upcoming.is_empty() {
        info("No upcoming events.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("DATE"),
        Column::left("TITLE").max(32),
        Column::left("STATUS"),
        Column::right("REVENUE"),
    ]);
    for ev in &summary.upcoming {
        table.add_row(vec![
            ev.date_str(),
            ev.title.clone(),
            ev.status.to_db_str().to_string(),
            ctx.money(ev.effective_revenue()),
        ]);
    }
    print!("{}", table.render());
}
