use crate::cli::context::Context;
use crate::cli::parser::{Commands, ReceiptAction};
use crate::core::form::ReceiptForm;
use crate::core::{monthly_food_spending, monthly_receipts};
use crate::errors::{AppError, AppResult};
use crate::models::{Receipt, RecordId};
use crate::store::{Mirror, RecordStore};
use crate::ui::messages::{confirm, header, info, success};
use crate::utils::date::resolve_month;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Receipt { action } = cmd {
        let mut store = ctx.open_store()?;

        match action {
            ReceiptAction::Add { store: name, total, date } => {
                let form = ReceiptForm {
                    store: name.clone(),
                    total: total.clone(),
                    date: date.clone(),
                };
                let receipt = form.into_receipt()?;
                let id = store.create_receipt(&receipt)?;
                success(format!(
                    "Receipt #{} added: {} {} on {}.",
                    id,
                    receipt.store,
                    ctx.money(receipt.total),
                    receipt.date_str()
                ));
                ctx.warn_if_volatile();
            }
            ReceiptAction::Edit {
                id,
                store: name,
                total,
                date,
            } => {
                let current = fetch(store.as_ref(), *id)?;
                let mut form = ReceiptForm::from_receipt(&current);
                if let Some(s) = name {
                    form.store = s.clone();
                }
                if let Some(t) = total {
                    form.total = t.clone();
                }
                if let Some(d) = date {
                    form.date = d.clone();
                }
                let updated = form.into_receipt()?;
                if !store.update_receipt(*id, &updated)? {
                    return Err(not_found(*id));
                }
                success(format!("Receipt #{id} updated."));
                ctx.warn_if_volatile();
            }
            ReceiptAction::Del { id } => {
                let current = fetch(store.as_ref(), *id)?;
                let prompt = format!(
                    "Delete receipt #{} ({} {} on {})? This action is irreversible.",
                    id,
                    current.store,
                    ctx.money(current.total),
                    current.date_str()
                );
                if !confirm(&prompt, ctx.assume_yes) {
                    info("Operation cancelled.");
                    return Ok(());
                }
                if !store.delete_receipt(*id)? {
                    return Err(not_found(*id));
                }
                success(format!("Receipt #{id} deleted."));
                ctx.warn_if_volatile();
            }
            ReceiptAction::List { month } => {
                let month = resolve_month(month.as_deref(), ctx.today)?;
                let mirror = Mirror::attach(store.as_mut())?;
                let receipts = &mirror.snapshot().receipts;

                header(format!("Receipts for {} {}", month.name(), month.year));

                let rows = monthly_receipts(receipts, month);
                if rows.is_empty() {
                    info("No receipts found.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::right("ID"),
                    Column::left("DATE"),
                    Column::left("STORE").max(32),
                    Column::right("TOTAL"),
                ]);
                for r in &rows {
                    table.add_row(vec![
                        r.id.to_string(),
                        r.date_str(),
                        r.store.clone(),
                        ctx.money(r.total),
                    ]);
                }
                print!("{}", table.render());
                println!(
                    "{} receipt(s), total {}",
                    rows.len(),
                    ctx.money(monthly_food_spending(receipts, month))
                );
            }
        }
    }

    Ok(())
}

fn fetch(store: &dyn RecordStore, id: RecordId) -> AppResult<Receipt> {
    store.get_receipt(id)?.ok_or_else(|| not_found(id))
}

fn not_found(id: RecordId) -> AppError {
    AppError::NotFound {
        collection: "receipt",
        id,
    }
}
