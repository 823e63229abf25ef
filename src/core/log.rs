use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

const OP_WIDTH_MAX: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| AppError::Config(format!("log pattern: {e}")))?;

        let entries: Vec<(i64, String, String, String, String)> = load_log(&pool.conn)?
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or(raw_date);
                (id, date, operation, target, message)
            })
            .collect();

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut visible = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };
            if visible.chars().count() > OP_WIDTH_MAX {
                visible = visible.chars().take(OP_WIDTH_MAX - 3).collect::<String>() + "...";
            }

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id, date, colored, padding, message
            );
        }

        Ok(())
    }
}
