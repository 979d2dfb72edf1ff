use spendlens_core::{ExpenseDraft, ExpenseService, QueryService};

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{Alignment, Table, TableColumn};

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Record an expense (date defaults to today)",
            "add <category> <amount> [YYYY-MM-DD] [note...]",
            cmd_add,
        ),
        CommandDefinition::new(
            "list",
            "Show expenses matching the active filters",
            "list",
            cmd_list,
        ),
        CommandDefinition::new(
            "delete",
            "Delete the expense shown at a row of `list`",
            "delete <row>",
            cmd_delete,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, amount, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "Usage: add <category> <amount> [YYYY-MM-DD] [note...]".into(),
        ));
    };

    let (date, note) = match rest.split_first() {
        Some((first, note)) if looks_like_date(first) => (first.to_string(), note),
        _ => (context.clock.today().format("%Y-%m-%d").to_string(), rest),
    };

    let draft = ExpenseDraft::new(*category, *amount, date).with_note(note.join(" "));
    let record = ExpenseService::build(&draft, context.clock.as_ref())?;
    let summary = format!(
        "{} {} on {}",
        record.category,
        context.money(record.amount),
        context.date(record.date)
    );
    context.store.append(record)?;
    io::print_success(format!("Added expense: {summary}"));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let entries = context.visible_entries();
    if entries.is_empty() {
        if context.store.is_empty() {
            io::print_info("No expenses recorded yet. Use `add` to record one.");
        } else {
            io::print_info("No expenses match the current filters.");
        }
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::new("#", Alignment::Right),
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Category", Alignment::Left).max_width(20),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Note", Alignment::Left).max_width(32),
        TableColumn::new("Added", Alignment::Left),
    ]);
    for (row, entry) in entries.iter().enumerate() {
        let record = entry.record;
        table.rows.push(vec![
            (row + 1).to_string(),
            context.date(record.date),
            record.category.clone(),
            context.money(record.amount),
            record.note.clone(),
            record.created_at.clone(),
        ]);
    }
    let total = QueryService::total_of(entries.iter().map(|entry| entry.record));
    table.footer = Some(vec![
        String::new(),
        String::new(),
        "Total".into(),
        context.money(total),
    ]);

    io::print_info(table.render());
    if !context.filters.is_empty() {
        io::print_hint(format!(
            "Showing {} of {} expenses. Use `clear-filters` to show all.",
            entries.len(),
            context.store.len()
        ));
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let row: usize = match args {
        [raw] => raw.parse().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a row number."))
        })?,
        _ => return Err(CommandError::InvalidArguments("Usage: delete <row>".into())),
    };

    let (position, label) = {
        let entries = context.visible_entries();
        let entry = row
            .checked_sub(1)
            .and_then(|idx| entries.get(idx))
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "Row {row} is not in the current view ({} shown).",
                    entries.len()
                ))
            })?;
        let label = format!(
            "{} {} on {}",
            entry.record.category,
            context.money(entry.record.amount),
            context.date(entry.record.date)
        );
        (entry.position, label)
    };

    if !context.confirm(&format!("Delete {label}?"))? {
        io::print_info("Deletion cancelled.");
        return Ok(());
    }

    context.store.remove_at(position)?;
    io::print_success(format!("Deleted expense: {label}"));
    Ok(())
}

/// `YYYY-MM-DD` shaped tokens are dates (validated later); anything else starts the note.
fn looks_like_date(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit())
}
