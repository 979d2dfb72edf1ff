use std::str::FromStr;

use colored::Colorize;
use spendlens_core::{BudgetService, QueryService};
use spendlens_domain::{BudgetProgress, PeriodKey, RemainingState, Severity};

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::{current_preferences, section as output_section};
use crate::cli::shell_context::ShellContext;

use super::CommandDefinition;

const BAR_WIDTH: usize = 20;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "chart",
            "Spending per category across all expenses",
            "chart",
            cmd_chart,
        ),
        CommandDefinition::new(
            "summary",
            "Total spent in the current month",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "budget",
            "Monthly budget progress",
            "budget [YYYY-MM]",
            cmd_budget,
        ),
        CommandDefinition::new(
            "set-budget",
            "Set the monthly budget (0 clears it)",
            "set-budget <amount>",
            cmd_set_budget,
        ),
        CommandDefinition::new(
            "reset-month",
            "Delete every expense of a month",
            "reset-month [YYYY-MM]",
            cmd_reset_month,
        ),
    ]
}

fn period_arg(context: &ShellContext, args: &[&str], usage: &str) -> Result<PeriodKey, CommandError> {
    match args {
        [] => Ok(context.clock.current_period()),
        [raw] => PeriodKey::from_str(raw.trim()).map_err(|err| {
            CommandError::InvalidArguments(format!("Invalid month `{raw}`: {err}"))
        }),
        _ => Err(CommandError::InvalidArguments(format!("Usage: {usage}"))),
    }
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let records = context.store.records();
    let slices = QueryService::chart_slices(records);
    if slices.is_empty() {
        io::print_info("No expenses to chart yet.");
        return Ok(());
    }

    let width = slices
        .iter()
        .map(|slice| slice.category.chars().count())
        .max()
        .unwrap_or(0);
    output_section("Spending by category");
    for slice in &slices {
        io::print_info(format!(
            "  {} {:<width$}  {:>14}  {:>5.1}%",
            swatch(slice.color),
            slice.category,
            context.money(slice.total),
            slice.share,
        ));
    }
    io::print_info(format!(
        "Total expenses: {}",
        context.money(QueryService::total_of(records))
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let period = context.clock.current_period();
    let total = BudgetService::monthly_total(context.store.records(), period);
    io::print_info(format!(
        "You spent {} in {}",
        context.money(total),
        period.month_name()
    ));
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = period_arg(context, args, "budget [YYYY-MM]")?;
    let progress = BudgetService::evaluate(context.store.ledger(), period);

    output_section(format!("Budget for {}", period.long_label()));
    if !progress.has_budget() {
        io::print_info(format!("Spent {}", context.money(progress.monthly_total)));
        io::print_info("No monthly budget set. Use `set-budget <amount>`.");
        return Ok(());
    }

    io::print_info(format!(
        "Spent {} of {}",
        context.money(progress.monthly_total),
        context.money(progress.budget)
    ));
    io::print_info(format!(
        "{} {:.1}% ({})",
        styled_bar(&progress),
        progress.percent,
        progress.severity
    ));
    io::print_info(remaining_line(context, &progress));
    Ok(())
}

fn cmd_set_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "Usage: set-budget <amount>".into(),
        ));
    }
    let budget = context.store.set_budget_input(&args.join(" "))?;
    if budget > 0.0 {
        io::print_success(format!(
            "Monthly budget set to {}.",
            context.money(budget)
        ));
    } else {
        io::print_success("Monthly budget cleared.");
    }
    Ok(())
}

fn cmd_reset_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = period_arg(context, args, "reset-month [YYYY-MM]")?;
    let count = context
        .store
        .records()
        .iter()
        .filter(|record| record.falls_within(period))
        .count();
    if count == 0 {
        io::print_info(format!("No expenses dated in {}.", period.long_label()));
        return Ok(());
    }

    let prompt = format!(
        "Remove all {count} expenses dated in {}?",
        period.long_label()
    );
    if !context.confirm(&prompt)? {
        io::print_info("Reset cancelled.");
        return Ok(());
    }

    let removed = context.store.reset_period(period)?;
    io::print_success(format!(
        "Removed {removed} expenses from {}.",
        period.long_label()
    ));
    Ok(())
}

fn remaining_line(context: &ShellContext, progress: &BudgetProgress) -> String {
    let message = progress.message;
    match message.state {
        RemainingState::Normal => format!(
            "Under limit - {} remaining",
            context.money(message.remaining)
        ),
        RemainingState::LimitReached if message.remaining < 0.0 => format!(
            "Budget limit reached ({} over)",
            context.money(-message.remaining)
        ),
        RemainingState::LimitReached => "Budget limit reached".to_string(),
        RemainingState::NoBudget => "No monthly budget set".to_string(),
    }
}

/// `[#####---------------]` for a percentage already clamped to `0..=100`.
fn progress_bar(display_percent: f64, width: usize) -> String {
    let filled = ((display_percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn styled_bar(progress: &BudgetProgress) -> String {
    let bar = progress_bar(progress.display_percent, BAR_WIDTH);
    if !current_preferences().color_enabled {
        return bar;
    }
    match progress.severity {
        Severity::Normal => bar.green().to_string(),
        Severity::Warning => bar.yellow().to_string(),
        Severity::Danger => bar.red().to_string(),
    }
}

/// Colored block for a `#RRGGBB` palette entry; the hex code itself without color.
fn swatch(hex: &str) -> String {
    match (current_preferences().color_enabled, hex_to_rgb(hex)) {
        (true, Some((r, g, b))) => "■".truecolor(r, g, b).to_string(),
        _ => hex.to_string(),
    }
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use spendlens_core::storage::{MemoryStorage, BUDGET_KEY};

    use super::*;
    use crate::cli::commands::test_support::{context, run};

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 10), "[----------]");
        assert_eq!(progress_bar(40.0, 10), "[####------]");
        assert_eq!(progress_bar(100.0, 10), "[##########]");
    }

    #[test]
    fn palette_hex_parses_to_rgb() {
        assert_eq!(hex_to_rgb("#FADADD"), Some((0xFA, 0xDA, 0xDD)));
        assert_eq!(hex_to_rgb("FADADD"), None);
        assert_eq!(hex_to_rgb("#FAD"), None);
    }

    #[test]
    fn remaining_line_reports_overspend() {
        let mut ctx = context(MemoryStorage::new());
        run(&mut ctx, &["add Rent 600 2024-03-01", "set-budget 500"]);
        let progress = BudgetService::evaluate(ctx.store.ledger(), ctx.clock.current_period());
        assert_eq!(remaining_line(&ctx, &progress), "Budget limit reached (₹100.00 over)");

        run(&mut ctx, &["set-budget 1000"]);
        let progress = BudgetService::evaluate(ctx.store.ledger(), ctx.clock.current_period());
        assert_eq!(remaining_line(&ctx, &progress), "Under limit - ₹400.00 remaining");
    }

    #[test]
    fn set_budget_accepts_raw_text() {
        let storage = MemoryStorage::new();
        let mut ctx = context(storage.clone());
        run(&mut ctx, &["set-budget 750.5abc"]);
        assert_eq!(ctx.store.monthly_budget(), 750.5);
        run(&mut ctx, &["set-budget nothing"]);
        assert_eq!(storage.snapshot(BUDGET_KEY).as_deref(), Some("0"));
        assert!(matches!(
            ctx.process_line("set-budget"),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn reset_month_defaults_to_current_period() {
        let mut ctx = context(MemoryStorage::new());
        run(
            &mut ctx,
            &[
                "add Food 10 2024-03-01",
                "add Food 20 2024-02-28",
                "add Rent 30 2024-03-18",
                "reset-month",
            ],
        );
        assert_eq!(ctx.store.len(), 1);
        assert_eq!(ctx.store.records()[0].amount, 20.0);

        run(&mut ctx, &["reset-month 2024-02"]);
        assert!(ctx.store.is_empty());
    }
}
