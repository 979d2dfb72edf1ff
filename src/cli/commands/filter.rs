use std::str::FromStr;

use spendlens_core::QueryService;
use spendlens_domain::PeriodKey;
use tracing::debug;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::shell_context::ShellContext;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "search",
            "Match text in category or note (no text clears)",
            "search [text...]",
            cmd_search,
        ),
        CommandDefinition::new(
            "month",
            "Only show expenses from one month",
            "month <YYYY-MM|all>",
            cmd_month,
        ),
        CommandDefinition::new(
            "category",
            "Only show one exact category",
            "category <name|--all>",
            cmd_category,
        ),
        CommandDefinition::new("filters", "Show active filters", "filters", cmd_filters),
        CommandDefinition::new(
            "clear-filters",
            "Remove every filter",
            "clear-filters",
            cmd_clear_filters,
        ),
        CommandDefinition::new(
            "months",
            "List months that have expenses",
            "months",
            cmd_months,
        ),
        CommandDefinition::new(
            "categories",
            "List categories in use",
            "categories",
            cmd_categories,
        ),
    ]
}

/// Resets a filter. Never a valid month, and reserved among category names.
const CLEAR_TOKEN: &str = "--all";

fn clears(args: &[&str], keyword: Option<&str>) -> bool {
    match args {
        [] => true,
        [single] => {
            let single = single.trim();
            single.is_empty()
                || single == CLEAR_TOKEN
                || keyword.is_some_and(|word| single.eq_ignore_ascii_case(word))
        }
        _ => false,
    }
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.filters.search_text = args.join(" ").trim().to_string();
    debug!(search = %context.filters.search_text, "search filter updated");
    if context.filters.search_text.is_empty() {
        io::print_info("Search cleared.");
    } else {
        io::print_info(format!("Searching for `{}`.", context.filters.search_text));
    }
    Ok(())
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if clears(args, Some("all")) {
        context.filters.month = None;
        io::print_info("Showing all months.");
        return Ok(());
    }
    let [raw] = args else {
        return Err(CommandError::InvalidArguments(
            "Usage: month <YYYY-MM|all>".into(),
        ));
    };
    let period = PeriodKey::from_str(raw.trim()).map_err(|err| {
        CommandError::InvalidArguments(format!("Invalid month `{raw}`: {err}"))
    })?;
    context.filters.month = Some(period);
    io::print_info(format!("Showing {}.", period.long_label()));
    Ok(())
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if clears(args, None) {
        context.filters.category = None;
        io::print_info("Showing all categories.");
        return Ok(());
    }
    let category = args.join(" ");
    if !context
        .store
        .records()
        .iter()
        .any(|record| record.category == category)
    {
        io::print_warning(format!("No expenses use the category `{category}` yet."));
    }
    io::print_info(format!("Showing category `{category}`."));
    context.filters.category = Some(category);
    Ok(())
}

fn cmd_filters(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let filters = &context.filters;
    if filters.is_empty() {
        io::print_info("No filters active.");
        return Ok(());
    }
    output_section("Active filters");
    if !filters.search_text.is_empty() {
        io::print_info(format!("  Search   : {}", filters.search_text));
    }
    if let Some(month) = filters.month {
        io::print_info(format!("  Month    : {} ({})", month.long_label(), month));
    }
    if let Some(category) = &filters.category {
        io::print_info(format!("  Category : {category}"));
    }
    Ok(())
}

fn cmd_clear_filters(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.filters = Default::default();
    io::print_info("Filters cleared.");
    Ok(())
}

fn cmd_months(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let months = QueryService::distinct_months(context.store.records());
    if months.is_empty() {
        io::print_info("No expenses recorded yet.");
        return Ok(());
    }
    output_section("Months");
    for month in months {
        io::print_info(format!("  {month}  {}", month.long_label()));
    }
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let categories = QueryService::distinct_categories(context.store.records());
    if categories.is_empty() {
        io::print_info("No expenses recorded yet.");
        return Ok(());
    }
    output_section("Categories");
    for category in categories {
        io::print_info(format!("  {category}"));
    }
    Ok(())
}
