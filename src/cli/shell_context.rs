use std::{env, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use spendlens_config::{Config, ConfigManager};
use spendlens_core::{
    format::{
        CurrencyFormatter, DateFormatter, DigitGrouping, GroupedCurrencyFormatter,
        PatternDateFormatter,
    },
    time::{Clock, SystemClock},
    FilterCriteria, FilteredEntry, LedgerStore, QueryService,
};
use spendlens_storage_json::JsonFileStorage;
use tracing::info;

use crate::errors::CliError;

use super::commands::{all_definitions, CommandRegistry};
use super::output::{self, OutputPreferences};

/// Overrides the directory holding `config.json` (and, unless configured
/// otherwise, the expense data).
pub const HOME_ENV: &str = "SPENDLENS_HOME";
/// Switches the shell to script mode: commands are read from stdin.
pub const SCRIPT_ENV: &str = "SPENDLENS_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Composition root for the shell: owns the ledger store and every
/// presentation collaborator a command needs.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: LedgerStore,
    pub config: Config,
    pub currency: GroupedCurrencyFormatter,
    pub dates: PatternDateFormatter,
    pub clock: Box<dyn Clock>,
    pub theme: ColorfulTheme,
    pub filters: FilterCriteria,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration and the on-disk ledger.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let home = resolve_home();
        let config_manager = ConfigManager::with_base_dir(home.clone())?;
        let config = config_manager.load()?;
        if !config_manager.config_path().exists() {
            config_manager.save(&config)?;
        }

        let data_dir = match (&config.data_dir, env::var_os(HOME_ENV)) {
            (None, Some(_)) => home.join("data"),
            _ => config.resolve_data_dir(),
        };
        info!(config = %config_manager.config_path().display(), data = %data_dir.display(), "starting shell");

        let storage = JsonFileStorage::new(data_dir)?;
        let store = LedgerStore::load(storage);
        Ok(Self::with_parts(mode, store, config, Box::new(SystemClock)))
    }

    pub fn with_parts(
        mode: CliMode,
        store: LedgerStore,
        config: Config,
        clock: Box<dyn Clock>,
    ) -> Self {
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
            quiet_mode: mode == CliMode::Script,
        });
        let currency = GroupedCurrencyFormatter::new(
            config.currency_symbol.clone(),
            DigitGrouping::from_config(&config.digit_grouping),
            config.currency_precision,
        );
        let dates = PatternDateFormatter::new(config.date_format.clone());

        Self {
            mode,
            registry: CommandRegistry::new(all_definitions()),
            store,
            config,
            currency,
            dates,
            clock,
            theme: ColorfulTheme::default(),
            filters: FilterCriteria::default(),
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        if self.filters.is_empty() {
            "spendlens> ".to_string()
        } else {
            "spendlens (filtered)> ".to_string()
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Rows currently visible in `list`, each tied to its ledger position.
    pub fn visible_entries(&self) -> Vec<FilteredEntry<'_>> {
        QueryService::filter_indexed(self.store.records(), &self.filters)
    }

    pub fn money(&self, amount: f64) -> String {
        self.currency.format_amount(amount)
    }

    pub fn date(&self, date: chrono::NaiveDate) -> String {
        self.dates.format_date(date)
    }
}

fn resolve_home() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spendlens")
}
