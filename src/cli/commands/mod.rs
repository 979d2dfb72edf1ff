use std::collections::HashMap;

pub mod expense;
pub mod filter;
pub mod report;
pub mod system;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(expense::definitions());
    commands.extend(filter::definitions());
    commands.extend(report::definitions());
    commands.extend(system::definitions());
    commands
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Name-indexed commands, iterated in registration order.
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use spendlens_config::Config;
    use spendlens_core::{storage::MemoryStorage, time::FixedClock, LedgerStore};

    use crate::cli::shell_context::{CliMode, ShellContext};

    /// Script-mode context over in-memory storage, pinned to 2024-03-18.
    pub fn context(storage: MemoryStorage) -> ShellContext {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        let config = Config {
            ui_color_enabled: false,
            ..Config::default()
        };
        ShellContext::with_parts(
            CliMode::Script,
            LedgerStore::load(storage),
            config,
            Box::new(clock),
        )
    }

    pub fn run(context: &mut ShellContext, lines: &[&str]) {
        for line in lines {
            context.process_line(line).expect(line);
        }
    }
}
