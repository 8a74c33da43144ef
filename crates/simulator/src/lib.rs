//! `gildedrose-simulator`
//!
//! Day-by-day driver around the inventory rules: builds the standard stock
//! list, ticks it for a configured number of days and renders each day.

use serde::Serialize;

use gildedrose_core::{DomainError, DomainResult};
use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, Inventory, Item, SULFURAS};

pub const DAYS_VAR: &str = "GILDEDROSE_DAYS";
pub const FORMAT_VAR: &str = "GILDEDROSE_FORMAT";

const DEFAULT_DAYS: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl core::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(DomainError::validation(format!(
                "{FORMAT_VAR} must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

impl core::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Simulator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Ticks to run after printing day 0.
    pub days: u64,
    pub format: OutputFormat,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::default(),
        }
    }
}

impl SimulatorConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        match lookup(DAYS_VAR) {
            Some(raw) => config.days = parse_days(&raw)?,
            None => tracing::debug!(days = config.days, "{DAYS_VAR} not set; using default"),
        }

        if let Some(raw) = lookup(FORMAT_VAR) {
            config.format = raw.parse()?;
        }

        Ok(config)
    }

    /// Apply command-line arguments. A first positional argument overrides
    /// the number of days.
    pub fn with_args<I, S>(mut self, args: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(first) = args.into_iter().next() {
            self.days = parse_days(first.as_ref())?;
        }
        Ok(self)
    }
}

fn parse_days(raw: &str) -> DomainResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| DomainError::validation(format!("days must be a non-negative integer: {e}")))
}

/// The stock list the simulator starts from.
pub fn standard_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}

/// One day's stock in JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySnapshot {
    pub day: u64,
    pub items: Vec<Item>,
}

/// Run the simulation over [`standard_stock`] and render the result.
pub fn run(config: &SimulatorConfig) -> anyhow::Result<String> {
    simulate(Inventory::new(standard_stock()), config)
}

/// Render day 0 through `config.days` of `inventory`.
pub fn simulate(mut inventory: Inventory, config: &SimulatorConfig) -> anyhow::Result<String> {
    match config.format {
        OutputFormat::Text => {
            let mut out = inventory.report();
            for _ in 0..config.days {
                inventory.tick();
                out.push('\n');
                out.push_str(&inventory.report());
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut snapshots = vec![DaySnapshot {
                day: inventory.day(),
                items: inventory.items().to_vec(),
            }];
            for _ in 0..config.days {
                inventory.tick();
                snapshots.push(DaySnapshot {
                    day: inventory.day(),
                    items: inventory.items().to_vec(),
                });
            }
            let mut out = serde_json::to_string_pretty(&snapshots)?;
            out.push('\n');
            Ok(out)
        }
    }
}
