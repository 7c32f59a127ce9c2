//! `mission-stock` command line.
//!
//! Each invocation loads the configured snapshot, runs one command and, when the
//! command changed anything, saves the snapshot back. Read-only commands never
//! touch the file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use missionstock_products::Category;
use missionstock_store::FileSnapshotStore;

use crate::config::AppConfig;
use crate::form::ProductForm;
use crate::service::InventoryService;
use crate::view::ProductRow;

#[derive(Parser, Debug)]
#[command(name = "mission-stock")]
#[command(about = "Manage the mission product inventory")]
pub struct Cli {
    /// Directory holding the snapshot file (overrides MISSION_STOCK_DIR)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Snapshot file name (overrides MISSION_STOCK_FILE)
    #[arg(long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List live products in slot order
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one product
    Show { id: String },
    /// Add a product
    Add {
        /// food, medical, tool or comm
        category: Category,
        id: String,
        #[command(flatten)]
        fields: FormArgs,
    },
    /// Replace the product stored under ID
    Update {
        id: String,
        /// food, medical, tool or comm
        category: Category,
        /// Store the replacement under a different id
        #[arg(long)]
        new_id: Option<String>,
        #[command(flatten)]
        fields: FormArgs,
    },
    /// Delete a product
    Delete { id: String },
    /// Show slot occupancy
    Stats,
}

/// Field values as a form would submit them. Only the chosen category's fields are read.
#[derive(Args, Debug)]
struct FormArgs {
    #[arg(long, default_value = "")]
    name: String,
    /// Weight in kg
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    weight: String,
    /// Volume in m³
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    volume: String,

    #[arg(long, default_value = "")]
    expiration_date: String,
    #[arg(long, default_value = "")]
    food_type: String,
    #[arg(long, default_value = "")]
    calories: String,

    #[arg(long = "use", default_value = "")]
    specific_use: String,
    #[arg(long)]
    sterilized: bool,
    #[arg(long, default_value = "")]
    sterilization_date: String,
    #[arg(long, default_value = "")]
    udt: String,

    #[arg(long, default_value = "")]
    function: String,
    #[arg(long, default_value = "")]
    material: String,
    #[arg(long)]
    requires_power: bool,

    #[arg(long, default_value = "")]
    comm_type: String,
    /// Frequency in MHz
    #[arg(long, default_value = "")]
    frequency: String,
    /// Transmit power in W
    #[arg(long, default_value = "")]
    power: String,
}

impl FormArgs {
    fn into_form(self, category: Category, id: String) -> ProductForm {
        ProductForm {
            expiration_date: self.expiration_date,
            food_type: self.food_type,
            calories_per_serving: self.calories,
            specific_use: self.specific_use,
            is_sterilized: self.sterilized,
            sterilization_date: self.sterilization_date,
            udt: self.udt,
            function: self.function,
            material: self.material,
            requires_power: self.requires_power,
            comm_type: self.comm_type,
            frequency_range: self.frequency,
            power: self.power,
            ..ProductForm::new(category, id, self.name, self.weight, self.volume)
        }
    }
}

/// Run the parsed command line against the snapshot `config` points at.
///
/// `--dir`/`--file` take precedence over `config`. Command output goes to `out`.
pub fn execute(cli: Cli, mut config: AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    if let Some(dir) = cli.dir {
        config.data_dir = dir;
    }
    if let Some(file) = cli.file {
        config.data_file = file;
    }

    let snapshots = config.snapshot_store();
    let location = snapshots.path().display().to_string();
    let mut service = InventoryService::try_open(snapshots)
        .with_context(|| format!("failed to load {location}"))?;

    if run(&mut service, cli.command, out)? {
        let report = service
            .try_save()
            .with_context(|| format!("failed to save {location}"))?;
        tracing::info!(%report, "inventory saved");
    }
    Ok(())
}

/// Run one command; returns whether the store changed.
fn run(
    service: &mut InventoryService<FileSnapshotStore>,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match command {
        Command::List { json } => {
            let rows = service.list();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                write_rows(out, &rows)?;
            }
            Ok(false)
        }
        Command::Show { id } => {
            let product = service.get(&id)?;
            writeln!(out, "{}", product.summary())?;
            writeln!(out, "{}", product.description())?;
            Ok(false)
        }
        Command::Add {
            category,
            id,
            fields,
        } => {
            writeln!(out, "{}", service.create(fields.into_form(category, id))?)?;
            Ok(true)
        }
        Command::Update {
            id,
            category,
            new_id,
            fields,
        } => {
            let form = fields.into_form(category, new_id.unwrap_or_default());
            writeln!(out, "{}", service.update(&id, form)?)?;
            Ok(true)
        }
        Command::Delete { id } => {
            let removed = service.delete(&id)?;
            writeln!(out, "deleted {}", removed.summary())?;
            Ok(true)
        }
        Command::Stats => {
            writeln!(out, "{}", service.stats())?;
            Ok(false)
        }
    }
}

fn write_rows(out: &mut impl Write, rows: &[ProductRow]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<12} {:<24} {:>9} {:>9}  {:<24} {:<16} {:<16} {}",
        "ID", "NAME", "KG", "M³", "CATEGORY", "DETAIL 1", "DETAIL 2", "DETAIL 3"
    )?;
    for row in rows {
        let [d1, d2, d3] = &row.details;
        writeln!(
            out,
            "{:<12} {:<24} {:>9.2} {:>9.3}  {:<24} {:<16} {:<16} {}",
            row.id, row.name, row.weight_kg, row.volume_m3, row.category, d1, d2, d3
        )?;
    }
    Ok(())
}
