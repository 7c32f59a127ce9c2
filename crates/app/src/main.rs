//! `mission-stock`: command-line front end for the mission inventory.
//!
//! Usage:
//!   mission-stock list [--json]
//!   mission-stock add food FOOD-1 --name Lasagna --weight 0.4 --volume 0.002 \
//!       --expiration-date 2027-02-01 --food-type freeze-dried --calories 520
//!   mission-stock update FOOD-1 food --name "Veg lasagna" ...
//!   mission-stock delete FOOD-1

use anyhow::Context;
use clap::Parser;

use missionstock_app::{AppConfig, Cli, cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env().context("invalid configuration")?;
    missionstock_observability::init_with(config.log_format);

    let stdout = std::io::stdout();
    cli::execute(cli, config, &mut stdout.lock())
}
