use serde::Serialize;

use tickpick_core::{movers, BrokerData, Mover};

use crate::cli::MoversArgs;
use crate::error::CliError;
use crate::output::Table;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct MoversResponseData {
    sector: String,
    movers: Vec<Mover>,
}

pub async fn run(args: &MoversArgs, broker: &dyn BrokerData) -> Result<CommandResult, CliError> {
    let outcome = movers::screen_sector(broker, &args.sector).await;

    let mut table = Table::new(&["rank", "symbol", "change", "sector"]);
    for (index, mover) in outcome.movers.iter().enumerate() {
        table.push_row(vec![
            (index + 1).to_string(),
            mover.symbol.to_string(),
            format!("{:+.2}%", mover.percent_change),
            mover.sector.clone(),
        ]);
    }

    let data = serde_json::to_value(MoversResponseData {
        sector: args.sector.clone(),
        movers: outcome.movers,
    })?;

    Ok(CommandResult::ok(data)
        .with_table(table)
        .with_warnings(outcome.warnings))
}
