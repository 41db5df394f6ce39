mod movers;
mod performance;
mod recommend;

use std::sync::Arc;

use serde_json::Value;

use tickpick_core::{BrokerData, HttpAuth, ReqwestHttpClient, RobinhoodAdapter};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Table;

pub struct CommandResult {
    pub data: Value,
    pub table: Option<Table>,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            table: None,
            warnings: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let broker = build_broker(cli.live)?;
    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    match &cli.command {
        Command::Movers(args) => movers::run(args, broker.as_ref()).await,
        Command::Performance(args) => performance::run(args, broker.as_ref()).await,
        Command::Recommend(args) => recommend::run(args, broker, &mut rng).await,
    }
}

fn build_broker(live: bool) -> Result<Arc<dyn BrokerData>, CliError> {
    if !live {
        return Ok(Arc::new(RobinhoodAdapter::offline()));
    }

    let token = std::env::var("ROBINHOOD_TOKEN").map_err(|_| {
        CliError::Command(String::from(
            "--live requires the ROBINHOOD_TOKEN environment variable",
        ))
    })?;

    Ok(Arc::new(RobinhoodAdapter::with_http_client(
        Arc::new(ReqwestHttpClient::new()),
        HttpAuth::BearerToken(token),
    )))
}
