use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use tickpick_core::allocator::AllocatorConfig;
use tickpick_core::pipeline::{Pipeline, RunRequest};
use tickpick_core::{BrokerData, Candidate, Mover, OrderReceipt, OrderTicket, Recommendation, RiskTier};

use crate::cli::RecommendArgs;
use crate::error::CliError;
use crate::output::Table;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct RecommendResponseData {
    sector: String,
    tolerance: RiskTier,
    budget: u32,
    movers: Vec<Mover>,
    candidates: Vec<Candidate>,
    recommendation: Option<Recommendation>,
    order_quantity: Option<u64>,
    receipt: Option<OrderReceipt>,
}

pub async fn run(
    args: &RecommendArgs,
    broker: Arc<dyn BrokerData>,
    rng: &mut fastrand::Rng,
) -> Result<CommandResult, CliError> {
    let tolerance = RiskTier::from_str(&args.tolerance)?;

    let mut request = RunRequest::new(args.sector.clone(), tolerance);
    request.allocator = AllocatorConfig::with_epochs(args.epochs);
    if let Some(budget) = args.budget {
        request = request.with_budget(budget);
    }

    let pipeline = Pipeline::new(Arc::clone(&broker));
    let outcome = pipeline.run(&request, rng).await?;
    let mut warnings = outcome.warnings;

    let receipt = if args.execute {
        submit(&outcome.recommendation, outcome.order_quantity, broker.as_ref(), &mut warnings)
            .await?
    } else {
        None
    };

    let table = build_table(&outcome.recommendation, outcome.order_quantity, &receipt);

    let data = serde_json::to_value(RecommendResponseData {
        sector: args.sector.clone(),
        tolerance,
        budget: outcome.budget,
        movers: outcome.movers,
        candidates: outcome.candidates,
        recommendation: outcome.recommendation,
        order_quantity: outcome.order_quantity,
        receipt,
    })?;

    Ok(CommandResult::ok(data)
        .with_table(table)
        .with_warnings(warnings))
}

/// Order submission is strictly opt-in and requires a sized order of at
/// least one whole share.
async fn submit(
    recommendation: &Option<Recommendation>,
    order_quantity: Option<u64>,
    broker: &dyn BrokerData,
    warnings: &mut Vec<String>,
) -> Result<Option<OrderReceipt>, CliError> {
    let Some(recommendation) = recommendation else {
        warnings.push(String::from("nothing to execute: no recommendation"));
        return Ok(None);
    };
    let quantity = order_quantity.unwrap_or(0);
    if quantity == 0 {
        warnings.push(String::from(
            "nothing to execute: amount buys no whole share",
        ));
        return Ok(None);
    }

    let ticket = OrderTicket {
        symbol: recommendation.symbol.clone(),
        quantity,
    };
    let receipt = broker.submit_order(ticket).await?;
    Ok(Some(receipt))
}

fn build_table(
    recommendation: &Option<Recommendation>,
    order_quantity: Option<u64>,
    receipt: &Option<OrderReceipt>,
) -> Table {
    let mut table = Table::new(&["field", "value"]);
    match recommendation {
        Some(rec) => {
            table.push_row(vec![String::from("symbol"), rec.symbol.to_string()]);
            table.push_row(vec![
                String::from("invest amount"),
                format!("${}", rec.invest_amount),
            ]);
            table.push_row(vec![
                String::from("order quantity"),
                order_quantity.map_or_else(|| String::from("-"), |q| q.to_string()),
            ]);
            if let Some(receipt) = receipt {
                table.push_row(vec![String::from("order id"), receipt.order_id.clone()]);
                table.push_row(vec![String::from("order state"), receipt.state.clone()]);
            }
        }
        None => {
            table.push_row(vec![
                String::from("recommendation"),
                String::from("none"),
            ]);
        }
    }
    table
}
