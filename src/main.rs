mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Commands, GalaxyCli, LogFormatArg};
use toyota_galaxy::error::exit_code;
use toyota_galaxy::logging::{init_logging, LogFormat};
use toyota_galaxy::{
    filter_and_sort, load_inventory_csv, report, showroom, zodiac_for_date, ApiConfig,
    FinanceInputs, GalaxyError, LeaseInputs,
};
use tracing::info;

fn main() {
    let cli = GalaxyCli::parse();

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_logging("toyota_galaxy=warn", format);

    if let Err(err) = run(cli) {
        eprintln!("❌ {:#}", err);
        let code = err
            .downcast_ref::<GalaxyError>()
            .map(GalaxyError::exit_code)
            .unwrap_or(exit_code::GENERAL_ERROR);
        std::process::exit(code);
    }
}

fn run(cli: GalaxyCli) -> Result<()> {
    let GalaxyCli {
        api_url,
        timeout_secs,
        command,
        ..
    } = cli;
    // Only remote commands need a valid API location
    let config = || -> toyota_galaxy::Result<ApiConfig> {
        ApiConfig::new(&api_url)?.with_timeout_secs(timeout_secs)
    };

    match command {
        Commands::Loan(args) => {
            let inputs = FinanceInputs {
                price: args.price,
                down_payment: args.down,
                term_months: args.months,
                annual_rate_percent: args.rate,
            };
            let estimate = inputs.estimate()?;
            print!("{}", report::render_loan(&inputs, &estimate));
        }
        Commands::Lease(args) => {
            let inputs = LeaseInputs {
                price: args.price,
                down_payment: args.down,
                term_months: args.months,
                residual_percent: args.residual,
                money_factor: args.money_factor,
            };
            let estimate = inputs.estimate()?;
            print!("{}", report::render_lease(&inputs, &estimate));
        }
        Commands::Search(args) => {
            let vehicles = match &args.inventory {
                Some(path) => load_inventory_csv(path)
                    .with_context(|| format!("Failed to load inventory: {:?}", path))?,
                None => showroom(),
            };
            info!(count = vehicles.len(), "searching inventory");

            let filters = args.filter.filters();
            filters.validate()?;
            let key = args.filter.sort.into();
            let order = args.filter.order();
            let results = filter_and_sort(&vehicles, &filters, key, order);
            print!("{}", report::render_showroom(&results, key, order));
        }
        Commands::Zodiac(args) => {
            let profile = zodiac_for_date(args.month, args.day)?;
            print!("{}", report::render_zodiac(profile));
        }
        Commands::Quote(args) => remote::quote(&config()?, args)?,
        Commands::Browse(args) => remote::browse(&config()?, args)?,
        Commands::Compare(args) => remote::compare(&config()?, args)?,
    }

    Ok(())
}

#[cfg(feature = "remote")]
mod remote {
    use crate::cli::{BrowseArgs, CompareArgs, QuoteArgs, QuoteKind};
    use anyhow::{Context, Result};
    use std::future::Future;
    use toyota_galaxy::{
        report, ApiConfig, CompareRequest, FinanceClient, QuoteRequest, VehicleQuery,
    };

    fn block_on<F: Future>(future: F) -> Result<F::Output> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        Ok(runtime.block_on(future))
    }

    pub fn quote(config: &ApiConfig, args: QuoteArgs) -> Result<()> {
        let client = FinanceClient::new(config)?;
        let request = QuoteRequest {
            price: args.price,
            credit_score: args.credit_score,
            months: args.months,
            downpayment: args.down,
        };

        let text = match args.kind {
            QuoteKind::Apr => {
                let quote = block_on(client.apr_quote(&request))??;
                report::render_apr_quote(&request, &quote)
            }
            QuoteKind::Lease => {
                let quote = block_on(client.lease_quote(&request))??;
                report::render_lease_quote(&request, &quote)
            }
            QuoteKind::Loan => {
                let options = block_on(client.loan_options(&request))??;
                report::render_loan_options(&options)
            }
        };
        print!("{}", text);
        Ok(())
    }

    pub fn browse(config: &ApiConfig, args: BrowseArgs) -> Result<()> {
        let client = FinanceClient::new(config)?;
        let query = VehicleQuery {
            filters: args.filter.filters(),
            model_text: args.model,
            sort: args.filter.sort.into(),
            order: args.filter.order(),
            limit: Some(args.limit),
        };

        let response = block_on(client.search(&query))??;
        print!("{}", report::render_listing(&response.results, response.count));
        Ok(())
    }

    pub fn compare(config: &ApiConfig, args: CompareArgs) -> Result<()> {
        let client = FinanceClient::new(config)?;
        let request = CompareRequest {
            id1: args.id1,
            id2: args.id2,
            credit_score: args.credit_score,
            months: args.months,
            downpayment: args.down,
        };

        let comparison = block_on(client.compare(&request))??;
        print!("{}", report::render_comparison(&comparison));
        Ok(())
    }
}

#[cfg(not(feature = "remote"))]
mod remote {
    use crate::cli::{BrowseArgs, CompareArgs, QuoteArgs};
    use anyhow::{bail, Result};
    use toyota_galaxy::ApiConfig;

    const HINT: &str = "Remote quotes not available! Rebuild with: cargo build --features remote";

    pub fn quote(_config: &ApiConfig, _args: QuoteArgs) -> Result<()> {
        bail!(HINT)
    }

    pub fn browse(_config: &ApiConfig, _args: BrowseArgs) -> Result<()> {
        bail!(HINT)
    }

    pub fn compare(_config: &ApiConfig, _args: CompareArgs) -> Result<()> {
        bail!(HINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GalaxyCli {
        GalaxyCli::try_parse_from(args.iter().copied()).unwrap()
    }

    fn invalid_field(err: &anyhow::Error) -> Option<&str> {
        err.downcast_ref::<GalaxyError>().and_then(GalaxyError::field)
    }

    #[test]
    fn test_local_commands_ignore_bad_api_url() {
        let bad = "localhost:8000";

        assert!(run(parse(&["toyota-galaxy", "--api-url", bad, "loan"])).is_ok());
        assert!(run(parse(&["toyota-galaxy", "--api-url", bad, "lease"])).is_ok());
        assert!(run(parse(&["toyota-galaxy", "--api-url", bad, "search", "--year", "2023"])).is_ok());
        assert!(run(parse(&["toyota-galaxy", "--api-url", bad, "zodiac", "--month", "7", "--day", "23"])).is_ok());
    }

    #[test]
    fn test_remote_commands_check_api_url() {
        let cli = parse(&["toyota-galaxy", "--api-url", "localhost:8000", "quote", "apr"]);
        let err = run(cli).unwrap_err();
        assert_eq!(invalid_field(&err), Some("base_url"));
    }

    #[test]
    fn test_search_rejects_nan_price() {
        let cli = parse(&["toyota-galaxy", "search", "--min-price", "NaN"]);
        let err = run(cli).unwrap_err();
        assert_eq!(invalid_field(&err), Some("min_price"));
    }
}
