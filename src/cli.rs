//! Command-line arguments for `toyota-galaxy`, defined with `clap` derive.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toyota_galaxy::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_TIMEOUT_SECS};
use toyota_galaxy::finance::DEFAULT_MONEY_FACTOR;
use toyota_galaxy::{MileageBand, SearchFilters, SortKey, SortOrder};

/// Toyota Galaxy finance & showroom toolkit.
#[derive(Parser, Debug)]
#[command(name = "toyota-galaxy", version, propagate_version = true)]
pub struct GalaxyCli {
    /// Base URL of the financing API.
    #[arg(long, global = true, env = ENV_API_URL, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout for the financing API, in seconds.
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log output format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate a monthly loan payment locally.
    Loan(LoanArgs),
    /// Estimate a monthly lease payment locally.
    Lease(LeaseArgs),
    /// Search the showroom inventory.
    Search(SearchArgs),
    /// Find the Toyota that matches a birthday.
    Zodiac(ZodiacArgs),
    /// Ask the financing API for a quote.
    Quote(QuoteArgs),
    /// Browse the financing API's inventory.
    Browse(BrowseArgs),
    /// Compare two vehicles with financing from the API.
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
pub struct LoanArgs {
    #[arg(long, default_value_t = 35000.0)]
    pub price: f64,
    #[arg(long, default_value_t = 7000.0)]
    pub down: f64,
    /// Annual interest rate, percent.
    #[arg(long, default_value_t = 5.5)]
    pub rate: f64,
    #[arg(long, default_value_t = 60)]
    pub months: u32,
}

#[derive(Args, Debug)]
pub struct LeaseArgs {
    #[arg(long, default_value_t = 35000.0)]
    pub price: f64,
    #[arg(long, default_value_t = 3000.0)]
    pub down: f64,
    #[arg(long, default_value_t = 36)]
    pub months: u32,
    /// Residual value, percent of price.
    #[arg(long, default_value_t = 55.0)]
    pub residual: f64,
    #[arg(long, default_value_t = DEFAULT_MONEY_FACTOR)]
    pub money_factor: f64,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[arg(long)]
    pub min_price: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
    #[arg(long, value_enum)]
    pub mileage: Option<MileageArg>,
    #[arg(long)]
    pub min_hp: Option<u32>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long, value_enum, default_value_t = SortArg::Price)]
    pub sort: SortArg,
    /// Sort descending instead of ascending.
    #[arg(long)]
    pub desc: bool,
}

impl FilterArgs {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            min_price: self.min_price,
            max_price: self.max_price,
            mileage_band: self.mileage.map(Into::into),
            min_horsepower: self.min_hp,
            year: self.year,
        }
    }

    pub fn order(&self) -> SortOrder {
        if self.desc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    /// CSV inventory to search instead of the built-in showroom.
    #[arg(long)]
    pub inventory: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    /// Free-text model search.
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long, default_value_t = 50)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct ZodiacArgs {
    #[arg(long)]
    pub month: u32,
    #[arg(long)]
    pub day: u32,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    #[arg(value_enum)]
    pub kind: QuoteKind,
    #[arg(long, default_value_t = 35000.0)]
    pub price: f64,
    #[arg(long, default_value_t = 720)]
    pub credit_score: u32,
    #[arg(long, default_value_t = 60)]
    pub months: u32,
    /// Down payment (ignored by `loan`, where the service sets it).
    #[arg(long, default_value_t = 0.0)]
    pub down: f64,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[arg(long)]
    pub id1: u32,
    #[arg(long)]
    pub id2: u32,
    #[arg(long, default_value_t = 720)]
    pub credit_score: u32,
    #[arg(long, default_value_t = 60)]
    pub months: u32,
    #[arg(long, default_value_t = 5000.0)]
    pub down: f64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Apr,
    Lease,
    Loan,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MileageArg {
    Low,
    Medium,
    High,
}

impl From<MileageArg> for MileageBand {
    fn from(arg: MileageArg) -> Self {
        match arg {
            MileageArg::Low => MileageBand::Low,
            MileageArg::Medium => MileageBand::Medium,
            MileageArg::High => MileageBand::High,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    Price,
    Year,
    Horsepower,
    Mileage,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Price => SortKey::Price,
            SortArg::Year => SortKey::Year,
            SortArg::Horsepower => SortKey::Horsepower,
            SortArg::Mileage => SortKey::Mileage,
        }
    }
}
