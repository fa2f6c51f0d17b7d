// Toyota Galaxy - Core Library
// Payment estimators, showroom search, zodiac match and the financing API client

pub mod error;
pub mod config;
pub mod logging;
pub mod finance;    // Loan amortization + simplified lease
pub mod inventory;  // Showroom records + API listings
pub mod search;     // Filter/sort for the browse view
pub mod zodiac;     // Cosmic Car Match
pub mod session;    // Quote board (last valid result)
pub mod report;     // Plain-text rendering
#[cfg(feature = "remote")]
pub mod api;        // Financing API client

// Re-export commonly used types
pub use error::{GalaxyError, Result};
pub use config::ApiConfig;
pub use finance::{
    FinanceInputs, LeaseInputs, LoanEstimate, LeaseEstimate,
    estimate_loan, estimate_lease, money_factor_from_apr, DEFAULT_MONEY_FACTOR,
};
pub use inventory::{
    VehicleRecord, ListedVehicle, MileageBand,
    showroom, load_inventory_csv,
};
pub use search::{SearchFilters, SortKey, SortOrder, filter_and_sort};
pub use zodiac::{ZodiacProfile, Element, zodiac_for_date, zodiac_for};
pub use session::{QuoteBoard, Settled, Ticket};
#[cfg(feature = "remote")]
pub use api::{
    FinanceClient, VehicleQuery, QuoteRequest, CompareRequest,
    FilterResponse, AprQuote, LeaseQuote, LoanOption, LoanOptions, Comparison,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
