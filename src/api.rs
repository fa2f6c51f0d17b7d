// 🌐 Financing API Client
// Typed access to the remote inventory + financing service
//
// The service owns inventory, APR tiers and special-program eligibility.
// This client only builds requests and decodes responses.

use crate::config::ApiConfig;
use crate::error::{GalaxyError, Result};
use crate::inventory::ListedVehicle;
use crate::search::{SearchFilters, SortKey, SortOrder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Page size the browse view asks for
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

// ============================================================================
// REQUESTS
// ============================================================================

/// Inventory query for `GET /filter`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleQuery {
    pub filters: SearchFilters,
    /// Free-text model search (`q`)
    pub model_text: Option<String>,
    pub sort: SortKey,
    pub order: SortOrder,
    pub limit: Option<u32>,
}

impl VehicleQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.filters.to_query(
            self.sort,
            self.order,
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        );
        if let Some(text) = self.model_text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            params.push(("q", text.to_string()));
        }
        params
    }
}

/// Shared inputs for the `/apr`, `/lease` and `/loan` calculators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub price: f64,
    pub credit_score: u32,
    pub months: u32,
    #[serde(default)]
    pub downpayment: f64,
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(GalaxyError::invalid("price", "must be a non-negative number"));
        }
        if !self.downpayment.is_finite() || self.downpayment < 0.0 {
            return Err(GalaxyError::invalid("downpayment", "must be a non-negative number"));
        }
        if self.months == 0 {
            return Err(GalaxyError::invalid("months", "must be greater than zero"));
        }
        if !(300..=850).contains(&self.credit_score) {
            return Err(GalaxyError::invalid(
                "credit_score",
                format!("must be between 300 and 850, got {}", self.credit_score),
            ));
        }
        Ok(())
    }

    fn params(&self, with_down: bool) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("price", self.price.to_string()),
            ("credit_score", self.credit_score.to_string()),
            ("months", self.months.to_string()),
        ];
        if with_down {
            params.push(("downpayment", self.downpayment.to_string()));
        }
        params
    }
}

/// Side-by-side comparison for `GET /compare`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub id1: u32,
    pub id2: u32,
    pub credit_score: u32,
    pub months: u32,
    pub downpayment: f64,
}

impl CompareRequest {
    pub fn validate(&self) -> Result<()> {
        if self.id1 == self.id2 {
            return Err(GalaxyError::invalid("id2", "select two different vehicles"));
        }
        QuoteRequest {
            price: 0.0,
            credit_score: self.credit_score,
            months: self.months,
            downpayment: self.downpayment,
        }
        .validate()
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id1", self.id1.to_string()),
            ("id2", self.id2.to_string()),
            ("credit_score", self.credit_score.to_string()),
            ("months", self.months.to_string()),
            ("downpayment", self.downpayment.to_string()),
        ]
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResponse {
    pub results: Vec<ListedVehicle>,
    pub count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AprQuote {
    pub apr_percent: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    #[serde(default)]
    pub price_used: Option<f64>,
}

impl AprQuote {
    /// Interest over the life of the loan for the financed principal
    pub fn total_interest(&self, principal: f64) -> f64 {
        self.total_paid - principal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseQuote {
    pub monthly_lease: f64,
    pub apr_percent: f64,
    pub residual_value: f64,
    #[serde(default)]
    pub total_paid: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOption {
    pub program: String,
    pub apr_percent: f64,
    pub down_required: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialPrograms {
    pub student: LoanOption,
    pub military: LoanOption,
    pub elderly: LoanOption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOptions {
    pub standard: LoanOption,
    pub special_programs: SpecialPrograms,
}

impl LoanOptions {
    /// Standard offer followed by the special programs, with their keys
    pub fn programs(&self) -> [(&'static str, &LoanOption); 4] {
        [
            ("standard", &self.standard),
            ("student", &self.special_programs.student),
            ("military", &self.special_programs.military),
            ("elderly", &self.special_programs.elderly),
        ]
    }

    /// Option with the lowest monthly payment; the first listed wins ties
    pub fn cheapest(&self) -> (&'static str, &LoanOption) {
        let programs = self.programs();
        let mut best = programs[0];
        for candidate in &programs[1..] {
            if candidate.1.monthly_payment < best.1.monthly_payment {
                best = *candidate;
            }
        }
        best
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareInputs {
    pub credit_score: u32,
    pub months: u32,
    pub downpayment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub apr_percent: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    #[serde(default)]
    pub months: Option<u32>,
    #[serde(default)]
    pub downpayment: Option<f64>,
}

/// Signed deltas, vehicle A minus vehicle B
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDiffs {
    pub price_diff: f64,
    pub mpg_combined_diff: f64,
    pub horsepower_diff: f64,
    pub mileage_diff: f64,
    pub year_diff: f64,
    pub monthly_payment_diff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub inputs: CompareInputs,
    #[serde(rename = "carA")]
    pub car_a: ListedVehicle,
    #[serde(rename = "financeA")]
    pub finance_a: FinanceSummary,
    #[serde(rename = "carB")]
    pub car_b: ListedVehicle,
    #[serde(rename = "financeB")]
    pub finance_b: FinanceSummary,
    pub diffs: ComparisonDiffs,
}

// ============================================================================
// CLIENT
// ============================================================================

pub struct FinanceClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl FinanceClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GalaxyError::NetworkFailure(format!("failed to build HTTP client: {}", e)))?;

        Ok(FinanceClient {
            config: config.clone(),
            http,
        })
    }

    /// `GET /filter` - inventory search
    pub async fn search(&self, query: &VehicleQuery) -> Result<FilterResponse> {
        query.filters.validate()?;
        let body = self.fetch("/filter", &query.params()).await?;
        decode("/filter", &body)
    }

    /// `GET /apr` - loan quote at the credit-tier APR
    pub async fn apr_quote(&self, request: &QuoteRequest) -> Result<AprQuote> {
        request.validate()?;
        let body = self.fetch("/apr", &request.params(true)).await?;
        decode("/apr", &body)
    }

    /// `GET /lease` - lease quote at the credit-tier APR
    pub async fn lease_quote(&self, request: &QuoteRequest) -> Result<LeaseQuote> {
        request.validate()?;
        let body = self.fetch("/lease", &request.params(true)).await?;
        decode("/lease", &body)
    }

    /// `GET /loan` - standard offer plus student/military/elderly programs
    ///
    /// The service decides the required down payment, so none is sent.
    pub async fn loan_options(&self, request: &QuoteRequest) -> Result<LoanOptions> {
        request.validate()?;
        let body = self.fetch("/loan", &request.params(false)).await?;
        decode("/loan", &body)
    }

    /// `GET /compare` - two vehicles side by side with financing
    pub async fn compare(&self, request: &CompareRequest) -> Result<Comparison> {
        request.validate()?;
        let body = self.fetch("/compare", &request.params()).await?;

        let value: serde_json::Value = decode("/compare", &body)?;
        if let Some(message) = value.get("error") {
            let message = message
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| message.to_string());
            warn!(endpoint = "/compare", %message, "comparison rejected");
            return Err(GalaxyError::Rejected(message));
        }

        serde_json::from_value(value)
            .map_err(|e| GalaxyError::MalformedResponse(format!("/compare: {}", e)))
    }

    async fn fetch(&self, path: &str, query: &[(&'static str, String)]) -> Result<String> {
        let url = self.config.endpoint(path);
        debug!(%url, params = query.len(), "financing API request");

        let response = self.http.get(&url).query(query).send().await.map_err(|e| {
            warn!(%url, error = %e, "financing API unreachable");
            GalaxyError::NetworkFailure(format!("{}: {}", path, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "financing API returned an error status");
            return Err(GalaxyError::NetworkFailure(format!(
                "{} returned HTTP {}",
                path, status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| GalaxyError::NetworkFailure(format!("{}: {}", path, e)))
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        warn!(endpoint = path, error = %e, "undecodable financing API response");
        GalaxyError::MalformedResponse(format!("{}: {}", path, e))
    })
}

// ============================================================================
// TESTS
// ============================================================================
