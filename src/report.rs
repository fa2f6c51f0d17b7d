// 🖨️ Report Rendering - plain-text views of estimates and listings
// Used by the CLI; every function returns a String so output is testable

use crate::finance::{FinanceInputs, LeaseEstimate, LeaseInputs, LoanEstimate};
use crate::inventory::{ListedVehicle, VehicleRecord};
use crate::search::{SortKey, SortOrder};
use crate::zodiac::ZodiacProfile;
use std::fmt::Write;

#[cfg(feature = "remote")]
use crate::api::{AprQuote, Comparison, LeaseQuote, LoanOptions, QuoteRequest};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// `$1,234.56`, negative amounts as `-$1,234.56`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let digits = dollars.to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Whole-dollar variant used for sticker prices
pub fn format_price(amount: f64) -> String {
    let full = format_currency(amount.round());
    full.trim_end_matches(".00").to_string()
}

pub fn render_loan(inputs: &FinanceInputs, estimate: &LoanEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📈 Loan Estimate");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Vehicle price:    {}", format_currency(inputs.price));
    let _ = writeln!(out, "Down payment:     {}", format_currency(inputs.down_payment));
    let _ = writeln!(out, "Interest rate:    {}%", inputs.annual_rate_percent);
    let _ = writeln!(out, "Term:             {} months", inputs.term_months);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Monthly payment:  {}", format_currency(estimate.monthly_payment));
    let _ = writeln!(out, "Total interest:   {}", format_currency(estimate.total_interest));
    out
}

pub fn render_lease(inputs: &LeaseInputs, estimate: &LeaseEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📉 Lease Estimate");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Vehicle price:    {}", format_currency(inputs.price));
    let _ = writeln!(out, "Down payment:     {}", format_currency(inputs.down_payment));
    let _ = writeln!(out, "Term:             {} months", inputs.term_months);
    let _ = writeln!(
        out,
        "Residual:         {}% ({})",
        inputs.residual_percent,
        format_currency(estimate.residual_amount)
    );
    let _ = writeln!(out, "Money factor:     {}", inputs.money_factor);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Monthly payment:  {}", format_currency(estimate.monthly_payment));
    out
}

pub fn render_showroom(vehicles: &[VehicleRecord], key: SortKey, order: SortOrder) -> String {
    let mut out = String::new();
    let plural = if vehicles.len() == 1 { "" } else { "s" };
    let _ = writeln!(
        out,
        "Found {} vehicle{} (sorted by {}, {})",
        vehicles.len(),
        plural,
        key.as_param(),
        order.label()
    );

    for v in vehicles {
        let _ = writeln!(
            out,
            "  #{:<3} {:<24} {:>9}  {:>3} hp  {:<20} {} · {}",
            v.id,
            v.title(),
            format_price(v.price),
            v.horsepower,
            v.mileage_band.label(),
            v.city,
            v.color
        );
    }
    out
}

pub fn render_listing(vehicles: &[ListedVehicle], total: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Showing {} of {} vehicles", vehicles.len(), total);

    for v in vehicles {
        let id = v.id.map(|id| format!("#{}", id)).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {:<5} {:<32} {:>9}  {:>6.0} mi  {:>4.0} hp  {:>4.1} mpg  {}",
            id,
            v.title(),
            format_price(v.price),
            v.mileage,
            v.horsepower,
            v.mpg_combined,
            v.body_type
        );
    }
    out
}

pub fn render_zodiac(profile: &ZodiacProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {} ({})", profile.emoji, profile.sign, profile.date_range_label);
    let _ = writeln!(out, "Element: {:?}", profile.element);
    let _ = writeln!(out, "Traits:  {}", profile.traits.join(", "));
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "✨ Your cosmic match: {}", profile.recommended_model);
    let _ = writeln!(out, "{}", profile.explanation);
    out
}

#[cfg(feature = "remote")]
pub fn render_apr_quote(request: &QuoteRequest, quote: &AprQuote) -> String {
    let principal = request.price - request.downpayment;
    let mut out = String::new();
    let _ = writeln!(out, "📈 Loan Quote (credit score {})", request.credit_score);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "APR:              {}%", quote.apr_percent);
    let _ = writeln!(out, "Monthly payment:  {}", format_currency(quote.monthly_payment));
    let _ = writeln!(out, "Total paid:       {}", format_currency(quote.total_paid));
    let _ = writeln!(out, "Total interest:   {}", format_currency(quote.total_interest(principal)));
    out
}

#[cfg(feature = "remote")]
pub fn render_lease_quote(request: &QuoteRequest, quote: &LeaseQuote) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📉 Lease Quote (credit score {})", request.credit_score);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "APR:              {}%", quote.apr_percent);
    let _ = writeln!(out, "Monthly lease:    {}", format_currency(quote.monthly_lease));
    let _ = writeln!(out, "Residual value:   {}", format_currency(quote.residual_value));
    if let Some(total) = quote.total_paid {
        let _ = writeln!(out, "Total paid:       {}", format_currency(total));
    }
    out
}

#[cfg(feature = "remote")]
pub fn render_loan_options(options: &LoanOptions) -> String {
    let (best_key, _) = options.cheapest();
    let mut out = String::new();
    let _ = writeln!(out, "🏦 Loan Programs");
    let _ = writeln!(out, "{}", RULE);

    for (key, option) in options.programs() {
        let marker = if key == best_key { "★" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<34} {:>5}%  {:>10}/mo  down {:>10}  total {}",
            marker,
            option.program,
            option.apr_percent,
            format_currency(option.monthly_payment),
            format_currency(option.down_required),
            format_currency(option.total_paid)
        );
    }
    out
}

#[cfg(feature = "remote")]
pub fn render_comparison(comparison: &Comparison) -> String {
    let a = &comparison.car_a;
    let b = &comparison.car_b;
    let d = &comparison.diffs;

    let mut out = String::new();
    let _ = writeln!(out, "🔀 Vehicle Comparison");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "A: {}  {}  {}/mo", a.title(), format_price(a.price), format_currency(comparison.finance_a.monthly_payment));
    let _ = writeln!(out, "B: {}  {}  {}/mo", b.title(), format_price(b.price), format_currency(comparison.finance_b.monthly_payment));
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Price (A−B):      {}", format_currency(d.price_diff));
    let _ = writeln!(out, "Monthly (A−B):    {}", format_currency(d.monthly_payment_diff));
    let _ = writeln!(out, "MPG (A−B):        {:+}", d.mpg_combined_diff);
    let _ = writeln!(out, "Horsepower (A−B): {:+}", d.horsepower_diff);
    let _ = writeln!(out, "Year (A−B):       {:+}", d.year_diff);
    let _ = writeln!(out, "Mileage (A−B):    {:+} mi", d.mileage_diff);
    let _ = writeln!(
        out,
        "Terms: credit score {}, {} months, {} down",
        comparison.inputs.credit_score,
        comparison.inputs.months,
        format_currency(comparison.inputs.downpayment)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::estimate_loan;
    use crate::inventory::showroom;
    use crate::zodiac::zodiac_for_date;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(534.8325), "$534.83");
        assert_eq!(format_currency(28500.0), "$28,500.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-6000.0), "-$6,000.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(48900.0), "$48,900");
        assert_eq!(format_price(999.6), "$1,000");
    }

    #[test]
    fn test_render_loan() {
        let inputs = FinanceInputs {
            price: 35000.0,
            down_payment: 7000.0,
            term_months: 60,
            annual_rate_percent: 5.5,
        };
        let estimate = estimate_loan(35000.0, 7000.0, 5.5, 60).unwrap();
        let text = render_loan(&inputs, &estimate);
        assert!(text.contains("Monthly payment:  $534.83"));
        assert!(text.contains("$35,000.00"));
    }

    #[test]
    fn test_render_showroom_counts() {
        let vehicles = showroom();
        let text = render_showroom(&vehicles[..1], SortKey::Price, SortOrder::Asc);
        assert!(text.starts_with("Found 1 vehicle (sorted by price, Ascending)"));
        assert!(text.contains("2025 Toyota Camry"));
        assert!(text.contains("$28,500"));
    }

    #[test]
    fn test_render_zodiac() {
        let text = render_zodiac(zodiac_for_date(7, 23).unwrap());
        assert!(text.contains("Leo (July 23 - August 22)"));
        assert!(text.contains("Toyota Tundra"));
        assert!(text.contains("Confident, Generous, Leader"));
    }
}
