// 🚗 Vehicle Inventory - Showroom records + API listings
// Immutable records; the showroom list ships with the binary

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

// ============================================================================
// MILEAGE BAND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MileageBand {
    Low,
    Medium,
    High,
}

impl MileageBand {
    /// Ordinal used for sorting (low=1, medium=2, high=3)
    pub fn ordinal(&self) -> u8 {
        match self {
            MileageBand::Low => 1,
            MileageBand::Medium => 2,
            MileageBand::High => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MileageBand::Low => "Low (0-30k mi)",
            MileageBand::Medium => "Medium (30-60k mi)",
            MileageBand::High => "High (60k+ mi)",
        }
    }

    /// Odometer bounds in miles, as sent to the financing API's `/filter`
    pub fn mile_range(&self) -> (u32, u32) {
        match self {
            MileageBand::Low => (0, 30_000),
            MileageBand::Medium => (30_000, 60_000),
            MileageBand::High => (60_000, 300_000),
        }
    }

    /// Classify an odometer reading
    pub fn from_miles(miles: f64) -> Self {
        if miles < 30_000.0 {
            MileageBand::Low
        } else if miles < 60_000.0 {
            MileageBand::Medium
        } else {
            MileageBand::High
        }
    }
}

// ============================================================================
// SHOWROOM RECORD
// ============================================================================

/// A showroom vehicle. `id` is only used to select records for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: u32,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub horsepower: u32,
    pub mileage_band: MileageBand,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub color: String,
}

impl VehicleRecord {
    pub fn title(&self) -> String {
        format!("{} Toyota {}", self.year, self.model)
    }
}

const SHOWROOM: &[(u32, &str, i32, f64, u32, MileageBand, &str, &str)] = &[
    (1, "Camry", 2025, 28500.0, 203, MileageBand::Low, "Houston", "Silver"),
    (2, "Camry", 2024, 26800.0, 203, MileageBand::Medium, "Dallas", "Blue"),
    (3, "Corolla", 2025, 22500.0, 169, MileageBand::Low, "Austin", "White"),
    (4, "Corolla", 2023, 20100.0, 169, MileageBand::High, "San Antonio", "Red"),
    (5, "RAV4", 2025, 32500.0, 203, MileageBand::Low, "Houston", "Black"),
    (6, "RAV4", 2024, 30200.0, 203, MileageBand::Medium, "Fort Worth", "Gray"),
    (7, "Highlander", 2025, 42500.0, 295, MileageBand::Low, "Dallas", "White"),
    (8, "Highlander", 2023, 38900.0, 295, MileageBand::Medium, "Austin", "Blue"),
    (9, "Tacoma", 2025, 35800.0, 278, MileageBand::Low, "San Antonio", "Green"),
    (10, "Tacoma", 2024, 33500.0, 278, MileageBand::Medium, "El Paso", "Silver"),
    (11, "Tundra", 2025, 48900.0, 389, MileageBand::Low, "Houston", "Black"),
    (12, "Tundra", 2023, 44200.0, 389, MileageBand::High, "Dallas", "Red"),
    (13, "Prius", 2025, 28400.0, 194, MileageBand::Low, "Austin", "Blue"),
    (14, "Prius", 2024, 26500.0, 194, MileageBand::Medium, "Plano", "White"),
    (15, "4Runner", 2025, 45600.0, 270, MileageBand::Low, "Fort Worth", "Gray"),
    (16, "4Runner", 2024, 42800.0, 270, MileageBand::Medium, "Houston", "Black"),
    (17, "Camry", 2022, 24500.0, 203, MileageBand::High, "Arlington", "Silver"),
    (18, "Corolla", 2024, 21800.0, 169, MileageBand::Medium, "Laredo", "Blue"),
    (19, "RAV4", 2023, 28900.0, 203, MileageBand::High, "Corpus Christi", "Red"),
    (20, "Highlander", 2024, 40500.0, 295, MileageBand::Low, "El Paso", "White"),
];

/// The built-in showroom inventory
pub fn showroom() -> Vec<VehicleRecord> {
    SHOWROOM
        .iter()
        .map(|&(id, model, year, price, horsepower, mileage_band, city, color)| VehicleRecord {
            id,
            model: model.to_string(),
            year,
            price,
            horsepower,
            mileage_band,
            city: city.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// Load showroom records from a CSV file
///
/// Header: `id,model,year,price,horsepower,mileage_band,city,color`
pub fn load_inventory_csv(path: &Path) -> Result<Vec<VehicleRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut vehicles = Vec::new();

    for result in reader.deserialize() {
        let vehicle: VehicleRecord = result?;
        vehicles.push(vehicle);
    }

    debug!(path = %path.display(), count = vehicles.len(), "inventory loaded");
    Ok(vehicles)
}

// ============================================================================
// API LISTING
// ============================================================================

/// A vehicle as listed by the financing API's inventory endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedVehicle {
    #[serde(default)]
    pub id: Option<u32>,
    pub year: i32,
    #[serde(default = "default_make")]
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub trim: String,
    #[serde(default)]
    pub mileage: f64,
    #[serde(default)]
    pub mpg_city: Option<f64>,
    #[serde(default)]
    pub mpg_hwy: Option<f64>,
    #[serde(default)]
    pub mpg_combined: f64,
    #[serde(default)]
    pub horsepower: f64,
    #[serde(default)]
    pub body_type: String,
    #[serde(default)]
    pub fuel_type: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_make() -> String {
    "Toyota".to_string()
}

impl ListedVehicle {
    pub fn mileage_band(&self) -> MileageBand {
        MileageBand::from_miles(self.mileage)
    }

    pub fn title(&self) -> String {
        let mut title = format!("{} {} {}", self.year, self.make, self.model);
        if !self.trim.is_empty() {
            title.push(' ');
            title.push_str(&self.trim);
        }
        title
    }
}

// ============================================================================
// TESTS
// ============================================================================
