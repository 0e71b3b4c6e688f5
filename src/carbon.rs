//! Carbon footprint calculator
//!
//! Pure lookup-table multiplication: CO2e = quantity × factor. Bad input is
//! coerced to a zero-emission result with a diagnostic description, never an
//! error.

use serde::{Deserialize, Serialize};

use crate::model::ActivityCategory;

/// Base EcoPoints for any log
pub const BASE_POINTS: u32 = 10;
/// Bonus on top of the base for a zero-emission log
pub const ZERO_EMISSION_BONUS: u32 = 40;
/// Bonus on top of the base for a log under 1 kg CO2e
pub const LOW_EMISSION_BONUS: u32 = 15;
/// Threshold (kg CO2e) below which a log counts as low-emission
pub const LOW_EMISSION_THRESHOLD: f64 = 1.0;

/// Every activity type the calculator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    CarPetrol,
    CarElectric,
    Bus,
    Train,
    FlightShort,
    Bike,
    Electricity,
    MealVegan,
    MealVegetarian,
    MealMeat,
    Electronics,
    Fashion,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 12] = [
        ActivityKind::CarPetrol,
        ActivityKind::CarElectric,
        ActivityKind::Bus,
        ActivityKind::Train,
        ActivityKind::FlightShort,
        ActivityKind::Bike,
        ActivityKind::Electricity,
        ActivityKind::MealVegan,
        ActivityKind::MealVegetarian,
        ActivityKind::MealMeat,
        ActivityKind::Electronics,
        ActivityKind::Fashion,
    ];

    /// Form value key
    pub fn key(&self) -> &'static str {
        match self {
            ActivityKind::CarPetrol => "car_petrol",
            ActivityKind::CarElectric => "car_electric",
            ActivityKind::Bus => "bus",
            ActivityKind::Train => "train",
            ActivityKind::FlightShort => "flight_short",
            ActivityKind::Bike => "bike",
            ActivityKind::Electricity => "electricity",
            ActivityKind::MealVegan => "meal_vegan",
            ActivityKind::MealVegetarian => "meal_vegetarian",
            ActivityKind::MealMeat => "meal_meat",
            ActivityKind::Electronics => "electronics",
            ActivityKind::Fashion => "fashion",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::CarPetrol => "Petrol Car",
            ActivityKind::CarElectric => "Electric Car",
            ActivityKind::Bus => "Bus",
            ActivityKind::Train => "Train",
            ActivityKind::FlightShort => "Short Flight",
            ActivityKind::Bike => "Bicycle / Walk",
            ActivityKind::Electricity => "Electricity Usage",
            ActivityKind::MealVegan => "Vegan Meal",
            ActivityKind::MealVegetarian => "Vegetarian Meal",
            ActivityKind::MealMeat => "Meat-based Meal",
            ActivityKind::Electronics => "Electronics Purchase",
            ActivityKind::Fashion => "Fashion Purchase",
        }
    }

    pub fn category(&self) -> ActivityCategory {
        match self {
            ActivityKind::CarPetrol
            | ActivityKind::CarElectric
            | ActivityKind::Bus
            | ActivityKind::Train
            | ActivityKind::FlightShort
            | ActivityKind::Bike => ActivityCategory::Transportation,
            ActivityKind::Electricity => ActivityCategory::Energy,
            ActivityKind::MealVegan | ActivityKind::MealVegetarian | ActivityKind::MealMeat => {
                ActivityCategory::Food
            }
            ActivityKind::Electronics | ActivityKind::Fashion => ActivityCategory::GoodsServices,
        }
    }

    /// Emission factor in kg CO2e per unit
    pub fn factor(&self) -> f64 {
        match self {
            // per km
            ActivityKind::CarPetrol => 0.192,
            ActivityKind::CarElectric => 0.05,
            ActivityKind::Bus => 0.105,
            ActivityKind::Train => 0.04,
            ActivityKind::FlightShort => 0.255,
            ActivityKind::Bike => 0.0,
            // per kWh
            ActivityKind::Electricity => 0.475,
            // per meal
            ActivityKind::MealVegan => 0.5,
            ActivityKind::MealVegetarian => 1.0,
            ActivityKind::MealMeat => 3.0,
            // per item
            ActivityKind::Electronics => 50.0,
            ActivityKind::Fashion => 10.0,
        }
    }

    fn describe(&self, quantity: f64) -> String {
        let q = format_quantity(quantity);
        match self {
            ActivityKind::CarPetrol => format!("Drove a petrol car ({q} km)"),
            ActivityKind::CarElectric => format!("Drove an electric car ({q} km)"),
            ActivityKind::Bus => format!("Took the bus ({q} km)"),
            ActivityKind::Train => format!("Train journey ({q} km)"),
            ActivityKind::FlightShort => format!("Short-haul flight ({q} km)"),
            ActivityKind::Bike => format!("Cycled ({q} km)"),
            ActivityKind::Electricity => format!("Used electricity ({q} kWh)"),
            ActivityKind::MealVegan => format!("Ate {q} vegan meal(s)"),
            ActivityKind::MealVegetarian => format!("Ate {q} vegetarian meal(s)"),
            ActivityKind::MealMeat => format!("Ate {q} meat-based meal(s)"),
            ActivityKind::Electronics => format!("Purchased {q} electronic item(s)"),
            ActivityKind::Fashion => format!("Purchased {q} fashion item(s)"),
        }
    }
}

/// Measuring unit shown next to the amount field
pub fn unit_for(category: ActivityCategory) -> &'static str {
    match category {
        ActivityCategory::Transportation => "km",
        ActivityCategory::Energy => "kWh",
        ActivityCategory::Food => "meals",
        ActivityCategory::GoodsServices => "items",
    }
}

/// Activity types offered for a category, in form order
pub fn options_for(category: ActivityCategory) -> Vec<ActivityKind> {
    ActivityKind::ALL
        .into_iter()
        .filter(|k| k.category() == category)
        .collect()
}

/// First option of a category (the form resets to this on category change)
pub fn default_option(category: ActivityCategory) -> ActivityKind {
    match category {
        ActivityCategory::Transportation => ActivityKind::CarPetrol,
        ActivityCategory::Energy => ActivityKind::Electricity,
        ActivityCategory::Food => ActivityKind::MealVegan,
        ActivityCategory::GoodsServices => ActivityKind::Electronics,
    }
}

/// Calculator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub description: String,
    /// kg CO2e, never negative or NaN
    pub co2e: f64,
    pub eco_points: u32,
}

/// Map (category, activity type, quantity) to a footprint.
///
/// Quantities that are not strictly positive (including NaN) give zero
/// emissions and an "Invalid ..." description. A type that does not belong
/// to the category gives zero emissions and an "Unknown ..." description.
pub fn calculate_footprint(category: ActivityCategory, kind: &str, quantity: f64) -> Footprint {
    let (description, co2e) = if quantity.is_nan() || quantity <= 0.0 {
        (invalid_description(category), 0.0)
    } else {
        match ActivityKind::from_key(kind).filter(|k| k.category() == category) {
            Some(kind) => (kind.describe(quantity), quantity * kind.factor()),
            None => (unknown_description(category, quantity), 0.0),
        }
    };

    // inf × 0 and friends
    let co2e = if co2e.is_nan() || co2e < 0.0 { 0.0 } else { co2e };

    Footprint {
        description,
        co2e,
        eco_points: eco_points(co2e),
    }
}

/// EcoPoints policy: base 10, +40 at exactly zero, +15 under 1 kg
pub fn eco_points(co2e: f64) -> u32 {
    if co2e == 0.0 {
        BASE_POINTS + ZERO_EMISSION_BONUS
    } else if co2e < LOW_EMISSION_THRESHOLD {
        BASE_POINTS + LOW_EMISSION_BONUS
    } else {
        BASE_POINTS
    }
}

fn invalid_description(category: ActivityCategory) -> String {
    match category {
        ActivityCategory::Transportation => "Invalid transportation distance".to_string(),
        ActivityCategory::Energy => "Invalid energy amount".to_string(),
        ActivityCategory::Food => "Invalid number of meals".to_string(),
        ActivityCategory::GoodsServices => "Invalid number of items".to_string(),
    }
}

fn unknown_description(category: ActivityCategory, quantity: f64) -> String {
    let q = format_quantity(quantity);
    match category {
        ActivityCategory::Transportation => format!("Unknown transportation ({q} km)"),
        ActivityCategory::Energy => format!("Unknown energy usage ({q} kWh)"),
        ActivityCategory::Food => format!("Unknown meal type ({q} meals)"),
        ActivityCategory::GoodsServices => format!("Unknown purchase ({q} items)"),
    }
}

/// Shortest round-trip rendering: 15.0 -> "15", 2.5 -> "2.5"
pub fn format_quantity(quantity: f64) -> String {
    format!("{quantity}")
}
