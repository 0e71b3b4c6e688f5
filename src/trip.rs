//! Trip planner: compare the footprint of transport modes for one journey
//!
//! Distances are mocked from the endpoint names; a real build would ask a
//! mapping service.

use rand::Rng;
use serde::Serialize;

use crate::carbon::{ActivityKind, calculate_footprint};
use crate::error::InputError;
use crate::model::ActivityCategory;

/// Modes offered by the planner, in form order
pub const TRANSPORT_MODES: [ActivityKind; 5] = [
    ActivityKind::CarPetrol,
    ActivityKind::CarElectric,
    ActivityKind::Bus,
    ActivityKind::Train,
    ActivityKind::FlightShort,
];

/// One priced transport mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripOption {
    pub kind: ActivityKind,
    /// Display label, e.g. "Petrol Car"
    pub mode: String,
    /// km
    pub distance: f64,
    /// kg CO2e
    pub co2e: f64,
}

/// A computed comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    /// Sorted by CO2e, highest first (chart order)
    pub options: Vec<TripOption>,
    pub selected: TripOption,
    pub best: TripOption,
}

impl TripPlan {
    /// Whether the user already picked the greenest mode
    pub fn is_best_choice(&self) -> bool {
        self.selected.kind == self.best.kind
    }

    /// kg CO2e saved by switching to the best mode
    pub fn potential_saving(&self) -> f64 {
        (self.selected.co2e - self.best.co2e).max(0.0)
    }
}

/// Mock distance from the endpoint names. Zero when either is blank.
pub fn estimate_distance<R: Rng + ?Sized>(origin: &str, destination: &str, rng: &mut R) -> f64 {
    if origin.trim().is_empty() || destination.trim().is_empty() {
        return 0.0;
    }
    let length = origin.chars().count() + destination.chars().count();
    let clamped = length.clamp(5, 50) as f64;
    let jitter = rng.random_range(0..200u32) as f64;
    (clamped * 25.0 + jitter).max(10.0)
}

/// Price every mode for the journey and pick out the selected and best ones
pub fn plan_trip<R: Rng + ?Sized>(
    origin: &str,
    destination: &str,
    mode: &str,
    rng: &mut R,
) -> Result<TripPlan, InputError> {
    if origin.trim().is_empty() || destination.trim().is_empty() {
        return Err(InputError::MissingTripEndpoint);
    }
    let selected_kind = TRANSPORT_MODES
        .into_iter()
        .find(|k| k.key() == mode)
        .ok_or_else(|| InputError::UnknownTransportMode(mode.to_string()))?;

    let distance = estimate_distance(origin, destination, rng);
    Ok(compare_modes(distance, selected_kind))
}

/// Price every mode for a known distance
pub fn compare_modes(distance: f64, selected: ActivityKind) -> TripPlan {
    let mut options: Vec<TripOption> = TRANSPORT_MODES
        .into_iter()
        .map(|kind| TripOption {
            kind,
            mode: kind.label().to_string(),
            distance,
            co2e: calculate_footprint(ActivityCategory::Transportation, kind.key(), distance).co2e,
        })
        .collect();

    let selected = options
        .iter()
        .find(|o| o.kind == selected)
        .cloned()
        .unwrap_or_else(|| options[0].clone());

    options.sort_by(|a, b| b.co2e.total_cmp(&a.co2e));

    // Lowest emissions; first in form order on ties
    let best = TRANSPORT_MODES
        .iter()
        .filter_map(|k| options.iter().find(|o| o.kind == *k))
        .fold(None::<&TripOption>, |best, o| match best {
            Some(b) if b.co2e <= o.co2e => Some(b),
            _ => Some(o),
        })
        .cloned()
        .unwrap_or_else(|| selected.clone());

    TripPlan {
        options,
        selected,
        best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_distance_bounds() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..50 {
            let d = estimate_distance("A", "B", &mut rng);
            // length 2 clamps to 5 → 125..325
            assert!((125.0..325.0).contains(&d));
        }
        assert_eq!(estimate_distance("  ", "Paris", &mut rng), 0.0);
    }

    #[test]
    fn test_plan_requires_endpoints() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            plan_trip("London", "", "bus", &mut rng),
            Err(InputError::MissingTripEndpoint)
        );
        assert!(matches!(
            plan_trip("London", "Paris", "bike", &mut rng),
            Err(InputError::UnknownTransportMode(_))
        ));
    }

    #[test]
    fn test_train_is_best_option() {
        let plan = compare_modes(100.0, ActivityKind::CarPetrol);
        assert_eq!(plan.best.kind, ActivityKind::Train);
        assert_eq!(plan.options[0].kind, ActivityKind::FlightShort);
        assert_eq!(plan.options.last().unwrap().kind, ActivityKind::Train);
        assert!(!plan.is_best_choice());
        assert!((plan.potential_saving() - 15.2).abs() < 1e-9);
    }

    #[test]
    fn test_best_choice_detected() {
        let plan = compare_modes(40.0, ActivityKind::Train);
        assert!(plan.is_best_choice());
        assert_eq!(plan.potential_saving(), 0.0);
    }
}
