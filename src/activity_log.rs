//! Activity log: the add-activity form and the filtered history listing

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::carbon::{self, ActivityKind};
use crate::error::InputError;
use crate::model::{Activity, ActivityCategory};

/// Add-activity form contents
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub category: ActivityCategory,
    /// Activity type key, e.g. `car_petrol`
    pub kind: String,
    /// Raw amount text as typed
    pub amount: String,
    pub date: NaiveDate,
}

impl ActivityForm {
    pub fn new(date: NaiveDate) -> Self {
        let category = ActivityCategory::Transportation;
        Self {
            category,
            kind: carbon::default_option(category).key().to_string(),
            amount: String::new(),
            date,
        }
    }

    /// Switch category, resetting the type and amount
    pub fn set_category(&mut self, category: ActivityCategory) {
        self.category = category;
        self.kind = carbon::default_option(category).key().to_string();
        self.amount.clear();
    }

    /// Unit label for the current selection
    pub fn unit(&self) -> &'static str {
        carbon::unit_for(self.category)
    }

    /// Validate and turn the form into an activity. Clears the amount on
    /// success so the form is ready for the next entry.
    pub fn submit(&mut self, id: u64) -> Result<Activity, InputError> {
        let amount = parse_amount(&self.amount)?;

        let kind_ok = ActivityKind::from_key(&self.kind)
            .is_some_and(|k| k.category() == self.category);
        if !kind_ok {
            return Err(InputError::UnknownActivityType {
                category: self.category,
                kind: self.kind.clone(),
            });
        }

        let footprint = carbon::calculate_footprint(self.category, &self.kind, amount);
        self.amount.clear();

        Ok(Activity {
            id,
            category: self.category,
            description: footprint.description,
            co2e: footprint.co2e,
            date: self.date.and_time(NaiveTime::MIN),
            eco_points: footprint.eco_points,
        })
    }
}

/// Parse a strictly positive amount
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => {
            log::debug!("Rejected activity amount {raw:?}");
            Err(InputError::InvalidAmount)
        }
    }
}

/// History sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    Co2eDesc,
    Co2eAsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::Co2eDesc => "co2e-desc",
            SortOrder::Co2eAsc => "co2e-asc",
        }
    }

    /// Unknown keys fall back to newest first
    pub fn from_str(s: &str) -> Self {
        match s {
            "date-asc" => SortOrder::DateAsc,
            "co2e-desc" => SortOrder::Co2eDesc,
            "co2e-asc" => SortOrder::Co2eAsc,
            _ => SortOrder::DateDesc,
        }
    }
}

/// Filter and sort settings for the history list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityQuery {
    /// `None` shows all categories
    pub category: Option<ActivityCategory>,
    /// Inclusive first day
    pub start: Option<NaiveDate>,
    /// Inclusive last day
    pub end: Option<NaiveDate>,
    pub sort: SortOrder,
}

impl ActivityQuery {
    pub fn matches(&self, activity: &Activity) -> bool {
        let day = activity.day();
        self.category.is_none_or(|c| activity.category == c)
            && self.start.is_none_or(|s| day >= s)
            && self.end.is_none_or(|e| day <= e)
    }

    /// Apply the filter and sort, leaving the input untouched
    pub fn apply<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        let mut out: Vec<&Activity> = activities.iter().filter(|a| self.matches(a)).collect();
        match self.sort {
            SortOrder::DateDesc => out.sort_by(|a, b| b.date.cmp(&a.date)),
            SortOrder::DateAsc => out.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::Co2eDesc => out.sort_by(|a, b| b.co2e.total_cmp(&a.co2e)),
            SortOrder::Co2eAsc => out.sort_by(|a, b| a.co2e.total_cmp(&b.co2e)),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn logged(id: u64, category: ActivityCategory, kind: &str, amount: &str, d: u32) -> Activity {
        let mut form = ActivityForm::new(day(d));
        form.set_category(category);
        form.kind = kind.to_string();
        form.amount = amount.to_string();
        form.submit(id).unwrap()
    }

    #[test]
    fn test_submit_builds_activity() {
        let mut form = ActivityForm::new(day(3));
        form.amount = "15".to_string();
        let activity = form.submit(7).unwrap();
        assert_eq!(activity.id, 7);
        assert_eq!(activity.description, "Drove a petrol car (15 km)");
        assert_eq!(activity.eco_points, 10);
        assert_eq!(activity.day(), day(3));
        assert!(form.amount.is_empty());
    }

    #[test]
    fn test_submit_rejects_bad_amounts() {
        for raw in ["", "0", "-2", "abc", "NaN"] {
            let mut form = ActivityForm::new(day(1));
            form.amount = raw.to_string();
            assert_eq!(form.submit(1), Err(InputError::InvalidAmount), "amount {raw:?}");
        }
    }

    #[test]
    fn test_submit_rejects_type_from_other_category() {
        let mut form = ActivityForm::new(day(1));
        form.set_category(ActivityCategory::Food);
        form.kind = "bus".to_string();
        form.amount = "1".to_string();
        assert!(matches!(
            form.submit(1),
            Err(InputError::UnknownActivityType { .. })
        ));
    }

    #[test]
    fn test_category_change_resets_type() {
        let mut form = ActivityForm::new(day(1));
        form.amount = "3".to_string();
        form.set_category(ActivityCategory::Energy);
        assert_eq!(form.kind, "electricity");
        assert_eq!(form.unit(), "kWh");
        assert!(form.amount.is_empty());
    }

    #[test]
    fn test_query_filters_and_sorts() {
        let activities = vec![
            logged(1, ActivityCategory::Transportation, "bus", "10", 1),
            logged(2, ActivityCategory::Food, "meal_meat", "2", 2),
            logged(3, ActivityCategory::Transportation, "car_petrol", "50", 3),
            logged(4, ActivityCategory::Transportation, "train", "5", 4),
        ];

        let query = ActivityQuery {
            category: Some(ActivityCategory::Transportation),
            start: Some(day(2)),
            end: Some(day(4)),
            sort: SortOrder::Co2eDesc,
        };
        let ids: Vec<u64> = query.apply(&activities).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 4]);

        let all = ActivityQuery::default().apply(&activities);
        assert_eq!(all.iter().map(|a| a.id).collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_order_keys() {
        for order in [
            SortOrder::DateDesc,
            SortOrder::DateAsc,
            SortOrder::Co2eDesc,
            SortOrder::Co2eAsc,
        ] {
            assert_eq!(SortOrder::from_str(order.as_str()), order);
        }
        assert_eq!(SortOrder::from_str("bogus"), SortOrder::DateDesc);
    }
}
