use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::attraction::Coordinates;
use crate::models::venue::{BudgetTier, FoodPreference};

/// `HH:MM` wire format for activity times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(value) => NaiveTime::parse_from_str(&value, super::FORMAT)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct GroupComposition {
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

impl GroupComposition {
    pub fn travellers(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }

    pub fn has_children(&self) -> bool {
        self.children > 0
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TripDetails {
    pub city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: BudgetTier,
    #[serde(default)]
    pub food: FoodPreference,
    pub group: GroupComposition,
}

impl TripDetails {
    /// Inclusive day count; negative when the dates are reversed.
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Meal,
    Sightseeing,
    Experience,
    Custom,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlannedActivity {
    pub id: String,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub title: String,
    pub description: String,
    pub kind: ActivityKind,
    pub attraction_id: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub duration_minutes: u16,
    pub cost_per_person: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day_number: u32,
    pub date: NaiveDate,
    pub activities: Vec<PlannedActivity>,
}

impl DayPlan {
    pub fn sort_by_time(&mut self) {
        self.activities.sort_by_key(|activity| activity.time);
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanMode {
    Quick,
    Custom,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Plan {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub title: String,
    pub mode: PlanMode,
    pub trip: TripDetails,
    pub days: Vec<DayPlan>,
    pub estimated_cost: u32,
    /// Bumped on every save; writes against a stale revision are refused.
    #[serde(default)]
    pub revision: i64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    pub fn day_mut(&mut self, day_number: u32) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|day| day.day_number == day_number)
    }

    /// Total across all activities for the whole group, pinned at `u32::MAX`.
    pub fn compute_cost(days: &[DayPlan], group: &GroupComposition) -> u32 {
        days.iter()
            .flat_map(|day| day.activities.iter())
            .fold(0u32, |total, activity| total.saturating_add(activity.cost_per_person))
            .saturating_mul(group.travellers())
    }

    pub fn refresh_cost(&mut self) {
        self.estimated_cost = Self::compute_cost(&self.days, &self.trip.group);
    }
}

/// JSON view of a plan with a hex id, as returned by the API.
#[derive(Debug, Serialize)]
pub struct PlanView {
    pub id: String,
    pub title: String,
    pub mode: PlanMode,
    pub trip: TripDetails,
    pub days: Vec<DayPlan>,
    pub estimated_cost: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Plan> for PlanView {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: plan.title,
            mode: plan.mode,
            trip: plan.trip,
            days: plan.days,
            estimated_cost: plan.estimated_cost,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanSummary {
    pub id: String,
    pub title: String,
    pub city: String,
    pub mode: PlanMode,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub estimated_cost: u32,
    pub updated_at: DateTime<Utc>,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: plan.title.clone(),
            city: plan.trip.city.clone(),
            mode: plan.mode,
            start_date: plan.trip.start_date,
            end_date: plan.trip.end_date,
            estimated_cost: plan.estimated_cost,
            updated_at: plan.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePlanRequest {
    pub trip: TripDetails,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewActivity {
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub kind: Option<ActivityKind>,
    pub attraction_id: Option<String>,
    pub duration_minutes: Option<u16>,
    pub cost_per_person: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct ActivityPatch {
    #[serde(default, deserialize_with = "hhmm::option::deserialize")]
    pub time: Option<NaiveTime>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<u16>,
    pub cost_per_person: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_time_wire_format() {
        let json = serde_json::json!({
            "id": "a1",
            "time": "09:05",
            "title": "Breakfast",
            "description": "",
            "kind": "meal",
            "attraction_id": null,
            "coordinates": null,
            "duration_minutes": 45,
            "cost_per_person": 12
        });
        let activity: PlannedActivity = serde_json::from_value(json).unwrap();
        assert_eq!(activity.time, NaiveTime::from_hms_opt(9, 5, 0).unwrap());

        let back = serde_json::to_value(&activity).unwrap();
        assert_eq!(back["time"], "09:05");
    }

    #[test]
    fn test_patch_rejects_bad_time() {
        let result: Result<ActivityPatch, _> =
            serde_json::from_value(serde_json::json!({ "time": "25:99" }));
        assert!(result.is_err());

        let patch: ActivityPatch = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(patch.time.is_none());
    }

    #[test]
    fn test_trip_length_is_inclusive() {
        let trip = TripDetails {
            city: "paris".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
            budget: BudgetTier::Moderate,
            food: FoodPreference::Any,
            group: GroupComposition {
                adults: 2,
                children: 1,
            },
        };
        assert_eq!(trip.length_days(), 3);
        assert_eq!(trip.group.travellers(), 3);
    }

    #[test]
    fn test_cost_saturates_instead_of_overflowing() {
        let activity = PlannedActivity {
            id: "a1".into(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            title: "Tasting menu".into(),
            description: String::new(),
            kind: ActivityKind::Custom,
            attraction_id: None,
            coordinates: None,
            duration_minutes: 120,
            cost_per_person: 2_000_000_000,
        };
        let days = vec![DayPlan {
            day_number: 1,
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            activities: vec![activity.clone(), activity],
        }];
        let group = GroupComposition {
            adults: 3,
            children: 0,
        };
        assert_eq!(Plan::compute_cost(&days, &group), u32::MAX);

        let huge = GroupComposition {
            adults: u32::MAX,
            children: 1,
        };
        assert_eq!(huge.travellers(), u32::MAX);
    }
}
