//! Custom planning: user edits applied to a stored plan.
//!
//! Every edit leaves the touched day ordered by time, switches the plan to
//! custom mode and recomputes its cost.

use uuid::Uuid;

use crate::catalog;
use crate::models::plan::{
    ActivityKind, ActivityPatch, DayPlan, NewActivity, Plan, PlanMode, PlannedActivity,
    TripDetails,
};
use crate::models::user::Favorite;
use crate::services::plan_error::PlanError;
use crate::services::quick_planner::{favorite_days, validate_trip};

const DEFAULT_DURATION_MINUTES: u16 = 60;
pub const MAX_COST_PER_PERSON: u32 = 100_000;

/// Empty days for the trip with favorites already placed in the sightseeing slots.
pub fn seed_custom_days(trip: &TripDetails, favorites: &[Favorite]) -> Result<Vec<DayPlan>, PlanError> {
    validate_trip(trip)?;
    Ok(favorite_days(trip, favorites))
}

fn day_mut(plan: &mut Plan, day_number: u32) -> Result<&mut DayPlan, PlanError> {
    plan.day_mut(day_number)
        .ok_or(PlanError::DayNotFound(day_number))
}

fn check_cost(cost: u32) -> Result<(), PlanError> {
    if cost > MAX_COST_PER_PERSON {
        return Err(PlanError::CostTooHigh {
            cost,
            max: MAX_COST_PER_PERSON,
        });
    }
    Ok(())
}

fn touch(plan: &mut Plan) {
    plan.mode = PlanMode::Custom;
    plan.refresh_cost();
}

pub fn add_activity(
    plan: &mut Plan,
    day_number: u32,
    new: NewActivity,
) -> Result<PlannedActivity, PlanError> {
    let title = new.title.trim().to_string();
    if title.is_empty() {
        return Err(PlanError::EmptyTitle);
    }
    if let Some(cost) = new.cost_per_person {
        check_cost(cost)?;
    }

    let attraction = match new.attraction_id.as_deref() {
        Some(id) => {
            let attraction =
                catalog::attraction(id).ok_or_else(|| PlanError::UnknownAttraction(id.to_string()))?;
            let already_planned = plan
                .days
                .iter()
                .flat_map(|day| day.activities.iter())
                .any(|activity| activity.attraction_id.as_deref() == Some(id));
            if already_planned {
                return Err(PlanError::DuplicateVenue(attraction.name.to_string()));
            }
            Some(attraction)
        }
        None => None,
    };

    let activity = PlannedActivity {
        id: Uuid::new_v4().to_string(),
        time: new.time,
        title,
        description: new.description,
        kind: new.kind.unwrap_or(if attraction.is_some() {
            ActivityKind::Sightseeing
        } else {
            ActivityKind::Custom
        }),
        attraction_id: attraction.map(|a| a.id.to_string()),
        coordinates: attraction.map(|a| a.coordinates),
        duration_minutes: new
            .duration_minutes
            .or(attraction.map(|a| a.visit_minutes))
            .unwrap_or(DEFAULT_DURATION_MINUTES),
        cost_per_person: new
            .cost_per_person
            .or(attraction.map(|a| a.ticket_price))
            .unwrap_or(0),
    };

    let day = day_mut(plan, day_number)?;
    day.activities.push(activity.clone());
    day.sort_by_time();

    touch(plan);
    Ok(activity)
}

pub fn update_activity(
    plan: &mut Plan,
    day_number: u32,
    activity_id: &str,
    patch: ActivityPatch,
) -> Result<PlannedActivity, PlanError> {
    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            return Err(PlanError::EmptyTitle);
        }
    }
    if let Some(cost) = patch.cost_per_person {
        check_cost(cost)?;
    }

    let day = day_mut(plan, day_number)?;
    let activity = day
        .activities
        .iter_mut()
        .find(|activity| activity.id == activity_id)
        .ok_or_else(|| PlanError::ActivityNotFound(activity_id.to_string()))?;

    if let Some(time) = patch.time {
        activity.time = time;
    }
    if let Some(title) = patch.title {
        activity.title = title.trim().to_string();
    }
    if let Some(description) = patch.description {
        activity.description = description;
    }
    if let Some(duration) = patch.duration_minutes {
        activity.duration_minutes = duration;
    }
    if let Some(cost) = patch.cost_per_person {
        activity.cost_per_person = cost;
    }

    let updated = activity.clone();
    day.sort_by_time();

    touch(plan);
    Ok(updated)
}

pub fn remove_activity(
    plan: &mut Plan,
    day_number: u32,
    activity_id: &str,
) -> Result<PlannedActivity, PlanError> {
    let day = day_mut(plan, day_number)?;
    let index = day
        .activities
        .iter()
        .position(|activity| activity.id == activity_id)
        .ok_or_else(|| PlanError::ActivityNotFound(activity_id.to_string()))?;

    let removed = day.activities.remove(index);

    touch(plan);
    Ok(removed)
}

/// Moves the activity at `from` to `to`. Time slots stay with their positions,
/// so the moved activity takes the time of the slot it lands in.
pub fn reorder_activities(
    plan: &mut Plan,
    day_number: u32,
    from: usize,
    to: usize,
) -> Result<(), PlanError> {
    let day = day_mut(plan, day_number)?;
    let len = day.activities.len();

    for index in [from, to] {
        if index >= len {
            return Err(PlanError::PositionOutOfRange { index, len });
        }
    }

    if from != to {
        let times: Vec<_> = day.activities.iter().map(|activity| activity.time).collect();
        let moved = day.activities.remove(from);
        day.activities.insert(to, moved);

        for (activity, time) in day.activities.iter_mut().zip(times) {
            activity.time = time;
        }
    }

    touch(plan);
    Ok(())
}
