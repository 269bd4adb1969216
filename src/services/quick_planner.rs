//! Quick planning: fills every day of a trip from the venue tables.
//!
//! Favorites in the trip's city take the sightseeing slots first; meals and
//! experiences are drawn at random for the budget tier and food preference.
//! A venue is never placed twice in one plan until every candidate of its
//! table has been used.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{Duration, NaiveTime};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::catalog;
use crate::models::attraction::CityGuide;
use crate::models::plan::{ActivityKind, DayPlan, Plan, PlannedActivity, TripDetails};
use crate::models::user::Favorite;
use crate::models::venue::{DayPeriod, Experience, Meal, MealVenue};
use crate::services::plan_error::PlanError;

pub const MAX_TRIP_DAYS: i64 = 14;
pub const MAX_TRAVELLERS: u32 = 30;
const MAX_FAVORITES_PER_DAY: usize = 3;
const DEFAULT_VISIT_MINUTES: u16 = 90;

const BREAKFAST: (u32, u32) = (8, 30);
const MORNING: (u32, u32) = (10, 0);
const LUNCH: (u32, u32) = (12, 30);
const AFTERNOON: (u32, u32) = (14, 30);
const LATE_AFTERNOON: (u32, u32) = (16, 30);
const DINNER: (u32, u32) = (19, 0);
const EVENING: (u32, u32) = (21, 0);

pub(crate) const SIGHTSEEING_SLOTS: [(u32, u32); MAX_FAVORITES_PER_DAY] =
    [MORNING, AFTERNOON, LATE_AFTERNOON];

pub(crate) fn slot((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

pub trait Venue {
    fn name(&self) -> &'static str;
}

impl Venue for MealVenue {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl Venue for Experience {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Remembers which venues a plan already uses.
#[derive(Debug, Default)]
pub struct VenuePicker {
    used: HashSet<String>,
}

impl VenuePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_used<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            used: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Picks an unused candidate; once all are used the table starts over.
    pub fn pick<'a, T, R>(&mut self, rng: &mut R, candidates: &[&'a T]) -> Option<&'a T>
    where
        T: Venue + ?Sized,
        R: Rng + ?Sized,
    {
        let fresh: Vec<&'a T> = candidates
            .iter()
            .copied()
            .filter(|venue| !self.used.contains(venue.name()))
            .collect();

        let choice = if fresh.is_empty() {
            for venue in candidates {
                self.used.remove(venue.name());
            }
            candidates.choose(rng).copied()
        } else {
            fresh.choose(rng).copied()
        }?;

        self.used.insert(choice.name().to_string());
        Some(choice)
    }
}

pub fn validate_trip(trip: &TripDetails) -> Result<&'static CityGuide, PlanError> {
    let guide = catalog::city(&trip.city).ok_or_else(|| PlanError::UnknownCity(trip.city.clone()))?;

    let days = trip.length_days();
    if days < 1 {
        return Err(PlanError::InvalidDates);
    }
    if days > MAX_TRIP_DAYS {
        return Err(PlanError::TripTooLong {
            days,
            max: MAX_TRIP_DAYS,
        });
    }
    if trip.group.adults == 0 {
        return Err(PlanError::NoAdults);
    }
    let travellers = trip.group.travellers();
    if travellers > MAX_TRAVELLERS {
        return Err(PlanError::GroupTooLarge {
            travellers,
            max: MAX_TRAVELLERS,
        });
    }

    Ok(guide)
}

/// Splits the city's favorites over `days` days, best rated first, round robin.
pub(crate) fn distribute_favorites<'a>(
    city: &str,
    favorites: &'a [Favorite],
    days: usize,
) -> Vec<Vec<&'a Favorite>> {
    let mut seen = HashSet::new();
    let mut in_city: Vec<&Favorite> = favorites
        .iter()
        .filter(|f| f.city.eq_ignore_ascii_case(city))
        .filter(|f| seen.insert(f.attraction_id.as_str()))
        .collect();

    in_city.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut buckets: Vec<Vec<&Favorite>> = vec![Vec::new(); days];
    if days == 0 {
        return buckets;
    }

    for (index, favorite) in in_city.into_iter().enumerate() {
        if index / days >= MAX_FAVORITES_PER_DAY {
            break;
        }
        buckets[index % days].push(favorite);
    }

    buckets
}

pub(crate) fn sightseeing_activity(favorite: &Favorite, time: NaiveTime) -> PlannedActivity {
    let attraction = catalog::attraction(&favorite.attraction_id);

    PlannedActivity {
        id: Uuid::new_v4().to_string(),
        time,
        title: favorite.name.clone(),
        description: attraction
            .map(|a| a.description.to_string())
            .unwrap_or_default(),
        kind: ActivityKind::Sightseeing,
        attraction_id: Some(favorite.attraction_id.clone()),
        coordinates: Some(favorite.coordinates),
        duration_minutes: attraction.map_or(DEFAULT_VISIT_MINUTES, |a| a.visit_minutes),
        cost_per_person: attraction.map_or(0, |a| a.ticket_price),
    }
}

fn meal_activity(venue: &MealVenue, time: NaiveTime) -> PlannedActivity {
    PlannedActivity {
        id: Uuid::new_v4().to_string(),
        time,
        title: venue.name.to_string(),
        description: venue.description.to_string(),
        kind: ActivityKind::Meal,
        attraction_id: None,
        coordinates: None,
        duration_minutes: venue.duration_minutes,
        cost_per_person: venue.cost_per_person,
    }
}

fn experience_activity(experience: &Experience, time: NaiveTime) -> PlannedActivity {
    PlannedActivity {
        id: Uuid::new_v4().to_string(),
        time,
        title: experience.name.to_string(),
        description: experience.description.to_string(),
        kind: ActivityKind::Experience,
        attraction_id: None,
        coordinates: None,
        duration_minutes: experience.duration_minutes,
        cost_per_person: experience.cost_per_person,
    }
}

/// Builds the sightseeing entries for each day from the distributed favorites.
pub(crate) fn favorite_days(trip: &TripDetails, favorites: &[Favorite]) -> Vec<DayPlan> {
    let days = trip.length_days().max(0) as usize;
    let buckets = distribute_favorites(&trip.city, favorites, days);

    buckets
        .into_iter()
        .enumerate()
        .map(|(index, bucket)| DayPlan {
            day_number: index as u32 + 1,
            date: trip.start_date + Duration::days(index as i64),
            activities: bucket
                .into_iter()
                .zip(SIGHTSEEING_SLOTS)
                .map(|(favorite, time)| sightseeing_activity(favorite, slot(time)))
                .collect(),
        })
        .collect()
}

/// Fills the free slots of `day` with meals and experiences.
fn fill_day<R: Rng + ?Sized>(
    day: &mut DayPlan,
    trip: &TripDetails,
    picker: &mut VenuePicker,
    rng: &mut R,
) {
    let family = trip.group.has_children();
    let taken: HashSet<NaiveTime> = day.activities.iter().map(|a| a.time).collect();

    for (meal, time) in [
        (Meal::Breakfast, BREAKFAST),
        (Meal::Lunch, LUNCH),
        (Meal::Dinner, DINNER),
    ] {
        let time = slot(time);
        if taken.contains(&time) {
            continue;
        }
        let options = catalog::meal_venues(meal, trip.budget, trip.food);
        if let Some(venue) = picker.pick(rng, &options) {
            day.activities.push(meal_activity(venue, time));
        }
    }

    for (period, time) in [
        (DayPeriod::Morning, MORNING),
        (DayPeriod::Afternoon, AFTERNOON),
        (DayPeriod::Evening, EVENING),
    ] {
        let time = slot(time);
        if taken.contains(&time) {
            continue;
        }
        let options = catalog::experiences(period, trip.budget, family);
        if let Some(experience) = picker.pick(rng, &options) {
            day.activities.push(experience_activity(experience, time));
        }
    }

    day.sort_by_time();
}

pub fn generate_quick_plan<R: Rng + ?Sized>(
    trip: &TripDetails,
    favorites: &[Favorite],
    rng: &mut R,
) -> Result<Vec<DayPlan>, PlanError> {
    validate_trip(trip)?;

    let mut days = favorite_days(trip, favorites);
    let mut picker = VenuePicker::new();

    for day in days.iter_mut() {
        fill_day(day, trip, &mut picker, rng);
    }

    log::debug!(
        "Generated {} day quick plan for {} ({} favorites)",
        days.len(),
        trip.city,
        favorites.len()
    );

    Ok(days)
}

/// Planner-picked meals and experiences. Hand-added ones are not re-rolled.
fn is_generated(activity: &PlannedActivity) -> bool {
    matches!(activity.kind, ActivityKind::Meal | ActivityKind::Experience)
        && activity.attraction_id.is_none()
        && catalog::is_generated_venue(&activity.title)
}

/// Re-rolls the meals and experiences of one day, keeping everything else.
pub fn regenerate_day<R: Rng + ?Sized>(
    plan: &mut Plan,
    day_number: u32,
    rng: &mut R,
) -> Result<(), PlanError> {
    let used_elsewhere: Vec<String> = plan
        .days
        .iter()
        .filter(|day| day.day_number != day_number)
        .flat_map(|day| day.activities.iter())
        .filter(|a| is_generated(a))
        .map(|a| a.title.clone())
        .collect();

    let trip = plan.trip.clone();
    let day = plan
        .day_mut(day_number)
        .ok_or(PlanError::DayNotFound(day_number))?;

    day.activities.retain(|a| !is_generated(a));

    let mut picker = VenuePicker::with_used(used_elsewhere);
    fill_day(day, &trip, &mut picker, rng);

    plan.refresh_cost();
    Ok(())
}
