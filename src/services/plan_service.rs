use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

use crate::db::Db;
use crate::error::ApiError;
use crate::models::attraction::CityGuide;
use crate::models::plan::{CreatePlanRequest, DayPlan, Plan, PlanMode, TripDetails};
use crate::services::account_service::find_user;
use crate::services::plan_editor::seed_custom_days;
use crate::services::plan_error::PlanError;
use crate::services::quick_planner::{generate_quick_plan, validate_trip};

pub fn parse_plan_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(format!("Invalid plan id: {}", id)))
}

pub fn default_title(trip: &TripDetails, guide: &CityGuide) -> String {
    match trip.length_days() {
        1 => format!("1 day in {}", guide.name),
        days => format!("{} days in {}", days, guide.name),
    }
}

/// Validates the trip and pins its city to the catalog slug.
pub fn prepare_trip(request: &CreatePlanRequest) -> Result<(TripDetails, String), ApiError> {
    let guide = validate_trip(&request.trip)?;

    let mut trip = request.trip.clone();
    trip.city = guide.slug.to_string();

    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default_title(&trip, guide));

    Ok((trip, title))
}

pub fn new_plan(user_id: ObjectId, title: String, mode: PlanMode, trip: TripDetails, days: Vec<DayPlan>) -> Plan {
    let now = Utc::now();
    let estimated_cost = Plan::compute_cost(&days, &trip.group);
    Plan {
        id: None,
        user_id,
        title,
        mode,
        trip,
        days,
        estimated_cost,
        revision: 0,
        created_at: now,
        updated_at: now,
    }
}

async fn insert_plan(db: &Db, mut plan: Plan) -> Result<Plan, ApiError> {
    let result = db.plans().insert_one(&plan).await?;
    plan.id = result.inserted_id.as_object_id();

    log::info!(
        "Created {:?} plan {:?} for user {}",
        plan.mode,
        plan.id,
        plan.user_id
    );
    Ok(plan)
}

pub async fn create_quick_plan(db: &Db, user_id: ObjectId, request: CreatePlanRequest) -> Result<Plan, ApiError> {
    let (trip, title) = prepare_trip(&request)?;
    let favorites = find_user(db, user_id).await?.favorites;

    let days = {
        let mut rng = rand::thread_rng();
        generate_quick_plan(&trip, &favorites, &mut rng)?
    };

    insert_plan(db, new_plan(user_id, title, PlanMode::Quick, trip, days)).await
}

pub async fn create_custom_plan(db: &Db, user_id: ObjectId, request: CreatePlanRequest) -> Result<Plan, ApiError> {
    let (trip, title) = prepare_trip(&request)?;
    let favorites = find_user(db, user_id).await?.favorites;

    let days = seed_custom_days(&trip, &favorites)?;

    insert_plan(db, new_plan(user_id, title, PlanMode::Custom, trip, days)).await
}

pub async fn list_plans(db: &Db, user_id: ObjectId) -> Result<Vec<Plan>, ApiError> {
    let plans = db
        .plans()
        .find(doc! { "user_id": user_id })
        .sort(doc! { "updated_at": -1 })
        .await?
        .try_collect()
        .await?;
    Ok(plans)
}

/// Plans belonging to someone else look exactly like missing ones.
pub async fn get_plan(db: &Db, user_id: ObjectId, plan_id: ObjectId) -> Result<Plan, ApiError> {
    db.plans()
        .find_one(doc! { "_id": plan_id, "user_id": user_id })
        .await?
        .ok_or_else(|| ApiError::NotFound("Plan".to_string()))
}

pub async fn delete_plan(db: &Db, user_id: ObjectId, plan_id: ObjectId) -> Result<(), ApiError> {
    let result = db
        .plans()
        .delete_one(doc! { "_id": plan_id, "user_id": user_id })
        .await?;

    if result.deleted_count == 0 {
        return Err(ApiError::NotFound("Plan".to_string()));
    }
    log::info!("Deleted plan {} for user {}", plan_id, user_id);
    Ok(())
}

/// Matches the stored plan only while it is still at `revision`.
/// Plans written before revisions existed have no field and count as 0.
pub fn revision_filter(plan_id: ObjectId, user_id: ObjectId, revision: i64) -> Document {
    let revision = if revision == 0 {
        Bson::Document(doc! { "$in": [0_i64, Bson::Null] })
    } else {
        Bson::Int64(revision)
    };
    doc! { "_id": plan_id, "user_id": user_id, "revision": revision }
}

/// Writes the plan back if nobody saved it since it was loaded.
pub async fn save_plan(db: &Db, plan: &mut Plan) -> Result<(), ApiError> {
    let plan_id = plan
        .id
        .ok_or_else(|| ApiError::Internal("Cannot save a plan without an id".to_string()))?;
    let filter = revision_filter(plan_id, plan.user_id, plan.revision);

    plan.revision += 1;
    plan.updated_at = Utc::now();

    let result = db.plans().replace_one(filter, &*plan).await?;

    if result.matched_count == 0 {
        plan.revision -= 1;
        // Gone, or saved by a concurrent edit
        get_plan(db, plan.user_id, plan_id).await?;
        log::warn!("Rejected stale write to plan {} at revision {}", plan_id, plan.revision);
        return Err(ApiError::Conflict(
            "Plan was changed by another request, reload and retry".to_string(),
        ));
    }
    Ok(())
}

/// Loads a plan, applies `edit` and persists the result.
pub async fn edit_plan<T, F>(db: &Db, user_id: ObjectId, plan_id: ObjectId, edit: F) -> Result<(Plan, T), ApiError>
where
    F: FnOnce(&mut Plan) -> Result<T, PlanError>,
{
    let mut plan = get_plan(db, user_id, plan_id).await?;
    let output = edit(&mut plan)?;
    save_plan(db, &mut plan).await?;
    Ok((plan, output))
}
