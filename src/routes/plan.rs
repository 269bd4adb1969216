use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::plan::{
    ActivityPatch, CreatePlanRequest, NewActivity, PlanSummary, PlanView, ReorderRequest,
};
use crate::services::plan_editor::{add_activity, remove_activity, reorder_activities, update_activity};
use crate::services::plan_service::{self, parse_plan_id};
use crate::services::quick_planner::regenerate_day;
use crate::state::AppState;

pub async fn list_plans(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let plans = plan_service::list_plans(&state.db, user.user_id).await?;
    let summaries: Vec<PlanSummary> = plans.iter().map(PlanSummary::from).collect();
    Ok(HttpResponse::Ok().json(summaries))
}

pub async fn create_quick_plan(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    input: web::Json<CreatePlanRequest>,
) -> Result<HttpResponse, ApiError> {
    let plan = plan_service::create_quick_plan(&state.db, user.user_id, input.into_inner()).await?;
    Ok(HttpResponse::Created().json(PlanView::from(plan)))
}

pub async fn create_custom_plan(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    input: web::Json<CreatePlanRequest>,
) -> Result<HttpResponse, ApiError> {
    let plan = plan_service::create_custom_plan(&state.db, user.user_id, input.into_inner()).await?;
    Ok(HttpResponse::Created().json(PlanView::from(plan)))
}

pub async fn get_plan(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let plan_id = parse_plan_id(&path)?;
    let plan = plan_service::get_plan(&state.db, user.user_id, plan_id).await?;
    Ok(HttpResponse::Ok().json(PlanView::from(plan)))
}

pub async fn delete_plan(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let plan_id = parse_plan_id(&path)?;
    plan_service::delete_plan(&state.db, user.user_id, plan_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn add_plan_activity(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(String, u32)>,
    input: web::Json<NewActivity>,
) -> Result<HttpResponse, ApiError> {
    let (id, day) = path.into_inner();
    let plan_id = parse_plan_id(&id)?;
    let new = input.into_inner();

    let (plan, _) = plan_service::edit_plan(&state.db, user.user_id, plan_id, |plan| {
        add_activity(plan, day, new)
    })
    .await?;
    Ok(HttpResponse::Ok().json(PlanView::from(plan)))
}

pub async fn update_plan_activity(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(String, u32, String)>,
    input: web::Json<ActivityPatch>,
) -> Result<HttpResponse, ApiError> {
    let (id, day, activity_id) = path.into_inner();
    let plan_id = parse_plan_id(&id)?;
    let patch = input.into_inner();

    let (plan, _) = plan_service::edit_plan(&state.db, user.user_id, plan_id, |plan| {
        update_activity(plan, day, &activity_id, patch)
    })
    .await?;
    Ok(HttpResponse::Ok().json(PlanView::from(plan)))
}

pub async fn remove_plan_activity(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(String, u32, String)>,
) -> Result<HttpResponse, ApiError> {
    let (id, day, activity_id) = path.into_inner();
    let plan_id = parse_plan_id(&id)?;

    let (plan, _) = plan_service::edit_plan(&state.db, user.user_id, plan_id, |plan| {
        remove_activity(plan, day, &activity_id)
    })
    .await?;
    Ok(HttpResponse::Ok().json(PlanView::from(plan)))
}

pub async fn reorder_day(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(String, u32)>,
    input: web::Json<ReorderRequest>,
) -> Result<HttpResponse, ApiError> {
    let (id, day) = path.into_inner();
    let plan_id = parse_plan_id(&id)?;
    let ReorderRequest { from, to } = input.into_inner();

    let (plan, _) = plan_service::edit_plan(&state.db, user.user_id, plan_id, |plan| {
        reorder_activities(plan, day, from, to)
    })
    .await?;
    Ok(HttpResponse::Ok().json(PlanView::from(plan)))
}

pub async fn shuffle_day(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<(String, u32)>,
) -> Result<HttpResponse, ApiError> {
    let (id, day) = path.into_inner();
    let plan_id = parse_plan_id(&id)?;

    let (plan, _) = plan_service::edit_plan(&state.db, user.user_id, plan_id, |plan| {
        regenerate_day(plan, day, &mut rand::thread_rng())
    })
    .await?;
    Ok(HttpResponse::Ok().json(PlanView::from(plan)))
}
