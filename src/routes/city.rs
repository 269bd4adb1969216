use actix_web::{web, HttpResponse};

use crate::catalog;
use crate::error::ApiError;
use crate::models::attraction::{AttractionFilter, CitySummary};

pub async fn list_cities() -> HttpResponse {
    let cities: Vec<CitySummary> = catalog::cities().iter().map(CitySummary::from).collect();
    HttpResponse::Ok().json(cities)
}

pub async fn get_city(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let slug = path.into_inner();
    let guide = catalog::city(&slug).ok_or_else(|| ApiError::NotFound(format!("City {}", slug)))?;
    Ok(HttpResponse::Ok().json(guide))
}

pub async fn list_attractions(
    path: web::Path<String>,
    query: web::Query<AttractionFilter>,
) -> Result<HttpResponse, ApiError> {
    let slug = path.into_inner();
    let attractions = catalog::attractions_in(&slug, &query)
        .ok_or_else(|| ApiError::NotFound(format!("City {}", slug)))?;
    Ok(HttpResponse::Ok().json(attractions))
}

pub async fn get_attraction(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let attraction =
        catalog::attraction(&id).ok_or_else(|| ApiError::NotFound(format!("Attraction {}", id)))?;
    Ok(HttpResponse::Ok().json(attraction))
}
