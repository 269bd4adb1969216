use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId, to_bson};

use crate::catalog;
use crate::db::Db;
use crate::error::ApiError;
use crate::models::user::Favorite;
use crate::services::account_service::find_user;

/// Newest first, optionally limited to one city.
pub fn filter_favorites(mut favorites: Vec<Favorite>, city: Option<&str>) -> Vec<Favorite> {
    if let Some(city) = city {
        favorites.retain(|favorite| favorite.city.eq_ignore_ascii_case(city));
    }
    favorites.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
    favorites
}

pub async fn list_favorites(db: &Db, user_id: ObjectId, city: Option<&str>) -> Result<Vec<Favorite>, ApiError> {
    let user = find_user(db, user_id).await?;
    Ok(filter_favorites(user.favorites, city))
}

pub async fn add_favorite(db: &Db, user_id: ObjectId, attraction_id: &str) -> Result<Favorite, ApiError> {
    let attraction = catalog::attraction(attraction_id)
        .ok_or_else(|| ApiError::NotFound(format!("Attraction {}", attraction_id)))?;
    let favorite = Favorite::from_attraction(attraction, Utc::now());
    let entry = to_bson(&favorite)?;

    let result = db
        .users()
        .update_one(
            doc! { "_id": user_id, "favorites.attraction_id": { "$ne": attraction.id } },
            doc! {
                "$push": { "favorites": entry },
                "$set": { "updated_at": Utc::now().to_rfc3339() },
            },
        )
        .await?;

    if result.matched_count == 0 {
        // Either the account is gone or the attraction is already saved
        find_user(db, user_id).await?;
        return Err(ApiError::Conflict(format!(
            "{} is already a favorite",
            attraction.name
        )));
    }

    log::info!("User {} saved {}", user_id, attraction.id);
    Ok(favorite)
}

pub async fn remove_favorite(db: &Db, user_id: ObjectId, attraction_id: &str) -> Result<(), ApiError> {
    let result = db
        .users()
        .update_one(
            doc! { "_id": user_id, "favorites.attraction_id": attraction_id },
            doc! {
                "$pull": { "favorites": { "attraction_id": attraction_id } },
                "$set": { "updated_at": Utc::now().to_rfc3339() },
            },
        )
        .await?;

    if result.matched_count == 0 {
        return Err(ApiError::NotFound("Favorite".to_string()));
    }

    log::info!("User {} removed {}", user_id, attraction_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_filter_favorites_by_city_newest_first() {
        let now = Utc::now();
        let louvre = catalog::attraction("paris-louvre").unwrap();
        let orsay = catalog::attraction("paris-orsay").unwrap();
        let colosseum = catalog::attraction("rome-colosseum").unwrap();

        let favorites = vec![
            Favorite::from_attraction(louvre, now - Duration::hours(2)),
            Favorite::from_attraction(colosseum, now - Duration::hours(1)),
            Favorite::from_attraction(orsay, now),
        ];

        let paris = filter_favorites(favorites.clone(), Some("Paris"));
        let ids: Vec<&str> = paris.iter().map(|f| f.attraction_id.as_str()).collect();
        assert_eq!(ids, vec!["paris-orsay", "paris-louvre"]);

        let all = filter_favorites(favorites, None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].attraction_id, "paris-orsay");
        assert_eq!(all[2].attraction_id, "paris-louvre");
    }
}
