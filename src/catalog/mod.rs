//! Static city guides and venue lookup tables.
//!
//! Everything here is compiled into the binary; the planner draws its meals and
//! experiences from [`venues`] and its sightseeing from the attractions of [`cities`].

pub mod cities;
pub mod venues;

use std::cmp::Ordering;

use crate::models::attraction::{Attraction, AttractionFilter, CityGuide};
use crate::models::venue::{BudgetTier, DayPeriod, Experience, FoodPreference, Meal, MealVenue};

pub fn cities() -> &'static [CityGuide] {
    cities::CITIES
}

pub fn city(slug: &str) -> Option<&'static CityGuide> {
    cities::CITIES
        .iter()
        .find(|guide| guide.slug.eq_ignore_ascii_case(slug))
}

pub fn attraction(id: &str) -> Option<&'static Attraction> {
    cities::CITIES
        .iter()
        .flat_map(|guide| guide.attractions.iter())
        .find(|attraction| attraction.id == id)
}

/// Attractions of a city that pass `filter`, best rated first.
pub fn attractions_in(slug: &str, filter: &AttractionFilter) -> Option<Vec<&'static Attraction>> {
    let guide = city(slug)?;

    let mut matches: Vec<&'static Attraction> = guide
        .attractions
        .iter()
        .filter(|a| filter.category.map_or(true, |category| a.category == category))
        .filter(|a| filter.min_rating.map_or(true, |min| a.rating >= min))
        .collect();

    matches.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(b.name))
    });

    Some(matches)
}

pub fn meal_venues(meal: Meal, tier: BudgetTier, food: FoodPreference) -> Vec<&'static MealVenue> {
    venues::MEAL_VENUES
        .iter()
        .filter(|venue| venue.meal == meal && venue.tier == tier && food.accepts(venue.serves))
        .collect()
}

pub fn experiences(
    period: DayPeriod,
    tier: BudgetTier,
    family_friendly_only: bool,
) -> Vec<&'static Experience> {
    venues::EXPERIENCES
        .iter()
        .filter(|e| e.period == period && e.tier == tier)
        .filter(|e| !family_friendly_only || e.family_friendly)
        .collect()
}

/// Whether `name` is one of the planner's meal venues or experiences.
pub fn is_generated_venue(name: &str) -> bool {
    venues::MEAL_VENUES.iter().any(|venue| venue.name == name)
        || venues::EXPERIENCES.iter().any(|experience| experience.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attraction::AttractionCategory;
    use std::collections::HashSet;

    #[test]
    fn test_city_lookup_is_case_insensitive() {
        assert_eq!(city("Paris").map(|c| c.name), Some("Paris"));
        assert!(city("atlantis").is_none());
    }

    #[test]
    fn test_attraction_ids_are_unique_and_belong_to_their_city() {
        let mut seen = HashSet::new();
        for guide in cities() {
            for attraction in guide.attractions {
                assert!(seen.insert(attraction.id), "duplicate id {}", attraction.id);
                assert_eq!(attraction.city, guide.slug);
                assert!((0.0..=5.0).contains(&attraction.rating));
            }
        }
    }

    #[test]
    fn test_attractions_filtered_and_sorted() {
        let filter = AttractionFilter {
            category: Some(AttractionCategory::Museum),
            min_rating: None,
        };
        let museums = attractions_in("paris", &filter).unwrap();
        assert_eq!(museums.len(), 2);
        assert!(museums.iter().all(|a| a.category == AttractionCategory::Museum));
        // Equal ratings fall back to name order
        assert_eq!(museums[0].name, "Louvre Museum");

        let top = attractions_in(
            "paris",
            &AttractionFilter {
                category: None,
                min_rating: Some(4.75),
            },
        )
        .unwrap();
        assert!(top.iter().all(|a| a.rating >= 4.75));

        assert!(attractions_in("atlantis", &AttractionFilter::default()).is_none());
    }

    #[test]
    fn test_generated_venue_names() {
        assert!(is_generated_venue("Corner Bakery Counter"));
        assert!(is_generated_venue("Free Walking Tour"));
        assert!(!is_generated_venue("Picnic by the river"));
        assert!(!is_generated_venue("Colosseum"));
    }

    #[test]
    fn test_every_tier_and_diet_has_meals() {
        for tier in [BudgetTier::Budget, BudgetTier::Moderate, BudgetTier::Luxury] {
            for food in [
                FoodPreference::Any,
                FoodPreference::Vegetarian,
                FoodPreference::Vegan,
                FoodPreference::Local,
            ] {
                for meal in [Meal::Breakfast, Meal::Lunch, Meal::Dinner] {
                    assert!(
                        !meal_venues(meal, tier, food).is_empty(),
                        "no {:?} for {:?}/{:?}",
                        meal,
                        tier,
                        food
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_tier_has_family_friendly_experiences() {
        for tier in [BudgetTier::Budget, BudgetTier::Moderate, BudgetTier::Luxury] {
            for period in [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening] {
                let options = experiences(period, tier, true);
                assert!(!options.is_empty(), "no {:?} for {:?}", period, tier);
                assert!(options.iter().all(|e| e.family_friendly));
            }
        }
    }

    #[test]
    fn test_vegan_meals_only_vegan_venues() {
        let venues = meal_venues(Meal::Dinner, BudgetTier::Moderate, FoodPreference::Vegan);
        assert!(venues
            .iter()
            .all(|v| v.serves.contains(&FoodPreference::Vegan)));
    }
}
