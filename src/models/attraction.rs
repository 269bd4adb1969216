use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttractionCategory {
    Landmark,
    Museum,
    Park,
    Viewpoint,
    Market,
    Neighborhood,
    Religious,
}

/// A point of interest from the static city guides.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct Attraction {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub category: AttractionCategory,
    pub rating: f32,
    pub coordinates: Coordinates,
    pub description: &'static str,
    pub image_url: Option<&'static str>,
    pub visit_minutes: u16,
    pub ticket_price: u32,
}

#[derive(Debug, Serialize)]
pub struct CityGuide {
    pub slug: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub summary: &'static str,
    pub center: Coordinates,
    pub attractions: &'static [Attraction],
}

#[derive(Debug, Serialize)]
pub struct CitySummary {
    pub slug: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub summary: &'static str,
    pub attraction_count: usize,
}

impl From<&CityGuide> for CitySummary {
    fn from(guide: &CityGuide) -> Self {
        Self {
            slug: guide.slug,
            name: guide.name,
            country: guide.country,
            summary: guide.summary,
            attraction_count: guide.attractions.len(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AttractionFilter {
    pub category: Option<AttractionCategory>,
    pub min_rating: Option<f32>,
}
