use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Moderate,
    Luxury,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodPreference {
    #[default]
    Any,
    Vegetarian,
    Vegan,
    Local,
}

impl FoodPreference {
    /// Whether a venue tagged with `offered` satisfies this preference.
    pub fn accepts(&self, offered: &[FoodPreference]) -> bool {
        match self {
            FoodPreference::Any | FoodPreference::Local => true,
            FoodPreference::Vegetarian => offered
                .iter()
                .any(|f| matches!(f, FoodPreference::Vegetarian | FoodPreference::Vegan)),
            FoodPreference::Vegan => offered.contains(&FoodPreference::Vegan),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct MealVenue {
    pub name: &'static str,
    pub description: &'static str,
    pub meal: Meal,
    pub tier: BudgetTier,
    pub serves: &'static [FoodPreference],
    pub cost_per_person: u32,
    pub duration_minutes: u16,
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct Experience {
    pub name: &'static str,
    pub description: &'static str,
    pub period: DayPeriod,
    pub tier: BudgetTier,
    pub family_friendly: bool,
    pub cost_per_person: u32,
    pub duration_minutes: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_preference_matching() {
        use FoodPreference::*;

        assert!(Any.accepts(&[]));
        assert!(Local.accepts(&[Vegan]));
        assert!(Vegetarian.accepts(&[Vegan]));
        assert!(Vegetarian.accepts(&[Vegetarian]));
        assert!(!Vegetarian.accepts(&[Local]));
        assert!(Vegan.accepts(&[Vegetarian, Vegan]));
        assert!(!Vegan.accepts(&[Vegetarian]));
    }

    #[test]
    fn test_budget_tier_wire_format() {
        let tier: BudgetTier = serde_json::from_str("\"luxury\"").unwrap();
        assert_eq!(tier, BudgetTier::Luxury);
        assert_eq!(
            serde_json::to_string(&FoodPreference::Vegan).unwrap(),
            "\"vegan\""
        );
    }
}
