use crate::models::venue::{
    BudgetTier::{self, *},
    DayPeriod::{self, *},
    Experience,
    FoodPreference::{self, *},
    Meal::{self, *},
    MealVenue,
};

const ALL: &[FoodPreference] = &[Any, Vegetarian, Vegan, Local];
const VEGGIE: &[FoodPreference] = &[Any, Vegetarian, Local];
const PLANT: &[FoodPreference] = &[Any, Vegetarian, Vegan];
const LOCAL: &[FoodPreference] = &[Any, Local];

const fn meal(
    name: &'static str,
    description: &'static str,
    meal: Meal,
    tier: BudgetTier,
    serves: &'static [FoodPreference],
    cost_per_person: u32,
) -> MealVenue {
    let duration_minutes = match meal {
        Breakfast => 45,
        Lunch => 75,
        Dinner => 105,
    };
    MealVenue {
        name,
        description,
        meal,
        tier,
        serves,
        cost_per_person,
        duration_minutes,
    }
}

const fn experience(
    name: &'static str,
    description: &'static str,
    period: DayPeriod,
    tier: BudgetTier,
    family_friendly: bool,
    cost_per_person: u32,
    duration_minutes: u16,
) -> Experience {
    Experience {
        name,
        description,
        period,
        tier,
        family_friendly,
        cost_per_person,
        duration_minutes,
    }
}

pub static MEAL_VENUES: &[MealVenue] = &[
    // Budget
    meal("Corner Bakery Counter", "Fresh pastries and coffee standing at the counter like a local.", Breakfast, Budget, VEGGIE, 6),
    meal("Market Fruit & Oats Stall", "Seasonal fruit bowls and oat porridge from the morning market.", Breakfast, Budget, ALL, 5),
    meal("Neighborhood Café", "Eggs, toast and filter coffee at a no-frills café.", Breakfast, Budget, LOCAL, 8),
    meal("Street Food Alley", "Graze the stalls for the city's cheapest signature bites.", Lunch, Budget, LOCAL, 10),
    meal("Falafel & Salad Bar", "Crisp falafel wraps and a build-your-own salad counter.", Lunch, Budget, ALL, 9),
    meal("Noodle Counter", "Steaming bowls served fast at a bar-stool counter.", Lunch, Budget, VEGGIE, 11),
    meal("Family-Run Trattoria", "Hearty set menu at a place that has not changed in decades.", Dinner, Budget, LOCAL, 18),
    meal("Green Bowl Canteen", "Plant-based grain bowls and curries, generous portions.", Dinner, Budget, PLANT, 15),
    meal("Night Market Feast", "Share plates from a dozen vendors under string lights.", Dinner, Budget, ALL, 16),
    // Moderate
    meal("Brunch House", "Shakshuka, pancakes and proper espresso in a sunny dining room.", Breakfast, Moderate, VEGGIE, 16),
    meal("Garden Terrace Breakfast", "Granola, smoothie bowls and vegan pastries on a leafy terrace.", Breakfast, Moderate, ALL, 15),
    meal("Historic Coffee House", "A breakfast institution with marble tables and waistcoated waiters.", Breakfast, Moderate, LOCAL, 18),
    meal("Bistro Prix-Fixe", "Two-course lunch menu of regional classics.", Lunch, Moderate, LOCAL, 26),
    meal("Farm-to-Table Kitchen", "Vegetable-forward plates sourced from nearby farms.", Lunch, Moderate, ALL, 24),
    meal("Harbourside Seafood Grill", "Catch of the day grilled over charcoal with a water view.", Lunch, Moderate, LOCAL, 30),
    meal("Wine Bar Small Plates", "Cured meats, cheeses and natural wines by the glass.", Dinner, Moderate, VEGGIE, 42),
    meal("Modern Plant Kitchen", "Creative vegan tasting plates from a young chef.", Dinner, Moderate, PLANT, 38),
    meal("Regional Specialties Dining Room", "The dishes the city is famous for, done properly.", Dinner, Moderate, LOCAL, 45),
    // Luxury
    meal("Grand Hotel Breakfast", "Silver-service buffet with champagne and made-to-order eggs.", Breakfast, Luxury, ALL, 48),
    meal("Patisserie Salon", "Viennoiserie and single-estate teas in a gilded salon.", Breakfast, Luxury, VEGGIE, 35),
    meal("Rooftop Lunch Terrace", "Seasonal menu served with a panorama of the old town.", Lunch, Luxury, ALL, 75),
    meal("Chef's Counter Lunch", "Eight courses in front of the open kitchen.", Lunch, Luxury, LOCAL, 95),
    meal("Michelin Tasting Menu", "A long evening of tasting courses and paired wines.", Dinner, Luxury, VEGGIE, 220),
    meal("Botanical Fine Dining", "An entirely plant-based tasting menu with a garden view.", Dinner, Luxury, PLANT, 180),
    meal("Private Dining Cellar", "Candlelit vaulted cellar with a sommelier-led menu.", Dinner, Luxury, LOCAL, 240),
];

pub static EXPERIENCES: &[Experience] = &[
    // Budget
    experience("Free Walking Tour", "Tip-based tour of the historic centre with a local guide.", Morning, Budget, true, 0, 150),
    experience("Riverside Jog & Stretch", "Easy loop along the waterfront before the crowds arrive.", Morning, Budget, true, 0, 60),
    experience("Public Library & Reading Room", "Architecture and quiet in the city's grandest reading room.", Morning, Budget, true, 0, 60),
    experience("Neighborhood Street Art Trail", "Self-guided trail through the most colourful murals.", Afternoon, Budget, true, 0, 120),
    experience("City Park Picnic", "Pick up supplies and claim a patch of lawn.", Afternoon, Budget, true, 8, 90),
    experience("Flea Market Browse", "Hunt for vintage finds at the weekend flea market.", Afternoon, Budget, true, 0, 90),
    experience("Sunset Viewpoint Walk", "Climb to the free lookout for golden hour.", Evening, Budget, true, 0, 75),
    experience("Open-Mic Bar Night", "Local musicians and cheap drinks in a basement bar.", Evening, Budget, false, 12, 120),
    // Moderate
    experience("Guided Bike Tour", "Half-day cycle through parks and hidden courtyards.", Morning, Moderate, true, 45, 180),
    experience("Cooking Class", "Learn three regional dishes, then eat them.", Morning, Moderate, true, 70, 180),
    experience("Boat Cruise", "Narrated cruise past the city's waterfront landmarks.", Afternoon, Moderate, true, 25, 75),
    experience("Spa & Thermal Baths", "Pools, saunas and a long soak.", Afternoon, Moderate, false, 40, 150),
    experience("Food Market Tasting Tour", "A guided graze through stalls and specialty shops.", Afternoon, Moderate, true, 60, 150),
    experience("Jazz Club Evening", "Live sets in an intimate club with a cover charge.", Evening, Moderate, false, 35, 150),
    experience("Night Ghost Walk", "Spooky stories through lantern-lit alleys.", Evening, Moderate, true, 22, 90),
    // Luxury
    experience("Private Guided Tour", "A historian guide and private driver for the morning.", Morning, Luxury, true, 180, 180),
    experience("Hot Air Balloon Sunrise", "Float over the outskirts at dawn with champagne on landing.", Morning, Luxury, false, 320, 240),
    experience("Helicopter Skyline Flight", "Twenty minutes over the rooftops.", Afternoon, Luxury, false, 260, 60),
    experience("Personal Shopping Session", "A stylist-led afternoon in the best boutiques.", Afternoon, Luxury, false, 200, 180),
    experience("Private Yacht Sunset Cruise", "Crewed yacht with canapés as the lights come on.", Evening, Luxury, true, 240, 150),
    experience("Opera Box Seats", "An evening performance from a private box.", Evening, Luxury, false, 210, 180),
];
