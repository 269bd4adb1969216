use crate::models::attraction::{
    Attraction, AttractionCategory::*, CityGuide, Coordinates,
};

const fn at(lat: f64, lng: f64) -> Coordinates {
    Coordinates { lat, lng }
}

pub static CITIES: &[CityGuide] = &[
    CityGuide {
        slug: "paris",
        name: "Paris",
        country: "France",
        summary: "Boulevards, world-class museums and riverside evenings along the Seine.",
        center: at(48.8566, 2.3522),
        attractions: PARIS,
    },
    CityGuide {
        slug: "rome",
        name: "Rome",
        country: "Italy",
        summary: "Ancient ruins, baroque piazzas and long lunches in cobbled lanes.",
        center: at(41.9028, 12.4964),
        attractions: ROME,
    },
    CityGuide {
        slug: "tokyo",
        name: "Tokyo",
        country: "Japan",
        summary: "Neon districts, quiet shrines and the best food markets in Asia.",
        center: at(35.6762, 139.6503),
        attractions: TOKYO,
    },
    CityGuide {
        slug: "new-york",
        name: "New York",
        country: "United States",
        summary: "Skyline views, Central Park strolls and a museum for every taste.",
        center: at(40.7128, -74.0060),
        attractions: NEW_YORK,
    },
];

static PARIS: &[Attraction] = &[
    Attraction {
        id: "paris-eiffel-tower",
        name: "Eiffel Tower",
        city: "paris",
        category: Landmark,
        rating: 4.7,
        coordinates: at(48.8584, 2.2945),
        description: "Wrought-iron icon with viewing decks over the Champ de Mars.",
        image_url: Some("https://images.travel-planner.app/paris/eiffel-tower.jpg"),
        visit_minutes: 120,
        ticket_price: 29,
    },
    Attraction {
        id: "paris-louvre",
        name: "Louvre Museum",
        city: "paris",
        category: Museum,
        rating: 4.8,
        coordinates: at(48.8606, 2.3376),
        description: "The world's largest art museum, home of the Mona Lisa.",
        image_url: Some("https://images.travel-planner.app/paris/louvre.jpg"),
        visit_minutes: 180,
        ticket_price: 22,
    },
    Attraction {
        id: "paris-notre-dame",
        name: "Notre-Dame Cathedral",
        city: "paris",
        category: Religious,
        rating: 4.7,
        coordinates: at(48.8530, 2.3499),
        description: "Gothic cathedral on the Île de la Cité, restored and reopened.",
        image_url: None,
        visit_minutes: 60,
        ticket_price: 0,
    },
    Attraction {
        id: "paris-montmartre",
        name: "Montmartre",
        city: "paris",
        category: Neighborhood,
        rating: 4.6,
        coordinates: at(48.8867, 2.3431),
        description: "Hilltop village of painters' squares crowned by Sacré-Cœur.",
        image_url: Some("https://images.travel-planner.app/paris/montmartre.jpg"),
        visit_minutes: 150,
        ticket_price: 0,
    },
    Attraction {
        id: "paris-orsay",
        name: "Musée d'Orsay",
        city: "paris",
        category: Museum,
        rating: 4.8,
        coordinates: at(48.8600, 2.3266),
        description: "Impressionist masterpieces inside a Beaux-Arts railway station.",
        image_url: None,
        visit_minutes: 150,
        ticket_price: 16,
    },
    Attraction {
        id: "paris-luxembourg-gardens",
        name: "Luxembourg Gardens",
        city: "paris",
        category: Park,
        rating: 4.7,
        coordinates: at(48.8462, 2.3372),
        description: "Formal gardens with fountains, orchards and pony rides.",
        image_url: None,
        visit_minutes: 90,
        ticket_price: 0,
    },
];

static ROME: &[Attraction] = &[
    Attraction {
        id: "rome-colosseum",
        name: "Colosseum",
        city: "rome",
        category: Landmark,
        rating: 4.8,
        coordinates: at(41.8902, 12.4922),
        description: "The Flavian amphitheatre, still the symbol of imperial Rome.",
        image_url: Some("https://images.travel-planner.app/rome/colosseum.jpg"),
        visit_minutes: 150,
        ticket_price: 18,
    },
    Attraction {
        id: "rome-vatican-museums",
        name: "Vatican Museums",
        city: "rome",
        category: Museum,
        rating: 4.7,
        coordinates: at(41.9065, 12.4536),
        description: "Papal collections ending beneath the Sistine Chapel ceiling.",
        image_url: None,
        visit_minutes: 210,
        ticket_price: 20,
    },
    Attraction {
        id: "rome-pantheon",
        name: "Pantheon",
        city: "rome",
        category: Religious,
        rating: 4.8,
        coordinates: at(41.8986, 12.4769),
        description: "A 2,000-year-old temple with an unreinforced concrete dome.",
        image_url: None,
        visit_minutes: 45,
        ticket_price: 5,
    },
    Attraction {
        id: "rome-trevi-fountain",
        name: "Trevi Fountain",
        city: "rome",
        category: Landmark,
        rating: 4.7,
        coordinates: at(41.9009, 12.4833),
        description: "Baroque fountain where a tossed coin promises a return trip.",
        image_url: Some("https://images.travel-planner.app/rome/trevi.jpg"),
        visit_minutes: 30,
        ticket_price: 0,
    },
    Attraction {
        id: "rome-trastevere",
        name: "Trastevere",
        city: "rome",
        category: Neighborhood,
        rating: 4.6,
        coordinates: at(41.8897, 12.4695),
        description: "Ivy-covered lanes across the Tiber, liveliest after dark.",
        image_url: None,
        visit_minutes: 120,
        ticket_price: 0,
    },
    Attraction {
        id: "rome-borghese-gallery",
        name: "Borghese Gallery",
        city: "rome",
        category: Museum,
        rating: 4.8,
        coordinates: at(41.9142, 12.4921),
        description: "Bernini sculptures and Caravaggios inside a villa park.",
        image_url: None,
        visit_minutes: 120,
        ticket_price: 15,
    },
];

static TOKYO: &[Attraction] = &[
    Attraction {
        id: "tokyo-senso-ji",
        name: "Senso-ji",
        city: "tokyo",
        category: Religious,
        rating: 4.6,
        coordinates: at(35.7148, 139.7967),
        description: "Tokyo's oldest temple, approached through Nakamise street stalls.",
        image_url: Some("https://images.travel-planner.app/tokyo/senso-ji.jpg"),
        visit_minutes: 90,
        ticket_price: 0,
    },
    Attraction {
        id: "tokyo-meiji-shrine",
        name: "Meiji Shrine",
        city: "tokyo",
        category: Religious,
        rating: 4.6,
        coordinates: at(35.6764, 139.6993),
        description: "Forested Shinto shrine a few steps from Harajuku.",
        image_url: None,
        visit_minutes: 75,
        ticket_price: 0,
    },
    Attraction {
        id: "tokyo-skytree",
        name: "Tokyo Skytree",
        city: "tokyo",
        category: Viewpoint,
        rating: 4.5,
        coordinates: at(35.7101, 139.8107),
        description: "634-metre broadcast tower with a glass-floored observation deck.",
        image_url: None,
        visit_minutes: 90,
        ticket_price: 25,
    },
    Attraction {
        id: "tokyo-toyosu-market",
        name: "Toyosu Fish Market",
        city: "tokyo",
        category: Market,
        rating: 4.3,
        coordinates: at(35.6454, 139.7851),
        description: "Early-morning tuna auctions and sushi counters by the bay.",
        image_url: None,
        visit_minutes: 120,
        ticket_price: 0,
    },
    Attraction {
        id: "tokyo-shinjuku-gyoen",
        name: "Shinjuku Gyoen",
        city: "tokyo",
        category: Park,
        rating: 4.7,
        coordinates: at(35.6852, 139.7100),
        description: "Japanese, French and English gardens famed for cherry blossom.",
        image_url: Some("https://images.travel-planner.app/tokyo/shinjuku-gyoen.jpg"),
        visit_minutes: 100,
        ticket_price: 4,
    },
    Attraction {
        id: "tokyo-shibuya-crossing",
        name: "Shibuya Crossing",
        city: "tokyo",
        category: Neighborhood,
        rating: 4.5,
        coordinates: at(35.6595, 139.7005),
        description: "The world's busiest scramble crossing and its neon surroundings.",
        image_url: None,
        visit_minutes: 60,
        ticket_price: 0,
    },
];

static NEW_YORK: &[Attraction] = &[
    Attraction {
        id: "new-york-central-park",
        name: "Central Park",
        city: "new-york",
        category: Park,
        rating: 4.8,
        coordinates: at(40.7829, -73.9654),
        description: "843 acres of lawns, lakes and bridges in the middle of Manhattan.",
        image_url: Some("https://images.travel-planner.app/new-york/central-park.jpg"),
        visit_minutes: 150,
        ticket_price: 0,
    },
    Attraction {
        id: "new-york-met",
        name: "The Metropolitan Museum of Art",
        city: "new-york",
        category: Museum,
        rating: 4.8,
        coordinates: at(40.7794, -73.9632),
        description: "Five thousand years of art on Fifth Avenue.",
        image_url: None,
        visit_minutes: 180,
        ticket_price: 30,
    },
    Attraction {
        id: "new-york-statue-of-liberty",
        name: "Statue of Liberty",
        city: "new-york",
        category: Landmark,
        rating: 4.7,
        coordinates: at(40.6892, -74.0445),
        description: "Ferry out to Liberty Island and climb to the pedestal.",
        image_url: Some("https://images.travel-planner.app/new-york/liberty.jpg"),
        visit_minutes: 180,
        ticket_price: 25,
    },
    Attraction {
        id: "new-york-top-of-the-rock",
        name: "Top of the Rock",
        city: "new-york",
        category: Viewpoint,
        rating: 4.7,
        coordinates: at(40.7593, -73.9794),
        description: "Open-air decks facing the Empire State Building and the park.",
        image_url: None,
        visit_minutes: 75,
        ticket_price: 40,
    },
    Attraction {
        id: "new-york-chelsea-market",
        name: "Chelsea Market",
        city: "new-york",
        category: Market,
        rating: 4.5,
        coordinates: at(40.7424, -74.0060),
        description: "Food hall in a former biscuit factory beside the High Line.",
        image_url: None,
        visit_minutes: 90,
        ticket_price: 0,
    },
    Attraction {
        id: "new-york-brooklyn-bridge",
        name: "Brooklyn Bridge",
        city: "new-york",
        category: Landmark,
        rating: 4.8,
        coordinates: at(40.7061, -73.9969),
        description: "Walk the timber promenade from City Hall to DUMBO.",
        image_url: None,
        visit_minutes: 60,
        ticket_price: 0,
    },
];
