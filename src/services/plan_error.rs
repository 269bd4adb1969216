use thiserror::Error;

/// Failures of the itinerary generator and the custom-plan editor.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    #[error("Trip must end on or after its start date")]
    InvalidDates,
    #[error("Trip spans {days} days, the maximum is {max}")]
    TripTooLong { days: i64, max: i64 },
    #[error("A trip needs at least one adult")]
    NoAdults,
    #[error("Group of {travellers} travellers, the maximum is {max}")]
    GroupTooLarge { travellers: u32, max: u32 },
    #[error("Cost of {cost} per person exceeds the maximum of {max}")]
    CostTooHigh { cost: u32, max: u32 },
    #[error("Day {0} is not part of this plan")]
    DayNotFound(u32),
    #[error("Activity {0} not found")]
    ActivityNotFound(String),
    #[error("Unknown attraction: {0}")]
    UnknownAttraction(String),
    #[error("{0} is already in this plan")]
    DuplicateVenue(String),
    #[error("Activity title must not be empty")]
    EmptyTitle,
    #[error("Position {index} is out of range for a day with {len} activities")]
    PositionOutOfRange { index: usize, len: usize },
}
