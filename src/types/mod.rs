pub mod itinerary;
pub mod raw;

pub use itinerary::{Day, DayContent, Itinerary, Maps, Poi, Sections, Stop};
pub use raw::{RawDayResponse, RawPoi};
