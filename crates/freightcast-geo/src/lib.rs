//! Freightcast Geo - City reference table, distances and city matching
//!
//! The coordinate table is fixed at startup. Distances are great-circle
//! kilometers between table entries; free-text destinations are resolved to
//! table entries by substring matching.

pub mod cities;
pub mod distance;
pub mod extract;

pub use cities::CityTable;
pub use distance::great_circle_km;
pub use extract::CityExtractor;
