pub mod coerce;
pub mod engine;
pub mod lists;
pub mod registry;
pub mod token;
