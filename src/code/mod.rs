pub mod analysis;
pub mod bounds;
pub mod coset;
pub mod generator;
pub mod params;
pub mod roots;
pub mod weight;
