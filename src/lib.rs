// Billstance - Congress bill stance classification service
// Library exports

pub mod config;
pub mod congress;
pub mod gemini;
pub mod model;
pub mod preprocess;
pub mod server;
pub mod training;
