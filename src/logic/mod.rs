pub mod calculations;
pub mod disease_risk;
pub mod locations;
pub mod weather_service;

pub use disease_risk::DiseaseRiskEstimator;
pub use weather_service::WeatherService;
