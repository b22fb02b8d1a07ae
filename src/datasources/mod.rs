pub mod fallback;
pub mod weatherapi;

pub use fallback::fallback_report;
pub use weatherapi::WeatherApiClient;
