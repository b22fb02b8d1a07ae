use crate::models::{
    AirQualityReading, AnimalDiseaseRisk, DiseaseRisk, FarmingType, PlantDiseaseRisk,
    WeatherReading,
};

const HIGH_FUNGAL: &str = "High fungal disease risk - apply fungicide preventively";
const MODERATE_FUNGAL: &str = "Moderate fungal risk - monitor crops closely";
const HIGH_BACTERIAL: &str = "High bacterial risk - ensure proper drainage and ventilation";
const HIGH_PEST: &str = "High pest activity - apply pest control measures";
const POOR_AIR_CROPS: &str = "Poor air quality - protect crops from pollution damage";

const HIGH_HEAT_STRESS: &str = "High heat stress risk - provide shade and water";
const MODERATE_HEAT_STRESS: &str = "Moderate heat stress - monitor animal behavior";
const HIGH_RESPIRATORY: &str = "High respiratory risk - improve ventilation and air quality";
const HIGH_PARASITE: &str = "High parasite risk - implement parasite control program";
const HIGH_FEED_CONTAMINATION: &str =
    "High feed contamination risk - store feed properly and check for mold";

/// Weather-driven disease risk estimator for crops and livestock
///
/// Plant risks (crops, mixed):
/// - Fungal: humidity >80% at 20-30°C (high), otherwise humidity >70% (moderate)
/// - Bacterial: humidity >75% above 25°C
/// - Pest: 22-35°C with wind under 10 km/h
/// - PM2.5 above 25 µg/m³ adds a pollution advisory
///
/// Animal risks (animals, mixed):
/// - Heat stress: above 30°C (high), above 25°C (moderate)
/// - Respiratory: PM2.5 >20 or PM10 >30
/// - Parasite: humidity >70% at 20-35°C
/// - Feed contamination: humidity >80% with >5 mm precipitation
///
/// Every rule is checked in the order above and appends its action when it
/// fires. Risk values are capped per rule, then clamped to 0-100.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiseaseRiskEstimator;

impl DiseaseRiskEstimator {
    pub fn estimate(
        &self,
        current: &WeatherReading,
        air_quality: Option<&AirQualityReading>,
        farming_type: FarmingType,
    ) -> DiseaseRisk {
        let plant_diseases = farming_type
            .includes_plants()
            .then(|| self.assess_plant_diseases(current, air_quality));

        let animal_diseases = farming_type
            .includes_animals()
            .then(|| self.assess_animal_diseases(current, air_quality));

        tracing::debug!(
            farming_type = %farming_type,
            plant = plant_diseases.is_some(),
            animal = animal_diseases.is_some(),
            "Disease risk estimated"
        );

        DiseaseRisk {
            plant_diseases,
            animal_diseases,
        }
    }

    fn assess_plant_diseases(
        &self,
        current: &WeatherReading,
        air_quality: Option<&AirQualityReading>,
    ) -> PlantDiseaseRisk {
        let temp = current.temperature();
        let humidity = current.humidity();
        let mut risk = PlantDiseaseRisk::default();

        if humidity > 80.0 && temp > 20.0 && temp < 30.0 {
            risk.fungal_risk = capped(90.0, (humidity - 70.0) * 2.0);
            risk.recommended_actions.push(HIGH_FUNGAL.to_string());
        } else if humidity > 70.0 {
            risk.fungal_risk = capped(60.0, (humidity - 60.0) * 1.5);
            risk.recommended_actions.push(MODERATE_FUNGAL.to_string());
        }

        if humidity > 75.0 && temp > 25.0 {
            risk.bacterial_risk = capped(85.0, ((humidity - 70.0) + (temp - 25.0)) * 2.0);
            risk.recommended_actions.push(HIGH_BACTERIAL.to_string());
        }

        if temp > 22.0 && temp < 35.0 && current.wind_speed() < 10.0 {
            risk.pest_risk = capped(80.0, (35.0 - temp) * 2.0 + (10.0 - current.wind_speed()));
            risk.recommended_actions.push(HIGH_PEST.to_string());
        }

        if let Some(aq) = air_quality {
            if aq.pm2_5() > 25.0 {
                risk.recommended_actions.push(POOR_AIR_CROPS.to_string());
            }
        }

        risk
    }

    fn assess_animal_diseases(
        &self,
        current: &WeatherReading,
        air_quality: Option<&AirQualityReading>,
    ) -> AnimalDiseaseRisk {
        let temp = current.temperature();
        let humidity = current.humidity();
        let mut risk = AnimalDiseaseRisk::default();

        if temp > 30.0 {
            risk.heat_stress_risk = capped(95.0, (temp - 25.0) * 5.0);
            risk.recommended_actions.push(HIGH_HEAT_STRESS.to_string());
        } else if temp > 25.0 {
            risk.heat_stress_risk = capped(60.0, (temp - 20.0) * 3.0);
            risk.recommended_actions.push(MODERATE_HEAT_STRESS.to_string());
        }

        if let Some(aq) = air_quality {
            if aq.pm2_5() > 20.0 || aq.pm10() > 30.0 {
                risk.respiratory_risk = capped(90.0, aq.pm2_5() * 2.0 + aq.pm10());
                risk.recommended_actions.push(HIGH_RESPIRATORY.to_string());
            }
        }

        if humidity > 70.0 && temp > 20.0 && temp < 35.0 {
            risk.parasite_risk = capped(85.0, (humidity - 60.0) * 1.5 + (temp - 20.0));
            risk.recommended_actions.push(HIGH_PARASITE.to_string());
        }

        if humidity > 80.0 && current.precipitation() > 5.0 {
            risk.feed_contamination_risk =
                capped(90.0, (humidity - 70.0) + current.precipitation() * 2.0);
            risk.recommended_actions.push(HIGH_FEED_CONTAMINATION.to_string());
        }

        risk
    }
}

/// Apply the rule's cap, then floor at 0 and ceiling at 100
fn capped(cap: f64, value: f64) -> f64 {
    value.min(cap).clamp(0.0, 100.0)
}
