use serde::{Deserialize, Serialize};

/// Qualitative band for a 0-100 risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_percent(value: f64) -> Self {
        if value >= 60.0 {
            RiskLevel::High
        } else if value >= 30.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            RiskLevel::Low => Color::Green,
            RiskLevel::Moderate => Color::Yellow,
            RiskLevel::High => Color::Red,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDiseaseRisk {
    pub fungal_risk: f64,
    pub bacterial_risk: f64,
    /// Never populated by any rule; kept so the output shape stays stable.
    pub viral_risk: f64,
    pub pest_risk: f64,
    pub recommended_actions: Vec<String>,
}

impl PlantDiseaseRisk {
    /// Labelled risk values in display order
    pub fn risks(&self) -> [(&'static str, f64); 4] {
        [
            ("Fungal", self.fungal_risk),
            ("Bacterial", self.bacterial_risk),
            ("Viral", self.viral_risk),
            ("Pest", self.pest_risk),
        ]
    }

    pub fn max_risk(&self) -> f64 {
        self.risks().iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDiseaseRisk {
    pub heat_stress_risk: f64,
    pub respiratory_risk: f64,
    pub parasite_risk: f64,
    pub feed_contamination_risk: f64,
    pub recommended_actions: Vec<String>,
}

impl AnimalDiseaseRisk {
    pub fn risks(&self) -> [(&'static str, f64); 4] {
        [
            ("Heat Stress", self.heat_stress_risk),
            ("Respiratory", self.respiratory_risk),
            ("Parasite", self.parasite_risk),
            ("Feed Contamination", self.feed_contamination_risk),
        ]
    }

    pub fn max_risk(&self) -> f64 {
        self.risks().iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }
}

/// Disease risk assessment for a single weather snapshot.
///
/// A group is `None` when the farming type does not cover it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRisk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_diseases: Option<PlantDiseaseRisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_diseases: Option<AnimalDiseaseRisk>,
}

impl DiseaseRisk {
    pub fn is_empty(&self) -> bool {
        self.plant_diseases.is_none() && self.animal_diseases.is_none()
    }
}
