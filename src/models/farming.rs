use crate::error::FarmCastError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FarmingType {
    Crops,
    Animals,
    #[default]
    Mixed,
    Aquaculture,
}

impl FarmingType {
    pub const ALL: [FarmingType; 4] = [
        FarmingType::Crops,
        FarmingType::Animals,
        FarmingType::Mixed,
        FarmingType::Aquaculture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FarmingType::Crops => "crops",
            FarmingType::Animals => "animals",
            FarmingType::Mixed => "mixed",
            FarmingType::Aquaculture => "aquaculture",
        }
    }

    /// Whether plant disease risks are assessed for this farming type
    pub fn includes_plants(&self) -> bool {
        matches!(self, FarmingType::Crops | FarmingType::Mixed)
    }

    /// Whether animal disease risks are assessed for this farming type
    pub fn includes_animals(&self) -> bool {
        matches!(self, FarmingType::Animals | FarmingType::Mixed)
    }

    /// Next farming type in display order, wrapping around
    pub fn cycle(&self) -> Self {
        match self {
            FarmingType::Crops => FarmingType::Animals,
            FarmingType::Animals => FarmingType::Mixed,
            FarmingType::Mixed => FarmingType::Aquaculture,
            FarmingType::Aquaculture => FarmingType::Crops,
        }
    }
}

impl std::str::FromStr for FarmingType {
    type Err = FarmCastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crops" | "crop" => Ok(FarmingType::Crops),
            "animals" | "animal" | "livestock" => Ok(FarmingType::Animals),
            "mixed" => Ok(FarmingType::Mixed),
            "aquaculture" | "fish" => Ok(FarmingType::Aquaculture),
            other => Err(FarmCastError::InvalidData(format!(
                "unknown farming type '{}' (expected crops, animals, mixed or aquaculture)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for FarmingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
