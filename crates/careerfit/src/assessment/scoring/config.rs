use serde::{Deserialize, Serialize};

/// Dimension lists and level rules an engine scores against.
///
/// The instrument decides which weight entries count: weights that point at
/// dimensions outside these lists are ignored during scoring, so a catalog
/// can carry experimental entries without shifting anyone's results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentProfile {
    pub functions: Vec<String>,
    pub traits: Vec<String>,
    pub level_dimensions: Vec<SeniorityDimension>,
    pub level_bands: Vec<LevelBand>,
    pub fallback_function: String,
}

/// One level dimension together with its share of the seniority index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorityDimension {
    pub name: String,
    pub weight: f32,
}

/// A recommended level and the lowest seniority index that reaches it.
/// Bands are listed in ascending floor order; classification picks the last
/// band whose floor the index meets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelBand {
    pub label: String,
    pub floor: f32,
}

impl InstrumentProfile {
    /// The shipped HR instrument: ten functions, six working-style traits,
    /// four weighted level dimensions, and four career bands.
    pub fn standard() -> Self {
        Self {
            functions: [
                "Talent Acquisition",
                "Compensation & Benefits",
                "HR Operations",
                "HRIS / HR Technology",
                "Learning & Development",
                "Employee Relations",
                "Organizational Development",
                "Performance Management",
                "HR Analytics",
                "Talent Management",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            traits: [
                "People-centric",
                "Analytical",
                "Process-oriented",
                "Tech-savvy",
                "Strategic",
                "Learning agility",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            level_dimensions: vec![
                SeniorityDimension {
                    name: "Execution".to_string(),
                    weight: 0.25,
                },
                SeniorityDimension {
                    name: "Ownership".to_string(),
                    weight: 0.30,
                },
                SeniorityDimension {
                    name: "Strategy".to_string(),
                    weight: 0.25,
                },
                SeniorityDimension {
                    name: "Leadership".to_string(),
                    weight: 0.20,
                },
            ],
            level_bands: vec![
                LevelBand {
                    label: "Junior / Entry".to_string(),
                    floor: 0.0,
                },
                LevelBand {
                    label: "Mid-level / Specialist".to_string(),
                    floor: 45.0,
                },
                LevelBand {
                    label: "Senior / Lead Specialist".to_string(),
                    floor: 60.0,
                },
                LevelBand {
                    label: "Lead / Manager".to_string(),
                    floor: 75.0,
                },
            ],
            fallback_function: "General HR".to_string(),
        }
    }
}
