//! Recycling statistics types
//!
//! The statistics endpoint returns aggregate counts by material type and by
//! recyclability. The dashboard has no correctness contract beyond "always
//! shows a chart": on any fetch or parse failure the view substitutes the
//! fixed illustrative numbers in `StatisticsData::fallback`.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One bar of the material-distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDatum {
    pub name: String,
    pub amount: u32,
}

/// One slice of the recyclability pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecyclabilityDatum {
    pub name: String,
    pub value: u32,
}

/// Aggregate statistics as served by the statistics endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsData {
    pub material_distribution: Vec<MaterialDatum>,
    pub recyclability: Vec<RecyclabilityDatum>,
}

impl StatisticsData {
    /// Fixed illustrative numbers shown when the endpoint is unreachable
    pub fn fallback() -> Self {
        StatisticsData {
            material_distribution: vec![
                MaterialDatum { name: "Plastic".to_string(), amount: 400 },
                MaterialDatum { name: "Metal".to_string(), amount: 300 },
                MaterialDatum { name: "Glass".to_string(), amount: 200 },
                MaterialDatum { name: "Hazardous".to_string(), amount: 100 },
                MaterialDatum { name: "Other".to_string(), amount: 150 },
            ],
            recyclability: vec![
                RecyclabilityDatum { name: "Recyclable".to_string(), value: 70 },
                RecyclabilityDatum { name: "Non-Recyclable".to_string(), value: 30 },
            ],
        }
    }
}

/// Parse a statistics endpoint response body
pub fn parse_statistics_response(body: &str) -> Result<StatisticsData> {
    let data: StatisticsData = serde_json::from_str(body)?;
    Ok(data)
}
