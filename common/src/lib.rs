//! E-Waste AI Common Library
//!
//! Types and decision logic shared with the Web(WASM) frontend. Everything
//! here compiles on native targets so it is covered by plain `cargo test`.

pub mod charts;
pub mod error;
pub mod flow;
pub mod normalizer;
pub mod prompts;
pub mod stats;
pub mod types;

pub use charts::{material_bar_chart_svg, recyclability_pie_chart_svg};
pub use error::{Error, Result};
pub use flow::{FlowState, UploadFlow, DEBOUNCE_WINDOW_MS};
pub use normalizer::{clean_response, normalize_response};
pub use prompts::build_analysis_prompt;
pub use stats::{parse_statistics_response, MaterialDatum, RecyclabilityDatum, StatisticsData};
pub use types::{
    format_confidence, AnalysisResult, Category, Recommendation, RecommendationDetail,
    Recyclability, NO_RECOMMENDATION,
};
