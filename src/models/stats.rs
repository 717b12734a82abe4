use serde::Deserialize;
use std::collections::BTreeMap;

/// Resumen del dashboard (`GET /stats`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSummary {
    pub total: i64,
    pub transit: i64,
    /// El backend formatea el valor total como string ("123.40")
    pub value: String,
    pub new_sellers: i64,
}

/// Estadísticas detalladas (`GET /stats/detail`)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatsDetail {
    #[serde(default)]
    pub by_status: BTreeMap<String, i64>,
    #[serde(default)]
    pub top_categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryCount {
    #[serde(default)]
    pub category: Option<String>,
    pub count: i64,
}

/// Respuesta del refresh masivo de tracking (`POST /tracking/update-all`)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrackingUpdateResult {
    pub updated: i64,
}
