//! Analytics Payload Types
//!
//! Shapes of the JSON document served by `GET <base>/api/analytics`.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of the analytics endpoint
///
/// Missing or `null` series deserialize to empty sequences so the renderers
/// always receive something they can draw.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_requests_data: Vec<SeriesPoint>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub server_load_data: Vec<SeriesPoint>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recent_alerts_data: Vec<AlertRecord>,
}

/// One labelled value in a chart series
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

/// A recent alert row
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlertRecord {
    pub id: String,
    pub severity: String,
    pub message: String,
    pub timestamp: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
