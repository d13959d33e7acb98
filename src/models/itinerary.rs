use serde::{Deserialize, Serialize};

/// What the form submits: where to, the trip's vibe, and the traveller's
/// free time. `vibes` and `freeTime` are required non-empty; `destination`
/// is optional (some client variants omit it). Required fields default to
/// empty on deserialization so validation can answer with a structured
/// error instead of a bare deserializer failure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default)]
    pub vibes: String,
    #[serde(default, rename = "freeTime")]
    pub free_time: String,
}

/// One generated itinerary, exactly as the AI service emits it. Every
/// structural field defaults when the model omits it: a missing packing
/// list means "no data", never a decode failure.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Itinerary {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub weather_summary: String,
    /// 0-100, how well the plan matches the requested vibe.
    #[serde(default)]
    pub vibe_match_score: u8,
    #[serde(default)]
    pub itinerary: Vec<DayPlan>,
    #[serde(default)]
    pub packing_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_tip: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub plan: String,
}
