//! Track and class categories.

use serde::{Deserialize, Serialize};

/// Track surface type as scheduled by the sanctioning body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Oval,
    Road,
    Dirt,
}

/// Competition class used for separate performance breakdowns.
///
/// Legacy entries may not carry an explicit class; see
/// [`RaceClass::from_track_type`] for the fallback derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceClass {
    Oval,
    Road,
    DirtRoad,
    DirtOval,
}

impl RaceClass {
    /// All classes, in breakdown display order.
    pub const ALL: [RaceClass; 4] =
        [RaceClass::Oval, RaceClass::Road, RaceClass::DirtRoad, RaceClass::DirtOval];

    /// Fallback class for entries recorded before classes were explicit.
    ///
    /// Oval tracks map to the oval class and everything else to road. The
    /// dirt classes are never produced by this fallback; they only appear
    /// when an entry sets its class explicitly.
    pub fn from_track_type(track_type: TrackType) -> Self {
        match track_type {
            TrackType::Oval => RaceClass::Oval,
            TrackType::Road | TrackType::Dirt => RaceClass::Road,
        }
    }
}

impl TrackType {
    /// Wire-format name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Oval => "oval",
            TrackType::Road => "road",
            TrackType::Dirt => "dirt",
        }
    }
}

/// A race track: display name plus surface type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(rename = "type")]
    pub track_type: TrackType,
}

impl Track {
    pub fn new(name: impl Into<String>, track_type: TrackType) -> Self {
        Track { name: name.into(), track_type }
    }
}
