use crate::{FacilityId, RoomId};
use serde::{Deserialize, Serialize};

/// A selectable room facility (amenity). Read-only reference data owned by
/// the server; replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityOption {
    #[serde(rename = "_id")]
    pub id: FacilityId,
    pub name: String,
}

/// Envelope returned by `GET /admin/room-facilities`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FacilitiesEnvelope {
    pub data: FacilitiesData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FacilitiesData {
    pub facilities: Vec<FacilityOption>,
}

/// A stored room record as the server returns it. The listing page passes
/// this to the editor as the edit-mode seed.
///
/// Scalar values travel as numeric strings on this API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: RoomId,
    pub room_number: String,
    pub price: String,
    pub capacity: String,
    pub discount: String,
    #[serde(default)]
    pub facilities: Vec<FacilityOption>,
    /// URLs of images already stored server-side. Not local files; the
    /// editor renders them read-only and never mixes them into a new
    /// attachment selection.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Success (and error) body shape for room mutations: `{ "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}
