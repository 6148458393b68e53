//! Shared wire types and the HTTP client for the rooms admin API.

use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// Maximum accepted image size in bytes (1 MiB). Larger selections are
/// rejected client-side before they ever enter the form.
pub const MAX_IMAGE_SIZE: usize = 1024 * 1024;

/// Server-assigned room identifier (opaque string).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct RoomId(pub String);

/// Identifier of a selectable room facility.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct FacilityId(pub String);

/// A locally selected image: file name, MIME type, and raw bytes.
///
/// This is the form's representation of an attachment before submission.
/// Previews and the multipart encoding both read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}
