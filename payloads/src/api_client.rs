use crate::{RoomId, requests::RoomMultipart, responses};
use reqwest::StatusCode;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the admin rooms backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/admin/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ReqwestResult {
        let request =
            self.inner_client.put(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch the list of selectable facilities.
    pub async fn room_facilities(
        &self,
    ) -> Result<Vec<responses::FacilityOption>, ClientError> {
        let response = self.empty_get("room-facilities").await?;
        let envelope: responses::FacilitiesEnvelope = ok_body(response).await?;
        Ok(envelope.data.facilities)
    }

    /// Create a room from a multipart body.
    pub async fn create_room(
        &self,
        details: RoomMultipart,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response =
            self.post_multipart("rooms", details.into_form()).await?;
        ok_body(response).await
    }

    /// Update an existing room, replacing its fields with the given body.
    pub async fn update_room(
        &self,
        room_id: &RoomId,
        details: RoomMultipart,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self
            .put_multipart(&format!("rooms/{room_id}"), details.into_form())
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, carrying the server's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Pull the human-readable message out of an error body. The backend sends
/// `{ "message": "..." }`; anything else is surfaced as raw text.
fn extract_message(text: String) -> String {
    match serde_json::from_str::<responses::SuccessMessage>(&text) {
        Ok(body) => body.message,
        Err(_) => text,
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            extract_message(response.text().await?),
        ));
    }
    Ok(response.json::<T>().await?)
}
