//! Submission orchestration: validate, dispatch create-or-update, and run
//! the success/error side effects.

use payloads::requests::RoomMultipart;
use payloads::responses::SuccessMessage;
use payloads::{APIClient, ClientError, RoomId};

use crate::payload::build_payload;
use crate::state::{Mode, RoomForm};

/// Transport seam for room mutations. Implemented by [`APIClient`]; tests
/// substitute a recording mock.
// Futures here are not Send: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait RoomTransport {
    async fn create_room(
        &self,
        details: RoomMultipart,
    ) -> Result<SuccessMessage, ClientError>;

    async fn update_room(
        &self,
        room_id: &RoomId,
        details: RoomMultipart,
    ) -> Result<SuccessMessage, ClientError>;
}

impl RoomTransport for APIClient {
    async fn create_room(
        &self,
        details: RoomMultipart,
    ) -> Result<SuccessMessage, ClientError> {
        APIClient::create_room(self, details).await
    }

    async fn update_room(
        &self,
        room_id: &RoomId,
        details: RoomMultipart,
    ) -> Result<SuccessMessage, ClientError> {
        APIClient::update_room(self, room_id, details).await
    }
}

/// The form's outward-facing collaborators: toast notifications and
/// navigation back to the rooms listing. Fire-and-forget.
pub trait FormEffects {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
    fn navigate_to_rooms(&self);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Per-field validation failed. Errors render inline; nothing was
    /// dispatched and no toast is shown.
    #[error("form has validation errors")]
    Invalid,
    /// A submission is already in flight; this attempt was dropped without
    /// dispatching.
    #[error("a submission is already in flight")]
    InFlight,
    /// The dispatch failed. The form is preserved so the user can retry.
    #[error("{0}")]
    Rejected(String),
}

/// Drives one submission attempt end to end. Holds the transport and the
/// effect collaborators; the form itself is passed per call.
pub struct SubmissionCoordinator<T, E> {
    transport: T,
    effects: E,
}

impl<T: RoomTransport, E: FormEffects> SubmissionCoordinator<T, E> {
    pub fn new(transport: T, effects: E) -> Self {
        Self { transport, effects }
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Validate and dispatch the form.
    ///
    /// Rejects without dispatching when validation fails or another attempt
    /// is in flight. Otherwise sets the submitting flag around a single
    /// create-or-update request, then notifies and requests navigation on
    /// success, or surfaces the extracted message and leaves the form
    /// untouched on failure. Failures are terminal for the attempt; retry
    /// is an explicit user action.
    pub async fn submit(
        &self,
        form: &mut RoomForm,
    ) -> Result<SuccessMessage, SubmitError> {
        if form.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        if !form.validate_all().is_empty() {
            return Err(SubmitError::Invalid);
        }

        form.set_submitting(true);
        let payload = build_payload(form);
        let result = match form.mode() {
            Mode::Create => self.transport.create_room(payload).await,
            Mode::Edit(room_id) => {
                self.transport.update_room(room_id, payload).await
            }
        };
        form.set_submitting(false);

        match result {
            Ok(success) => {
                tracing::info!("room saved: {}", success.message);
                self.effects.notify_success(&success.message);
                self.effects.navigate_to_rooms();
                Ok(success)
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!("room submission failed: {message}");
                self.effects.notify_error(&message);
                Err(SubmitError::Rejected(message))
            }
        }
    }
}
