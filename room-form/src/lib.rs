//! The room editor's form engine.
//!
//! Everything with actual state-machine behavior lives here, independent of
//! the browser: the form state and its validation ([`state`]), the preview
//! lifecycle for selected images ([`previews`]), serialization into the
//! multipart body ([`payload`]), and submission orchestration ([`submit`]).
//! The `ui` crate wires these into Yew components; tests drive them
//! directly.

pub mod payload;
pub mod previews;
pub mod state;
pub mod submit;

pub use payload::build_payload;
pub use previews::{PreviewHandle, PreviewRegistry, PreviewSource};
pub use state::{Field, Mode, RoomForm, ValidationErrors};
pub use submit::{
    FormEffects, RoomTransport, SubmissionCoordinator, SubmitError,
};
