pub mod form;
pub mod wire;

pub use form::{FormSession, FormState, MeetingItem};
pub use wire::{LookupResponse, SubmissionPayload};
