use serde::{Deserialize, Serialize};

use super::MeetingItem;

/// Lookup endpoint response. The scripted service omits fields it has
/// no value for; an absent or empty `delegate_meetings` means the email
/// was not found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupResponse {
    pub name: Option<String>,
    pub company: Option<String>,
    pub manager: Option<String>,
    pub delegate_meetings: Option<Vec<String>>,
}

/// Submission endpoint request body. `email` carries the same
/// reversible transport encoding the lookup query uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub email: String,
    pub delegate_meetings: Vec<MeetingItem>,
    pub comment: String,
    pub company: String,
    pub manager: String,
    pub name: String,
}
