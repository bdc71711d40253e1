use serde::{Deserialize, Serialize};

/// One counterpart the respondent met, to be rated 1-5.
/// Ids are the 1-based position in the fetched list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingItem {
    pub id: u32,
    pub name: String,
    pub rating: Option<u8>,
}

/// Full view state of one form, snapshotted back to the page after
/// every event. The meeting list is always replaced wholesale by a
/// lookup result, never patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub manager: String,
    pub comment: String,
    pub meetings: Vec<MeetingItem>,
    pub loading: bool,
    pub submitted: bool,
    pub email_error: Option<String>,
    pub rating_error: Option<String>,
}

/// One page view's worth of form state. `lookup_seq` is the debounce
/// generation: each email edit bumps it, and a pending lookup timer
/// only fires if its generation is still current.
#[derive(Debug)]
pub struct FormSession {
    pub state: FormState,
    pub lookup_seq: u64,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
            lookup_seq: 0,
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
