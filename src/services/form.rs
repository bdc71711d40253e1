use std::sync::Arc;
use std::time::Duration;

use base64::Engine;

use crate::models::{FormState, LookupResponse, MeetingItem, SubmissionPayload};
use crate::state::AppState;

pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_NOT_FOUND: &str = "Email not found";
pub const MSG_LOOKUP_FAILED: &str = "Error fetching data";
pub const MSG_RATE_ALL: &str = "Please rate all companies before submitting.";

/// Reversible transport encoding for the email query parameter. The
/// scripted service expects the browser's `btoa` form; this is not a
/// security measure.
pub fn encode_email(email: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(email)
}

/// Email field changed. An empty value clears the list immediately and
/// never touches the network; anything else schedules a lookup after
/// the configured quiet period, superseding any pending timer.
///
/// Returns the state as of this event; the lookup itself lands later
/// and is picked up by the next snapshot. `None` means no such session.
pub fn email_changed(state: &Arc<AppState>, session_id: &str, email: String) -> Option<FormState> {
    let (snapshot, scheduled_seq) = {
        let mut sessions = state.sessions.lock().unwrap();
        let sess = sessions.get_mut(session_id)?;

        if sess.state.submitted {
            return Some(sess.state.clone());
        }

        sess.lookup_seq += 1;
        sess.state.email = email.clone();

        if email.is_empty() {
            sess.state.meetings.clear();
            sess.state.name.clear();
            sess.state.email_error = Some(MSG_EMAIL_REQUIRED.to_string());
            (sess.state.clone(), None)
        } else {
            sess.state.email_error = None;
            (sess.state.clone(), Some(sess.lookup_seq))
        }
    };

    if let Some(seq) = scheduled_seq {
        let state = Arc::clone(state);
        let session_id = session_id.to_string();
        let debounce = Duration::from_millis(state.config.debounce_ms);
        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            run_lookup(&state, &session_id, &email, seq).await;
        });
    }

    Some(snapshot)
}

/// Fires after the debounce window. The generation check only guards
/// the timer: once the call is in flight there is no cancellation, so
/// a stale response can still overwrite newer state.
async fn run_lookup(state: &Arc<AppState>, session_id: &str, email: &str, seq: u64) {
    {
        let mut sessions = state.sessions.lock().unwrap();
        match sessions.get_mut(session_id) {
            Some(sess) if sess.lookup_seq == seq && !sess.state.submitted => {
                sess.state.loading = true;
            }
            _ => return,
        }
    }

    let encoded = encode_email(email);
    let result = state.backend.lookup(&encoded).await;

    let mut sessions = state.sessions.lock().unwrap();
    let Some(sess) = sessions.get_mut(session_id) else {
        return;
    };
    sess.state.loading = false;
    apply_lookup_result(&mut sess.state, result);
}

fn apply_lookup_result(form: &mut FormState, result: anyhow::Result<LookupResponse>) {
    match result {
        Ok(resp) => {
            let meetings = resp.delegate_meetings.unwrap_or_default();
            if meetings.is_empty() {
                form.meetings.clear();
                form.name.clear();
                form.email_error = Some(MSG_EMAIL_NOT_FOUND.to_string());
            } else {
                // The list is replaced wholesale; ids are the 1-based
                // position in the fetched order.
                form.meetings = meetings
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| MeetingItem {
                        id: i as u32 + 1,
                        name,
                        rating: None,
                    })
                    .collect();
                form.name = resp.name.unwrap_or_default();
                form.company = resp.company.unwrap_or_default();
                form.manager = resp.manager.unwrap_or_default();
                form.email_error = None;
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "lookup failed");
            form.meetings.clear();
            form.name.clear();
            form.email_error = Some(MSG_LOOKUP_FAILED.to_string());
        }
    }
}

/// Star clicked: update only the matching item. Unknown ids are a
/// no-op, matching the original form's behavior.
pub fn rate(state: &Arc<AppState>, session_id: &str, item_id: u32, stars: u8) -> Option<FormState> {
    let mut sessions = state.sessions.lock().unwrap();
    let sess = sessions.get_mut(session_id)?;

    if !sess.state.submitted {
        if let Some(item) = sess.state.meetings.iter_mut().find(|m| m.id == item_id) {
            item.rating = Some(stars);
        }
    }

    Some(sess.state.clone())
}

pub fn set_comment(state: &Arc<AppState>, session_id: &str, comment: String) -> Option<FormState> {
    let mut sessions = state.sessions.lock().unwrap();
    let sess = sessions.get_mut(session_id)?;
    if !sess.state.submitted {
        sess.state.comment = comment;
    }
    Some(sess.state.clone())
}

pub fn set_name(state: &Arc<AppState>, session_id: &str, name: String) -> Option<FormState> {
    let mut sessions = state.sessions.lock().unwrap();
    let sess = sessions.get_mut(session_id)?;
    if !sess.state.submitted {
        sess.state.name = name;
    }
    Some(sess.state.clone())
}

/// Submit pressed. Presence checks run in order (email, then ratings);
/// the first failure sets its message and aborts. A passing form posts
/// the consolidated payload and lands on the confirmation screen even
/// if the dispatch fails.
pub async fn submit(state: &Arc<AppState>, session_id: &str) -> Option<FormState> {
    let payload = {
        let mut sessions = state.sessions.lock().unwrap();
        let sess = sessions.get_mut(session_id)?;
        let form = &mut sess.state;

        if form.submitted {
            return Some(form.clone());
        }

        if form.email.is_empty() {
            form.email_error = Some(MSG_EMAIL_REQUIRED.to_string());
            return Some(form.clone());
        }
        form.email_error = None;

        if form.meetings.iter().any(|m| m.rating.is_none()) {
            form.rating_error = Some(MSG_RATE_ALL.to_string());
            return Some(form.clone());
        }
        form.rating_error = None;

        form.loading = true;
        SubmissionPayload {
            email: encode_email(&form.email),
            delegate_meetings: form.meetings.clone(),
            comment: form.comment.clone(),
            company: form.company.clone(),
            manager: form.manager.clone(),
            name: form.name.clone(),
        }
    };

    tracing::info!(session = session_id, "dispatching feedback submission");

    // Fire and forget: the response is never inspected, and a transport
    // failure does not keep the respondent off the confirmation screen.
    if let Err(e) = state.backend.submit(&payload).await {
        tracing::error!(error = %e, "failed to submit feedback");
    }

    let mut sessions = state.sessions.lock().unwrap();
    let sess = sessions.get_mut(session_id)?;
    sess.state.loading = false;
    sess.state.submitted = true;
    Some(sess.state.clone())
}
