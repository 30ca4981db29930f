//! Message endpoints: list (newest first) and submit.
//!
//! Submissions may be JSON or an urlencoded form. JSON callers get `201` with the stored
//! record; form callers are redirected back to the page.

use axum::extract::{FromRequest, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use storage::MessageRecord;

use crate::error::ServerError;
use crate::state::AppState;

/// Submitted fields; either may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A decoded submission and whether it arrived as JSON.
#[derive(Debug)]
pub struct Submission {
    pub form: SubmitForm,
    pub is_json: bool,
}

impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"));

        let form = if is_json {
            let Json(form) = Json::<SubmitForm>::from_request(req, state)
                .await
                .map_err(|e| ServerError::BadRequest(e.body_text()))?;
            form
        } else if content_type.is_none() {
            // No declared body format: nothing to read, so every field is absent.
            SubmitForm::default()
        } else {
            let Form(form) = Form::<SubmitForm>::from_request(req, state)
                .await
                .map_err(|e| ServerError::BadRequest(e.body_text()))?;
            form
        };

        Ok(Self { form, is_json })
    }
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageRecord>>, ServerError> {
    let messages = state
        .service
        .list_messages()
        .await
        .map_err(ServerError::from_list)?;
    Ok(Json(messages))
}

pub async fn submit_message(
    State(state): State<AppState>,
    submission: Submission,
) -> Result<Response, ServerError> {
    let record = state
        .service
        .create_message(
            submission.form.name.as_deref(),
            submission.form.message.as_deref(),
        )
        .await
        .map_err(ServerError::from_create)?;

    if submission.is_json {
        Ok((StatusCode::CREATED, Json(record)).into_response())
    } else {
        Ok(Redirect::to("/").into_response())
    }
}
