use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use form::{SubmissionRecord, SubmitPayload};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response from a stored submission
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    pub message: String,
    pub total_records: usize,
}

/// All stored submissions
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionsResponse {
    pub total: usize,
    pub records: Vec<SubmissionRecord>,
}

/// Persist one submitted form.
///
/// # Example
/// ```json
/// // Request
/// { "fields": { "Header 1": "Alice", "Header 2": "y" } }
///
/// // Response
/// { "status": "saved", "message": "Data saved successfully", "total_records": 1 }
/// ```
pub async fn submit_form(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<SubmitPayload>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let checked = payload
        .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))
        .and_then(|Json(payload)| {
            check_record(&payload.fields)?;
            Ok(payload.fields)
        });
    let record = match checked {
        Ok(record) => record,
        Err(err) => {
            metrics::counter!("dynform_submissions_total", "outcome" => "rejected").increment(1);
            return Err(err);
        }
    };

    let total_records = match state.store.append(record).await {
        Ok(total) => total,
        Err(err) => {
            metrics::counter!("dynform_submissions_total", "outcome" => "failed").increment(1);
            return Err(ServerError::Store(err));
        }
    };
    metrics::counter!("dynform_submissions_total", "outcome" => "saved").increment(1);

    Ok(Json(SubmitResponse {
        status: "saved".to_string(),
        message: "Data saved successfully".to_string(),
        total_records,
    }))
}

/// List every stored submission, oldest first
pub async fn list_submissions(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let records = state.store.load().await?.into_records();
    Ok(Json(SubmissionsResponse {
        total: records.len(),
        records,
    }))
}

fn check_record(record: &SubmissionRecord) -> ServerResult<()> {
    if record.is_empty() {
        return Err(ServerError::BadRequest("fields must not be empty".to_string()));
    }
    if let Some((header, _)) = record
        .iter()
        .find(|(header, value)| header.trim().is_empty() || value.trim().is_empty())
    {
        return Err(ServerError::BadRequest(format!(
            "field {header:?} has an empty header or value"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_is_rejected() {
        assert!(matches!(
            check_record(&SubmissionRecord::new()),
            Err(ServerError::BadRequest(_))
        ));
    }

    #[test]
    fn blank_value_is_rejected() {
        let record: SubmissionRecord = [("Name", " ")].into_iter().collect();
        assert!(check_record(&record).is_err());
    }

    #[test]
    fn filled_record_passes() {
        let record: SubmissionRecord = [("Name", "Alice")].into_iter().collect();
        assert!(check_record(&record).is_ok());
    }
}
