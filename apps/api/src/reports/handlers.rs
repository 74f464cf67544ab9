//! Axum route handlers for report and reminder email composition.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::daily_log::DailyLog;
use crate::reports::reminder_email::{compose_reminders, OutgoingEmail, ReminderTarget};
use crate::reports::report_email::build_report_email;
use crate::reports::EmailMessage;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeReportRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub consultant_name: String,
    pub log: DailyLog,
}

#[derive(Debug, Deserialize)]
pub struct ComposeRemindersRequest {
    #[serde(default)]
    pub targets: Vec<ReminderTarget>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRemindersResponse {
    pub reminders: Vec<OutgoingEmail>,
    pub reminders_composed: usize,
}

/// POST /api/v1/reports/compose
pub async fn handle_compose_report(
    request: Result<Json<ComposeReportRequest>, JsonRejection>,
) -> Result<Json<EmailMessage>, AppError> {
    let Json(request) = request?;
    let client_name = request.client_name.trim();
    if client_name.is_empty() {
        return Err(AppError::Validation("clientName cannot be empty".to_string()));
    }

    let consultant_name = match request.consultant_name.trim() {
        "" => "there",
        name => name,
    };

    Ok(Json(build_report_email(
        client_name,
        consultant_name,
        &request.log,
    )))
}

/// POST /api/v1/reminders/compose
///
/// One email per active plan in `targets`; others are skipped silently.
pub async fn handle_compose_reminders(
    request: Result<Json<ComposeRemindersRequest>, JsonRejection>,
) -> Result<Json<ComposeRemindersResponse>, AppError> {
    let Json(request) = request?;
    let reminders = compose_reminders(&request.targets);
    info!(
        "Composed {} reminders for {} targets",
        reminders.len(),
        request.targets.len()
    );

    Ok(Json(ComposeRemindersResponse {
        reminders_composed: reminders.len(),
        reminders,
    }))
}
