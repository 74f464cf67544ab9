//! Daily report email — what a consultant receives when a client submits a log.

use crate::models::daily_log::DailyLog;
use crate::reports::{escape_html, EmailMessage};

/// Renders the report for one submitted log.
pub fn build_report_email(client_name: &str, consultant_name: &str, log: &DailyLog) -> EmailMessage {
    let subject = format!(
        "Daily Report from {} — {}",
        client_name,
        log.date.format("%b %-d, %Y")
    );

    let client = escape_html(client_name);
    let consultant = escape_html(consultant_name);
    let long_date = log.date.format("%A, %B %-d %Y");

    let weight = log
        .reported_weight()
        .map(|w| format!("{w}kg"))
        .unwrap_or_else(|| "—".to_string());
    let mood = if log.mood.trim().is_empty() {
        "—".to_string()
    } else {
        escape_html(&log.mood)
    };
    let (symptom_icon, symptom_label) = if log.has_symptoms() {
        ("⚠️", "Has Symptoms")
    } else {
        ("✅", "No Symptoms")
    };

    let sections = [
        ("🍽️ Meals Experience", log.meals_experience.as_str()),
        ("🏃 Exercise", log.exercise.as_str()),
        ("🩺 Symptoms", log.symptoms.as_str()),
        ("🚽 Bowel Movement", log.bowel_movement.as_str()),
        ("😴 Night Sleep", log.night_sleep.as_str()),
        ("📝 Additional Notes", log.notes.as_str()),
    ]
    .iter()
    .map(|(title, text)| optional_section(title, text))
    .collect::<String>();

    let html = format!(
        r#"<div style="font-family:sans-serif;max-width:600px;margin:0 auto;color:#1a1a1a;">
  <div style="background:#16a34a;padding:24px;border-radius:12px 12px 0 0;">
    <h1 style="color:white;margin:0;font-size:20px;">🥗 Daily Nutrition Report</h1>
    <p style="color:#bbf7d0;margin:4px 0 0;">From {client} · {long_date}</p>
  </div>
  <div style="background:#f9fafb;padding:24px;border-radius:0 0 12px 12px;border:1px solid #e5e7eb;">
    <p style="color:#374151;">Hi {consultant},</p>
    <p style="color:#374151;">{client} has submitted their daily nutrition report. Here's a summary:</p>
    <div style="display:grid;grid-template-columns:1fr 1fr;gap:12px;margin:20px 0;">
      {water_tile}
      {weight_tile}
      {mood_tile}
      {symptom_tile}
    </div>
{sections}    <p style="color:#9ca3af;font-size:12px;margin-top:24px;border-top:1px solid #e5e7eb;padding-top:16px;">
      This report was sent automatically by your Nutrition Consultant App.
    </p>
  </div>
</div>"#,
        water_tile = vital_tile(&format!("{}L", log.water_intake), "Water Intake", "#2563eb"),
        weight_tile = vital_tile(&weight, "Weight", "#7c3aed"),
        mood_tile = vital_tile(&mood, "Mood", "#16a34a"),
        symptom_tile = vital_tile(symptom_icon, symptom_label, "#ea580c"),
    );

    EmailMessage { subject, html }
}

/// `value` must already be safe HTML.
fn vital_tile(value: &str, label: &str, color: &str) -> String {
    format!(
        r#"<div style="background:white;border:1px solid #e5e7eb;border-radius:8px;padding:16px;text-align:center;"><p style="font-size:24px;font-weight:bold;color:{color};margin:0;">{value}</p><p style="color:#6b7280;font-size:12px;margin:4px 0 0;">{label}</p></div>"#
    )
}

/// Empty when `text` is blank.
fn optional_section(title: &str, text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    format!(
        r#"    <h3 style="color:#111827;margin:20px 0 8px;">{title}</h3>
    <p style="background:white;border:1px solid #e5e7eb;border-radius:8px;padding:12px;color:#374151;margin:0 0 16px;">{}</p>
"#,
        escape_html(text.trim())
    )
}
