//! Reminder email — the morning nudge a client receives for each active action plan.

use serde::{Deserialize, Serialize};

use crate::models::action_plan::{ActionPlan, ActionPlanTask};
use crate::reports::{escape_html, EmailMessage};

/// One reminder recipient and the plan the reminder is about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderTarget {
    pub recipient_name: String,
    pub recipient_email: String,
    pub plan: ActionPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Percentage of completed tasks, rounded. No tasks means 0.
pub fn task_progress(tasks: &[ActionPlanTask]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    ((completed as f64 / tasks.len() as f64) * 100.0).round() as u8
}

pub fn build_reminder_email(recipient_name: &str, plan: &ActionPlan) -> EmailMessage {
    let progress = task_progress(&plan.tasks);
    let first_name = recipient_name.split_whitespace().next().unwrap_or("there");
    let title = escape_html(&plan.title);

    let (completed, pending): (Vec<&ActionPlanTask>, Vec<&ActionPlanTask>) =
        plan.tasks.iter().partition(|t| t.completed);

    let completed_items = if completed.is_empty() {
        r#"<li style="color:#9ca3af;">Nothing completed yet — keep going!</li>"#.to_string()
    } else {
        completed
            .iter()
            .map(|t| {
                format!(
                    r#"<li style="padding:4px 0;color:#16a34a;">✅ {} {}</li>"#,
                    t.category.icon(),
                    escape_html(&t.title)
                )
            })
            .collect()
    };

    let pending_items = if pending.is_empty() {
        r#"<li style="color:#16a34a;">🎉 All tasks completed!</li>"#.to_string()
    } else {
        pending.iter().map(|t| pending_item(t)).collect()
    };

    let html = format!(
        r#"<div style="font-family:sans-serif;max-width:600px;margin:0 auto;color:#1a1a1a;">
  <div style="background:#16a34a;padding:24px;border-radius:12px 12px 0 0;">
    <h1 style="color:white;margin:0;font-size:20px;">🌅 Good morning, {first_name}!</h1>
    <p style="color:#bbf7d0;margin:4px 0 0;">Here's your daily nutrition plan reminder</p>
  </div>
  <div style="background:#f9fafb;padding:24px;border-radius:0 0 12px 12px;border:1px solid #e5e7eb;">
    <h2 style="color:#111827;margin:0 0 4px;">{title}</h2>
    <p style="color:#6b7280;font-size:14px;margin:0 0 16px;">Overall progress: <strong style="color:#16a34a;">{progress}%</strong></p>
    <div style="background:#e5e7eb;border-radius:999px;height:12px;margin-bottom:24px;">
      <div style="background:#16a34a;height:12px;border-radius:999px;width:{progress}%;"></div>
    </div>
    <h3 style="color:#111827;margin:0 0 8px;">✅ Completed So Far</h3>
    <ul style="margin:0 0 20px;padding-left:16px;">{completed_items}</ul>
    <h3 style="color:#111827;margin:0 0 8px;">📋 Today's Tasks</h3>
    <ul style="margin:0 0 20px;padding-left:16px;">{pending_items}</ul>
    <div style="background:white;border:1px solid #e5e7eb;border-radius:8px;padding:16px;text-align:center;">
      <p style="margin:0;color:#374151;">Don't forget to log your meals today! 🥗</p>
    </div>
    <p style="color:#9ca3af;font-size:12px;margin-top:24px;border-top:1px solid #e5e7eb;padding-top:16px;">
      This is an automated reminder from your Nutrition Consultant App.
    </p>
  </div>
</div>"#,
        first_name = escape_html(first_name),
    );

    EmailMessage {
        subject: format!("🌅 Daily Reminder: {} — {}% complete", plan.title, progress),
        html,
    }
}

fn pending_item(task: &ActionPlanTask) -> String {
    let description = if task.description.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<br><span style="font-size:11px;color:#9ca3af;">{}</span>"#,
            escape_html(task.description.trim())
        )
    };
    format!(
        r#"<li style="padding:4px 0;color:#374151;">⬜ {} {}{}</li>"#,
        task.category.icon(),
        escape_html(&task.title),
        description
    )
}

/// One reminder per active plan; completed and archived plans are skipped.
pub fn compose_reminders(targets: &[ReminderTarget]) -> Vec<OutgoingEmail> {
    targets
        .iter()
        .filter(|t| t.plan.is_active())
        .map(|t| {
            let EmailMessage { subject, html } = build_reminder_email(&t.recipient_name, &t.plan);
            OutgoingEmail {
                to: t.recipient_email.clone(),
                subject,
                html,
            }
        })
        .collect()
}
