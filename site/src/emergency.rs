//! Emergency call link and information dialog.

use vet_model::messages::{
    EMERGENCY_CLOSE, EMERGENCY_CONTACT_LABEL, EMERGENCY_LEAD, EMERGENCY_SYMPTOMS, EMERGENCY_TITLE,
};

/// The hospital's emergency line.
pub const EMERGENCY_PHONE: &str = "0120-XXX-XXX";

/// Link that starts a call to the emergency line.
pub fn call_href() -> String {
    format!("tel:{}", EMERGENCY_PHONE)
}

/// Content of the emergency information dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyInfo {
    pub title: String,
    pub lead: String,
    pub symptoms: Vec<String>,
    pub contact: String,
    pub close_label: String,
}

impl EmergencyInfo {
    /// The dialog as published on the site.
    pub fn standard() -> Self {
        Self {
            title: EMERGENCY_TITLE.to_string(),
            lead: EMERGENCY_LEAD.to_string(),
            symptoms: EMERGENCY_SYMPTOMS.iter().map(|s| s.to_string()).collect(),
            contact: format!("{}{}", EMERGENCY_CONTACT_LABEL, EMERGENCY_PHONE),
            close_label: EMERGENCY_CLOSE.to_string(),
        }
    }

    /// Markup of the overlay. The close button carries `data-close` so the
    /// adapter can attach its handler.
    pub fn render_html(&self) -> String {
        let items: String = self
            .symptoms
            .iter()
            .map(|s| format!("<li>{}</li>", escape(s)))
            .collect();

        format!(
            concat!(
                r#"<div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; "#,
                r#"background: rgba(0, 0, 0, 0.8); z-index: 1002; display: flex; "#,
                r#"justify-content: center; align-items: center;">"#,
                r#"<div style="background: white; padding: 2rem; border-radius: 15px; "#,
                r#"max-width: 500px; width: 90%; text-align: center;">"#,
                r#"<h3 style="color: #f44336; margin-bottom: 1rem;">{title}</h3>"#,
                r#"<p style="margin-bottom: 1rem;">{lead}</p>"#,
                r#"<ul style="text-align: left; margin-bottom: 1rem;">{items}</ul>"#,
                r#"<div style="margin-bottom: 1rem;"><strong>{contact}</strong></div>"#,
                r#"<button data-close style="background: #4CAF50; color: white; border: none; "#,
                r#"padding: 0.5rem 1rem; border-radius: 5px; cursor: pointer;">{close}</button>"#,
                r#"</div></div>"#,
            ),
            title = escape(&self.title),
            lead = escape(&self.lead),
            items = items,
            contact = escape(&self.contact),
            close = escape(&self.close_label),
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
