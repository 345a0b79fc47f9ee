use std::collections::HashMap;
use crate::errors::ReserveError;
use crate::helpers::escape::escape_html;

/// Required form fields, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["full_name", "phone", "tour", "date"];

/// Hidden input real visitors never fill in.
pub const HONEYPOT_FIELD: &str = "website";

/// One reservation request, alive only while it is being relayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationSubmission {
    pub full_name: String,
    pub phone: String,
    pub tour: String,
    pub date: String,
    pub submitted_at: Option<String>,
    pub page_url: Option<String>,
}

impl ReservationSubmission {
    pub fn is_bot(fields: &HashMap<String, String>) -> bool {
        fields
            .get(HONEYPOT_FIELD)
            .is_some_and(|value| !value.is_empty())
    }

    /// Renders the WhatsApp text. `now` stands in for a missing `submitted_at`.
    pub fn render_message(&self, now: &str) -> String {
        let submitted_at = self.submitted_at.as_deref().unwrap_or(now);
        let page_url = self.page_url.as_deref().unwrap_or_default();

        format!(
            "📩 *Yeni Rezervasyon Talebi*\n\
             👤 Ad Soyad: {}\n\
             📞 Telefon: {}\n\
             🛥\u{fe0f} Tur: {}\n\
             📅 Tarih: {}\n\
             \n\
             ⏱\u{fe0f} Gönderim: {}\n\
             🔗 Sayfa: {}",
            escape_html(&self.full_name),
            escape_html(&self.phone),
            escape_html(&self.tour),
            escape_html(&self.date),
            escape_html(submitted_at),
            escape_html(page_url),
        )
    }
}

fn required(
    fields: &HashMap<String, String>,
    name: &'static str,
) -> Result<String, ReserveError> {
    match fields.get(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(ReserveError::MissingField(name)),
    }
}

fn optional(fields: &HashMap<String, String>, name: &str) -> Option<String> {
    fields.get(name).filter(|value| !value.is_empty()).cloned()
}

impl TryFrom<&HashMap<String, String>> for ReservationSubmission {
    type Error = ReserveError;

    fn try_from(fields: &HashMap<String, String>) -> Result<Self, Self::Error> {
        let [full_name, phone, tour, date] = REQUIRED_FIELDS;

        Ok(Self {
            full_name: required(fields, full_name)?,
            phone: required(fields, phone)?,
            tour: required(fields, tour)?,
            date: required(fields, date)?,
            submitted_at: optional(fields, "submitted_at"),
            page_url: optional(fields, "page_url"),
        })
    }
}
