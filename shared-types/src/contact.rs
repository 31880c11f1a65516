use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A contact record as exchanged with the application layer.
///
/// `id` is present for persisted contacts and absent for freshly parsed
/// import rows. Contacts are plain values; every operation on them produces
/// a new `Contact` rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Contact {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            company: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Display name used by list views.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_serializes_camel_case() {
        let contact = Contact::new("John", "Smith").with_email("john@example.com");
        let json = serde_json::to_string(&contact).unwrap();

        assert!(json.contains("\"firstName\":\"John\""));
        assert!(json.contains("\"lastName\":\"Smith\""));
        assert!(json.contains("\"email\":\"john@example.com\""));
        // Absent optional fields stay out of the payload.
        assert!(!json.contains("phone"));
        assert!(!json.contains("company"));
    }

    #[test]
    fn test_contact_roundtrip() {
        let contact = Contact::new("Jane", "Doe")
            .with_id("42")
            .with_phone("555-123-4567")
            .with_company("Acme Corp");

        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Contact::new("Jane", "Doe").full_name(), "Jane Doe");
    }
}
