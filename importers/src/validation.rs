use regex::Regex;
use shared_types::Contact;

/// Per-field validation rules for imported contact rows, matching what the
/// import wizard enforces before letting a row through.
pub struct ContactValidator {
    email_re: Regex,
    phone_re: Regex,
    name_re: Regex,
}

impl ContactValidator {
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap(),
            phone_re: Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap(),
            name_re: Regex::new(r"^[a-zA-Z\s\-'.]+$").unwrap(),
        }
    }

    /// All validation errors for one contact row, empty when the row is good.
    pub fn validate(&self, contact: &Contact) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(err) = self.validate_name(&contact.first_name, "First name") {
            errors.push(err);
        }
        if let Some(err) = self.validate_name(&contact.last_name, "Last name") {
            errors.push(err);
        }
        if let Some(err) = self.validate_email(contact.email.as_deref().unwrap_or("")) {
            errors.push(err);
        }
        if let Some(err) = self.validate_phone(contact.phone.as_deref().unwrap_or("")) {
            errors.push(err);
        }
        if let Some(err) = self.validate_company(contact.company.as_deref().unwrap_or("")) {
            errors.push(err);
        }

        errors
    }

    pub fn validate_email(&self, email: &str) -> Option<String> {
        let email = email.trim();
        if email.is_empty() {
            return Some("Email is required".to_string());
        }
        if !self.email_re.is_match(email) {
            return Some("Invalid email format".to_string());
        }
        if email.len() > 100 {
            return Some("Email too long".to_string());
        }
        None
    }

    /// Phone is optional; when present it must clean up to at least ten
    /// digits with an optional leading `+`.
    pub fn validate_phone(&self, phone: &str) -> Option<String> {
        let phone = phone.trim();
        if phone.is_empty() {
            return None;
        }
        let cleaned: String = phone
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        if !self.phone_re.is_match(&cleaned) {
            return Some("Invalid phone format".to_string());
        }
        if cleaned.trim_start_matches('+').len() < 10 {
            return Some("Phone number too short".to_string());
        }
        None
    }

    pub fn validate_name(&self, name: &str, field_label: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return Some(format!("{} is required", field_label));
        }
        if name.len() < 2 {
            return Some(format!("{} must be at least 2 characters", field_label));
        }
        if name.len() > 50 {
            return Some(format!("{} is too long", field_label));
        }
        if !self.name_re.is_match(name) {
            return Some(format!("{} contains invalid characters", field_label));
        }
        None
    }

    pub fn validate_company(&self, company: &str) -> Option<String> {
        let company = company.trim();
        if !company.is_empty() && company.len() > 100 {
            return Some("Company name is too long".to_string());
        }
        None
    }
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new()
    }
}
