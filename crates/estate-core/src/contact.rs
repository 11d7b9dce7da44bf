//! Contact Form
//!
//! Local validation and a simulated submission lifecycle. Nothing here sends
//! a request; the caller decides how long "submitting" lasts.

use crate::error::ContactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Message,
}

impl ContactError {
    /// Field the problem is shown under
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::MissingName => ContactField::Name,
            ContactError::MissingContactRoute | ContactError::InvalidPhone => ContactField::Phone,
            ContactError::InvalidEmail => ContactField::Email,
            ContactError::MissingMessage => ContactField::Message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

fn is_valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    allowed && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let labels: Vec<&str> = domain.split('.').collect();
    !local.is_empty() && labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// All problems at once, in field order
    pub fn validate(&self) -> Vec<ContactError> {
        let mut errors = Vec::new();
        let phone = self.phone.trim();
        let email = self.email.trim();

        if self.name.trim().is_empty() {
            errors.push(ContactError::MissingName);
        }
        if phone.is_empty() && email.is_empty() {
            errors.push(ContactError::MissingContactRoute);
        }
        if !phone.is_empty() && !is_valid_phone(phone) {
            errors.push(ContactError::InvalidPhone);
        }
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(ContactError::MissingMessage);
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Sent,
    Rejected(Vec<ContactError>),
}

/// Form contents plus where the submission currently stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    pub form: ContactForm,
    pub state: SubmissionState,
}

impl ContactSession {
    /// Editing after a result drops the result
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
        if matches!(self.state, SubmissionState::Sent | SubmissionState::Rejected(_)) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Returns true when the caller should go on to `complete`
    pub fn submit(&mut self) -> bool {
        if self.state == SubmissionState::Submitting {
            return false;
        }
        let errors = self.form.validate();
        if errors.is_empty() {
            self.state = SubmissionState::Submitting;
            true
        } else {
            log::info!("[Contact] rejected with {} problem(s)", errors.len());
            self.state = SubmissionState::Rejected(errors);
            false
        }
    }

    /// Finishes a pending submission and clears the form
    pub fn complete(&mut self) {
        if self.state == SubmissionState::Submitting {
            self.form = ContactForm::default();
            self.state = SubmissionState::Sent;
        }
    }

    pub fn error_for(&self, field: ContactField) -> Option<ContactError> {
        match &self.state {
            SubmissionState::Rejected(errors) => errors.iter().copied().find(|e| e.field() == field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha Patnaik".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "asha@example.in".to_string(),
            message: "Looking for a 3BHK in Civil Township".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_problem() {
        let errors = ContactForm::default().validate();
        assert_eq!(
            errors,
            vec![
                ContactError::MissingName,
                ContactError::MissingContactRoute,
                ContactError::MissingMessage,
            ]
        );
    }

    #[test]
    fn test_one_contact_route_is_enough() {
        let mut form = filled();
        form.phone.clear();
        assert!(form.validate().is_empty());

        let mut form = filled();
        form.email = "   ".to_string();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+91 (98765) 43-210"));
        assert!(!is_valid_phone("98765"));
        assert!(!is_valid_phone("98765x43210"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b..co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut session = ContactSession { form: filled(), ..Default::default() };
        assert!(session.submit());
        assert_eq!(session.state, SubmissionState::Submitting);
        assert!(!session.submit());

        session.complete();
        assert_eq!(session.state, SubmissionState::Sent);
        assert_eq!(session.form, ContactForm::default());

        session.edit(ContactField::Name, "R".to_string());
        assert_eq!(session.state, SubmissionState::Idle);
    }

    #[test]
    fn test_rejected_errors_map_to_fields() {
        let mut session = ContactSession::default();
        session.edit(ContactField::Email, "nope".to_string());
        assert!(!session.submit());
        assert_eq!(session.error_for(ContactField::Email), Some(ContactError::InvalidEmail));
        assert_eq!(session.error_for(ContactField::Name), Some(ContactError::MissingName));
        assert_eq!(session.error_for(ContactField::Phone), None);

        session.edit(ContactField::Name, "Ravi".to_string());
        assert_eq!(session.state, SubmissionState::Idle);
        assert_eq!(session.error_for(ContactField::Email), None);
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut session = ContactSession { form: filled(), ..Default::default() };
        session.complete();
        assert_eq!(session.state, SubmissionState::Idle);
        assert_eq!(session.form, filled());
    }
}
