//! Mock contact form. Nothing is sent anywhere.

use std::time::Duration;

/// How long the "Message Sent" confirmation stays up
pub const CONFIRMATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Phone is the only optional field
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDesk {
    pub form: ContactForm,
    submitted: bool,
}

impl ContactDesk {
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Shows the confirmation. Returns how long to wait before calling
    /// [`ContactDesk::acknowledge`], or `None` if required fields are empty.
    pub fn submit(&mut self) -> Option<Duration> {
        if !self.form.is_complete() {
            return None;
        }
        self.submitted = true;
        Some(CONFIRMATION_DURATION)
    }

    /// Hides the confirmation and clears the form
    pub fn acknowledge(&mut self) {
        self.submitted = false;
        self.form = ContactForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ContactForm {
        ContactForm {
            name: "Anaga".into(),
            email: "anaga@example.com".into(),
            phone: String::new(),
            subject: "Pricing".into(),
            message: "How are prices updated?".into(),
        }
    }

    #[test]
    fn test_submit_then_acknowledge() {
        let mut desk = ContactDesk { form: complete_form(), ..Default::default() };
        assert_eq!(desk.submit(), Some(CONFIRMATION_DURATION));
        assert!(desk.is_submitted());

        desk.acknowledge();
        assert!(!desk.is_submitted());
        assert_eq!(desk.form, ContactForm::default());
    }

    #[test]
    fn test_incomplete_form_is_not_submitted() {
        let mut form = complete_form();
        form.subject = String::new();
        let mut desk = ContactDesk { form, ..Default::default() };
        assert_eq!(desk.submit(), None);
        assert!(!desk.is_submitted());
    }

    #[test]
    fn test_whitespace_fields_count_as_filled() {
        let mut form = complete_form();
        form.message = "   ".into();
        assert!(form.is_complete());

        let mut desk = ContactDesk { form, ..Default::default() };
        assert_eq!(desk.submit(), Some(CONFIRMATION_DURATION));
    }
}
