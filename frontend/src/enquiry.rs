use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{info, warn};
use thiserror::Error;
use yew::prelude::Reducible;

use crate::config;

const GREETING: [&str; 3] = ["Hi There,", "New Jewellery Enquiry", ""];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnquiryField {
    Name,
    Email,
    Phone,
    JewelleryType,
    Budget,
    Message,
}

impl EnquiryField {
    /// Message order, which is also the order fields appear on the form.
    pub const ALL: [EnquiryField; 6] = [
        EnquiryField::Name,
        EnquiryField::Email,
        EnquiryField::Phone,
        EnquiryField::JewelleryType,
        EnquiryField::Budget,
        EnquiryField::Message,
    ];

    /// The `name` attribute carried by the form control.
    pub fn key(self) -> &'static str {
        match self {
            EnquiryField::Name => "name",
            EnquiryField::Email => "email",
            EnquiryField::Phone => "phone",
            EnquiryField::JewelleryType => "jewelleryType",
            EnquiryField::Budget => "budget",
            EnquiryField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnquiryField::Name => "Name",
            EnquiryField::Email => "Email",
            EnquiryField::Phone => "Phone",
            EnquiryField::JewelleryType => "Jewellery Type",
            EnquiryField::Budget => "Budget",
            EnquiryField::Message => "Message",
        }
    }
}

impl fmt::Display for EnquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnquiryField {
    type Err = EnquiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnquiryField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| EnquiryError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnquiryError {
    #[error("unknown enquiry field `{0}`")]
    UnknownField(String),
    #[error("Please fill in: {}", join_labels(.missing))]
    Validation { missing: Vec<EnquiryField> },
}

fn join_labels(fields: &[EnquiryField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hands a finished deep link to whatever can open it.
pub trait LinkOpener {
    fn open_in_new_tab(&self, url: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub jewellery_type: String,
    pub budget: String,
    pub message: String,
}

impl EnquiryForm {
    pub fn get(&self, field: EnquiryField) -> &str {
        match field {
            EnquiryField::Name => &self.name,
            EnquiryField::Email => &self.email,
            EnquiryField::Phone => &self.phone,
            EnquiryField::JewelleryType => &self.jewellery_type,
            EnquiryField::Budget => &self.budget,
            EnquiryField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: EnquiryField, value: String) {
        let slot = match field {
            EnquiryField::Name => &mut self.name,
            EnquiryField::Email => &mut self.email,
            EnquiryField::Phone => &mut self.phone,
            EnquiryField::JewelleryType => &mut self.jewellery_type,
            EnquiryField::Budget => &mut self.budget,
            EnquiryField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Replaces one field by its control name. Values are stored as typed.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), EnquiryError> {
        let field: EnquiryField = name.parse()?;
        self.set(field, value.into());
        Ok(())
    }

    /// Same rule as a browser's `required`: only an empty value is missing.
    pub fn missing_fields(&self) -> Vec<EnquiryField> {
        EnquiryField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), EnquiryError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EnquiryError::Validation { missing })
        }
    }

    /// Plain-text message, before any URL encoding.
    pub fn message_text(&self) -> String {
        GREETING
            .iter()
            .map(|line| line.to_string())
            .chain(
                EnquiryField::ALL
                    .iter()
                    .map(|field| format!("{}: {}", field.label(), self.get(*field))),
            )
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn deep_link(&self, destination: &str) -> String {
        format!(
            "{}/{}?text={}",
            config::WHATSAPP_BASE_URL,
            destination,
            urlencoding::encode(&self.message_text())
        )
    }

    /// Validates the snapshot, builds the WhatsApp link and opens it.
    pub fn submit(&self, opener: &impl LinkOpener) -> Result<String, EnquiryError> {
        if let Err(e) = self.validate() {
            warn!("Enquiry rejected: {}", e);
            return Err(e);
        }
        let link = self.deep_link(config::WHATSAPP_NUMBER);
        info!(
            "Sending enquiry via WhatsApp (type: {}, budget: {})",
            self.jewellery_type, self.budget
        );
        opener.open_in_new_tab(&link);
        Ok(link)
    }
}

/// One keystroke's worth of change, keyed by the control's `name`.
pub struct FieldUpdate {
    pub name: String,
    pub value: String,
}

impl Reducible for EnquiryForm {
    type Action = FieldUpdate;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match form.update_field(&action.name, action.value) {
            Ok(()) => form.into(),
            Err(e) => {
                warn!("Ignoring form input: {}", e);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open_in_new_tab(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    fn asha() -> EnquiryForm {
        EnquiryForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            jewellery_type: "Ring".into(),
            budget: "30k-70k".into(),
            message: "Need size 7".into(),
        }
    }

    fn decoded_text(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").expect("link has a text parameter");
        urlencoding::decode(encoded).expect("valid utf-8").into_owned()
    }

    #[test]
    fn update_field_touches_only_the_named_field() {
        let mut form = EnquiryForm::default();
        form.update_field("name", "Asha").unwrap();
        form.update_field("budget", "1L+").unwrap();
        form.update_field("name", "Asha Rao").unwrap();

        assert_eq!(form.name, "Asha Rao");
        assert_eq!(form.budget, "1L+");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let mut once = EnquiryForm::default();
        once.update_field("name", "Asha").unwrap();
        let mut twice = once.clone();
        twice.update_field("name", "Asha").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_field_is_rejected_without_changes() {
        let mut form = asha();
        let err = form.update_field("favouriteColour", "gold").unwrap_err();
        assert_eq!(err, EnquiryError::UnknownField("favouriteColour".into()));
        assert_eq!(form, asha());
    }

    #[test]
    fn field_keys_parse_back() {
        for field in EnquiryField::ALL {
            assert_eq!(field.key().parse::<EnquiryField>(), Ok(field));
        }
        assert!("JewelleryType".parse::<EnquiryField>().is_err());
    }

    #[test]
    fn reducer_applies_partial_updates() {
        let form = Rc::new(asha());
        let next = form.clone().reduce(FieldUpdate {
            name: "message".into(),
            value: "Need size 8".into(),
        });
        assert_eq!(next.message, "Need size 8");
        assert_eq!(next.name, form.name);
        assert_eq!(form.message, "Need size 7");
    }

    #[test]
    fn reducer_keeps_state_on_unknown_field() {
        let form = Rc::new(asha());
        let next = form.clone().reduce(FieldUpdate {
            name: "coupon".into(),
            value: "GOLD10".into(),
        });
        assert!(Rc::ptr_eq(&form, &next));
    }

    #[test]
    fn message_matches_template() {
        assert_eq!(
            asha().message_text(),
            "Hi There,\nNew Jewellery Enquiry\n\nName: Asha Rao\nEmail: asha@example.com\nPhone: 9876543210\nJewellery Type: Ring\nBudget: 30k-70k\nMessage: Need size 7"
        );
    }

    #[test]
    fn submit_opens_whatsapp_link() {
        let opener = RecordingOpener::default();
        let link = asha().submit(&opener).unwrap();

        assert!(link.starts_with("https://wa.me/917568387383?text="));
        assert_eq!(opener.opened.borrow().as_slice(), [link.clone()]);
        assert_eq!(decoded_text(&link), asha().message_text());
    }

    #[test]
    fn newlines_are_encoded_as_0a() {
        let link = asha().deep_link(config::WHATSAPP_NUMBER);
        assert!(link.contains("Hi%20There%2C%0ANew%20Jewellery%20Enquiry%0A%0AName%3A%20Asha%20Rao"));
        assert!(!link.contains('\n'));
        assert!(!link.contains(' '));
    }

    #[test]
    fn reserved_characters_survive_round_trip() {
        let mut form = asha();
        form.message = "50% off? A&B #7\nsecond line + more=yes".into();
        let link = form.deep_link(config::WHATSAPP_NUMBER);

        let query = link.split_once("?text=").unwrap().1;
        assert!(!query.contains('&'));
        assert!(!query.contains('#'));
        assert_eq!(decoded_text(&link), form.message_text());
    }

    #[test]
    fn non_ascii_and_query_syntax_survive_round_trip() {
        let mut form = asha();
        form.budget = "₹ 1L+".into();
        form.message = "💍 naïve %0A &text=x".into();
        let link = form.deep_link(config::WHATSAPP_NUMBER);

        assert_eq!(link.matches("text=").count(), 1);
        assert!(link.is_ascii());
        assert_eq!(decoded_text(&link), form.message_text());
    }

    #[test]
    fn submit_is_deterministic() {
        let opener = RecordingOpener::default();
        let first = asha().submit(&opener).unwrap();
        let second = asha().submit(&opener).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn submit_with_blank_fields_names_them() {
        let opener = RecordingOpener::default();
        let mut form = asha();
        form.phone.clear();
        form.budget.clear();

        let err = form.submit(&opener).unwrap_err();
        assert_eq!(
            err,
            EnquiryError::Validation {
                missing: vec![EnquiryField::Phone, EnquiryField::Budget]
            }
        );
        assert_eq!(err.to_string(), "Please fill in: Phone, Budget");
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn whitespace_only_values_still_count_as_filled() {
        let opener = RecordingOpener::default();
        let mut form = asha();
        form.message = " ".into();

        assert!(form.missing_fields().is_empty());
        let link = form.submit(&opener).unwrap();
        assert!(link.ends_with("Message%3A%20%20"));
        assert_eq!(opener.opened.borrow().len(), 1);
    }
}
