//! Form Validation
//!
//! Client-side checks run before any request is issued.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Field, FieldErrors};
use crate::models::{parse_iso_date, ItemDraft, ItemForm, LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.insert(Field::Email, "Please enter your email.");
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, "Email format is invalid.");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert(Field::Password, "Please enter your password.");
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert(Field::Password, "Please enter a password.");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                Field::Password,
                format!("Password must be at least {} characters.", MIN_PASSWORD_LEN),
            );
        }

        if self.confirm_password.is_empty() {
            errors.insert(Field::ConfirmPassword, "Please confirm your password.");
        } else if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, "Passwords do not match.");
        }

        if self.name.is_empty() {
            errors.insert(Field::Name, "Please enter your name.");
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
        })
    }
}

/// Check an add/edit draft and build the request payload
pub fn validate_item(draft: &ItemDraft) -> Result<ItemForm, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Please enter a name.");
    }
    let added_date = parse_iso_date(&draft.added_date);
    if added_date.is_none() {
        errors.insert(Field::AddedDate, "Please pick the date added.");
    }
    let expiry_date = parse_iso_date(&draft.expiry_date);
    if expiry_date.is_none() {
        errors.insert(Field::ExpiryDate, "Please pick the expiry date.");
    }
    let note = draft.note.trim();
    if note.is_empty() {
        errors.insert(Field::Note, "Please enter a note.");
    }

    match (added_date, expiry_date) {
        (Some(added_date), Some(expiry_date)) if errors.is_empty() => Ok(ItemForm {
            name: name.to_string(),
            category: draft.category.clone(),
            added_date,
            expiry_date,
            description: note.to_string(),
            memo: note.to_string(),
        }),
        _ => Err(errors),
    }
}
