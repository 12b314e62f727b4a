//! Signup field names and the values the user has typed.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// One of the six inputs on the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Account name, required.
    Username,
    /// Contact address, required and structurally checked.
    Email,
    /// Password, at least eight characters.
    Password,
    /// Must repeat the password exactly. Never sent to the server.
    ConfirmPassword,
    /// Optional given name.
    FirstName,
    /// Optional family name.
    LastName,
}

impl Field {
    /// All fields, in the order the form renders them.
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Username,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Returns the wire name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Current values of every signup field.
///
/// Every field always has a value; a blank input is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    first_name: String,
    last_name: String,
}

impl FieldSet {
    /// Creates a field set with every value empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
        }
    }

    /// Sets the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
        };
        *slot = value.into();
    }

    /// Builder method to set a field.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Resets every value to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether every value is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Returns an iterator over `(field, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
