//! Value objects composing a profile.
//!
//! Each type validates its own fields on construction and is immutable
//! afterwards.

use std::fmt;

use validator::ValidateEmail;

use crate::domain::foundation::{require_non_empty, ValidationError};

/// A person's first and last name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    first_name: String,
    last_name: String,
}

impl PersonName {
    /// Creates a name, trimming both parts.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if either part is blank
    pub fn new(first_name: &str, last_name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: require_non_empty("first_name", first_name)?,
            last_name: require_non_empty("last_name", last_name)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates an email address.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if blank
    /// - `InvalidFormat` if not a valid address
    pub fn new(address: &str) -> Result<Self, ValidationError> {
        let address = require_non_empty("email", address)?;
        if !address.validate_email() {
            return Err(ValidationError::invalid_format(
                "email",
                format!("'{}' is not a valid email address", address),
            ));
        }
        Ok(Self(address))
    }

    pub fn address(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A postal street address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetAddress {
    street: String,
    number: String,
    city: String,
    postal_code: String,
    country: String,
}

impl StreetAddress {
    /// Creates a street address. Every part is required.
    pub fn new(
        street: &str,
        number: &str,
        city: &str,
        postal_code: &str,
        country: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            street: require_non_empty("street", street)?,
            number: require_non_empty("number", number)?,
            city: require_non_empty("city", city)?,
            postal_code: require_non_empty("postal_code", postal_code)?,
            country: require_non_empty("country", country)?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// `"{street} {number}, {city}, {postal_code}, {country}"`.
    pub fn full_address(&self) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.street, self.number, self.city, self.postal_code, self.country
        )
    }
}
