//! Profile aggregate.
//!
//! A profile owns a person's name, email and postal address. The identity is
//! assigned by storage when the profile is first added.

use crate::domain::foundation::{ProfileId, Timestamp, ValidationError};

use super::commands::CreateProfileCommand;
use super::value_objects::{EmailAddress, PersonName, StreetAddress};

/// Profile aggregate root.
///
/// # Invariants
///
/// - every value object passed validation
/// - `id` is unassigned until the profile has been persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    id: ProfileId,
    name: PersonName,
    email: EmailAddress,
    address: StreetAddress,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Profile {
    /// Creates a transient profile from raw fields.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised by the value objects.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        street: &str,
        number: &str,
        city: &str,
        postal_code: &str,
        country: &str,
    ) -> Result<Self, ValidationError> {
        let now = Timestamp::now();
        Ok(Self {
            id: ProfileId::default(),
            name: PersonName::new(first_name, last_name)?,
            email: EmailAddress::new(email)?,
            address: StreetAddress::new(street, number, city, postal_code, country)?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a transient profile from a create command.
    pub fn from_command(cmd: &CreateProfileCommand) -> Result<Self, ValidationError> {
        Self::new(
            &cmd.first_name,
            &cmd.last_name,
            &cmd.email,
            &cmd.street,
            &cmd.number,
            &cmd.city,
            &cmd.postal_code,
            &cmd.country,
        )
    }

    /// Reconstitute a profile from persistence (no validation).
    pub fn reconstitute(
        id: ProfileId,
        name: PersonName,
        email: EmailAddress,
        address: StreetAddress,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            address,
            created_at,
            updated_at,
        }
    }

    /// Returns the profile with its storage-assigned identity.
    pub fn with_id(mut self, id: ProfileId) -> Self {
        self.id = id;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn address(&self) -> &StreetAddress {
        &self.address
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Computed properties
    // ─────────────────────────────────────────────────────────────────────────

    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    pub fn email_address(&self) -> &str {
        self.email.address()
    }

    pub fn street_address(&self) -> String {
        self.address.full_address()
    }
}
