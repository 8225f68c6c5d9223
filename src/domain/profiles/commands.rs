//! Commands and queries of the profiles context.

use crate::domain::foundation::ProfileId;

/// Command to create a new profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProfileCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub number: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Query for a single profile by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProfileByIdQuery {
    pub profile_id: ProfileId,
}

/// Query for the profile registered under an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProfileByEmailQuery {
    pub email: String,
}

/// Query for every profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllProfilesQuery;
