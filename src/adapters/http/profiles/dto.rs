//! Wire resources for profile endpoints and their assemblers.

use serde::{Deserialize, Serialize};

use crate::domain::profiles::{CreateProfileCommand, Profile};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/v1/profiles`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileResource {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub number: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl From<CreateProfileResource> for CreateProfileCommand {
    fn from(resource: CreateProfileResource) -> Self {
        CreateProfileCommand {
            first_name: resource.first_name,
            last_name: resource.last_name,
            email: resource.email,
            street: resource.street,
            number: resource.number,
            city: resource.city,
            postal_code: resource.postal_code,
            country: resource.country,
        }
    }
}

/// Query string of `GET /api/v1/profiles`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSearchParams {
    pub email: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResource {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub street_address: String,
}

impl From<&Profile> for ProfileResource {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().value(),
            full_name: profile.full_name(),
            email: profile.email_address().to_string(),
            street_address: profile.street_address(),
        }
    }
}
