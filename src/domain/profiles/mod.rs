//! Profiles bounded context.
//!
//! A profile describes a platform user: name, email and postal address.

mod aggregate;
mod commands;
mod errors;
mod value_objects;

pub use aggregate::Profile;
pub use commands::{
    CreateProfileCommand, GetAllProfilesQuery, GetProfileByEmailQuery, GetProfileByIdQuery,
};
pub use errors::ProfileError;
pub use value_objects::{EmailAddress, PersonName, StreetAddress};
