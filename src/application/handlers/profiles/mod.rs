//! Profile command and query handlers.

mod create_profile;
mod get_all_profiles;
mod get_profile_by_email;
mod get_profile_by_id;

pub use create_profile::CreateProfileHandler;
pub use get_all_profiles::GetAllProfilesHandler;
pub use get_profile_by_email::GetProfileByEmailHandler;
pub use get_profile_by_id::GetProfileByIdHandler;
