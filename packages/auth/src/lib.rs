// ABOUTME: Postforge authentication library wrapping the external identity provider
// ABOUTME: The service only forwards account creation; login happens client-side

pub mod error;
pub mod identity;

pub use error::{AuthError, AuthResult};
pub use identity::{IdentityClient, SignupOutcome};
