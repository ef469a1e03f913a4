pub mod account;
pub mod genre;
pub mod health;
pub mod movie;
pub mod recommendation;
pub mod token;

use moviestream_auth_types::context::AuthContext;
use moviestream_domain::user::UserRole;

use crate::error::CatalogServiceError;

/// Require the ADMIN role. No role at all is 401, any other role is 403.
pub(crate) fn require_admin(ctx: &AuthContext) -> Result<(), CatalogServiceError> {
    let role = ctx.role.as_deref().ok_or(CatalogServiceError::Unauthorized)?;
    match UserRole::from_wire(role) {
        Some(UserRole::Admin) => Ok(()),
        _ => Err(CatalogServiceError::Forbidden),
    }
}
