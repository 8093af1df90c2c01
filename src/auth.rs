use crate::{error::AppError, models::UserRole};

pub fn ensure_signed_in(current: Option<UserRole>, message: &str) -> Result<UserRole, AppError> {
    current.ok_or_else(|| AppError::Unauthenticated(message.to_string()))
}

pub fn ensure_role(current: Option<UserRole>, role: UserRole) -> Result<(), AppError> {
    let current = ensure_signed_in(current, "You must be logged in")?;
    if current != role {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub fn ensure_admin(current: Option<UserRole>) -> Result<(), AppError> {
    ensure_role(current, UserRole::Admin)
}
