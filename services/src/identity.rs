//! Maps scanned card tokens and numeric ids to users.

use crate::error::CheckinError;
use db::models::user;
use sea_orm::ConnectionTrait;

pub const MIN_CARD_TOKEN_LEN: usize = 4;

/// Rejects tokens too short to be a real card read. Runs before any store access.
pub fn validate_card_token(card_token: &str) -> Result<&str, CheckinError> {
    let trimmed = card_token.trim();
    if trimmed.chars().count() < MIN_CARD_TOKEN_LEN {
        return Err(CheckinError::InvalidCardId);
    }
    Ok(trimmed)
}

/// Looks up the holder of `card_token`. `Ok(None)` means the card is unknown.
pub async fn resolve<C>(db: &C, card_token: &str) -> Result<Option<user::Model>, CheckinError>
where
    C: ConnectionTrait,
{
    let token = validate_card_token(card_token)?;
    Ok(user::Model::find_by_card_token(db, token).await?)
}

pub async fn find_user<C>(db: &C, user_id: i64) -> Result<user::Model, CheckinError>
where
    C: ConnectionTrait,
{
    user::Model::find_by_id(db, user_id)
        .await?
        .ok_or(CheckinError::UserNotFound)
}
