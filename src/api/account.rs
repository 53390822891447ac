//! Account Creation

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::forms::AccountDraft;

use super::{post_json, Accepted, NoBody, ServerReply};

/// Submit an account draft; the reply carries only a message
pub async fn create_account(
    config: &AppConfig,
    draft: &AccountDraft,
) -> Result<Accepted<()>, ApiError> {
    let reply: ServerReply<NoBody> = post_json(config, &config.create_account_url(), draft).await?;
    let accepted = reply.into_result()?;
    Ok(Accepted {
        message: accepted.message,
        body: (),
    })
}
