//! Pre-creation Data
//!
//! One-shot load of everything the account form selects from.

use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::PrecreationData;

use super::get_json;

/// `{success, data}` reply of the pre-creation endpoint
#[derive(Debug, Deserialize)]
struct PrecreationReply {
    success: bool,
    #[serde(default)]
    data: Option<PrecreationData>,
    #[serde(default)]
    message: Option<String>,
}

impl PrecreationReply {
    fn into_result(self) -> Result<PrecreationData, ApiError> {
        if !self.success {
            return Err(ApiError::Server(
                self.message.unwrap_or_else(|| "pre-creation data unavailable".to_string()),
            ));
        }
        Ok(self.data.unwrap_or_default())
    }
}

pub async fn fetch_precreation_data(config: &AppConfig) -> Result<PrecreationData, ApiError> {
    let reply: PrecreationReply = get_json(&config.precreation_url()).await?;
    reply.into_result()
}
