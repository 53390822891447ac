//! Customer and Guarantor Creation

use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::forms::{NewCustomer, NewGuarantor};
use crate::models::Person;

use super::{post_json, Accepted, ServerReply};

#[derive(Debug, Deserialize)]
pub struct CustomerBody {
    pub customer: Person,
}

#[derive(Debug, Deserialize)]
pub struct GuarantorBody {
    pub guarantor: Person,
}

pub async fn create_customer(
    config: &AppConfig,
    customer: &NewCustomer,
) -> Result<Accepted<Person>, ApiError> {
    let reply: ServerReply<CustomerBody> =
        post_json(config, &config.create_customer_url(), customer).await?;
    let accepted = reply.into_result()?;
    Ok(Accepted {
        message: accepted.message,
        body: accepted.body.customer,
    })
}

pub async fn create_guarantor(
    config: &AppConfig,
    guarantor: &NewGuarantor,
) -> Result<Accepted<Person>, ApiError> {
    let reply: ServerReply<GuarantorBody> =
        post_json(config, &config.create_guarantor_url(), guarantor).await?;
    let accepted = reply.into_result()?;
    Ok(Accepted {
        message: accepted.message,
        body: accepted.body.guarantor,
    })
}
