//! Payment Commands
//!
//! Records a payment against one account.

use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::forms::NewPayment;
use crate::models::PaymentRecord;

use super::{post_json, Accepted, ServerReply};

#[derive(Debug, Deserialize)]
pub struct PaymentBody {
    pub data: PaymentRecord,
}

pub async fn make_payment(
    config: &AppConfig,
    account_number: &str,
    payment: &NewPayment,
) -> Result<Accepted<PaymentRecord>, ApiError> {
    let url = config.make_payment_url(account_number);
    let reply: ServerReply<PaymentBody> = post_json(config, &url, payment).await?;
    let accepted = reply.into_result()?;
    Ok(Accepted {
        message: accepted.message,
        body: accepted.body.data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_payment_reply() {
        let json = r#"{"status":"success","message":"Payment recorded","data":{"paymentDate":"2025-02-01","receiptId":"R-778","paymentAmount":2500,"cashBalance":1000}}"#;
        let reply: ServerReply<PaymentBody> = serde_json::from_str(json).unwrap();
        let record = reply.into_result().unwrap().body.data;
        assert_eq!(record.receipt_id, "R-778");
        assert_eq!(record.payment_amount, 2500);
        assert_eq!(record.cash_balance, Some(1000));
    }
}
