//! Form Payloads
//!
//! Request bodies for the four create flows, with required-field checks.

use serde::Serialize;

use crate::error::ApiError;

/// A submittable form body
pub trait FormPayload: Serialize {
    /// Required fields in check order, as (wire name, value)
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// First empty required field aborts the submission
    fn validate(&self) -> Result<(), ApiError> {
        match first_missing_field(&self.required_fields()) {
            Some(field) => Err(ApiError::MissingField(field)),
            None => Ok(()),
        }
    }
}

pub fn first_missing_field(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub occupation: String,
    pub age: String,
    pub guardian_type: String,
    pub guardian_name: String,
    pub location_mark: String,
}

impl FormPayload for NewCustomer {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewGuarantor {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub occupation: String,
}

impl FormPayload for NewGuarantor {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
        ]
    }
}

/// Account draft as collected from the account form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDraft {
    pub account_number: String,
    pub sale_date: String,
    pub customer_uid: String,
    pub first_guarantor_uid: String,
    pub second_guarantor_uid: String,
    pub product_category: String,
    pub selected_model: String,
    pub cash_value: String,
    pub hire_value: String,
    pub down_payment: String,
    pub monthly_payment: String,
    pub length: String,
}

impl FormPayload for AccountDraft {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("accountNumber", self.account_number.as_str()),
            ("saleDate", self.sale_date.as_str()),
            ("customerUid", self.customer_uid.as_str()),
            ("firstGuarantorUid", self.first_guarantor_uid.as_str()),
            ("secondGuarantorUid", self.second_guarantor_uid.as_str()),
            ("productCategory", self.product_category.as_str()),
            ("selectedModel", self.selected_model.as_str()),
            ("cashValue", self.cash_value.as_str()),
            ("hireValue", self.hire_value.as_str()),
            ("downPayment", self.down_payment.as_str()),
            ("monthlyPayment", self.monthly_payment.as_str()),
            ("length", self.length.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub amount: String,
    pub receipt_id: String,
    pub date: String,
}

impl FormPayload for NewPayment {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("amount", self.amount.as_str()),
            ("receiptId", self.receipt_id.as_str()),
            ("date", self.date.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> AccountDraft {
        AccountDraft {
            account_number: "A-1001".into(),
            sale_date: "2025-01-15".into(),
            customer_uid: "1000001".into(),
            first_guarantor_uid: "5000001".into(),
            second_guarantor_uid: "5000002".into(),
            product_category: "Television".into(),
            selected_model: "Walton 32 LED".into(),
            cash_value: "30000".into(),
            hire_value: "36000".into(),
            down_payment: "6000".into(),
            monthly_payment: "2500".into(),
            length: "12".into(),
        }
    }

    #[test]
    fn test_complete_account_draft_passes() {
        assert_eq!(complete_draft().validate(), Ok(()));
    }

    #[test]
    fn test_empty_cash_value_is_named() {
        let draft = AccountDraft {
            cash_value: String::new(),
            ..complete_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err, ApiError::MissingField("cashValue"));
        assert_eq!(err.to_string(), "Please fill in the \"cashValue\" field.");
    }

    #[test]
    fn test_each_single_missing_account_field_is_reported() {
        let names: Vec<&'static str> = complete_draft()
            .required_fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names.len(), 12);

        for name in names {
            let mut draft = complete_draft();
            match name {
                "accountNumber" => draft.account_number.clear(),
                "saleDate" => draft.sale_date.clear(),
                "customerUid" => draft.customer_uid.clear(),
                "firstGuarantorUid" => draft.first_guarantor_uid.clear(),
                "secondGuarantorUid" => draft.second_guarantor_uid.clear(),
                "productCategory" => draft.product_category.clear(),
                "selectedModel" => draft.selected_model.clear(),
                "cashValue" => draft.cash_value.clear(),
                "hireValue" => draft.hire_value.clear(),
                "downPayment" => draft.down_payment.clear(),
                "monthlyPayment" => draft.monthly_payment.clear(),
                "length" => draft.length.clear(),
                other => panic!("unexpected field {}", other),
            }
            assert_eq!(draft.validate(), Err(ApiError::MissingField(name)));
        }
    }

    #[test]
    fn test_first_empty_field_wins() {
        let draft = AccountDraft {
            account_number: String::new(),
            length: String::new(),
            ..complete_draft()
        };
        assert_eq!(draft.validate(), Err(ApiError::MissingField("accountNumber")));
    }

    #[test]
    fn test_account_draft_serializes_camel_case() {
        let json = serde_json::to_value(complete_draft()).unwrap();
        assert_eq!(json["cashValue"], "30000");
        assert_eq!(json["firstGuarantorUid"], "5000001");
        assert_eq!(json["selectedModel"], "Walton 32 LED");
    }

    #[test]
    fn test_customer_optional_fields_are_not_required() {
        let customer = NewCustomer {
            name: "Jane Doe".into(),
            phone: "+8801700000000".into(),
            address: "Mirpur".into(),
            ..NewCustomer::default()
        };
        assert_eq!(customer.validate(), Ok(()));

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["guardianType"], "");
        assert_eq!(json["locationMark"], "");
    }

    #[test]
    fn test_payment_requires_receipt() {
        let payment = NewPayment {
            amount: "2500".into(),
            receipt_id: String::new(),
            date: "2025-02-01".into(),
        };
        assert_eq!(payment.validate(), Err(ApiError::MissingField("receiptId")));
    }
}
