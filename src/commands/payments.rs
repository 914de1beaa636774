//! Payments screen commands.
//!
//! `visit_id` is stored as given; it is not checked against the visits
//! collection.

use serde::{Deserialize, Serialize};

use crate::core_state::CoreState;
use crate::models::{Payment, PaymentPatch};
use crate::store::SelectOption;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentForm {
    pub id: String,
    pub patient: String,
    pub visit_id: String,
    pub amount: f64,
    #[serde(default)]
    pub date: Option<String>,
}

pub fn list_payments(state: &CoreState) -> Result<Vec<Payment>, String> {
    super::list_records(state)
}

pub fn search_payments(query: &str, state: &CoreState) -> Result<Vec<Payment>, String> {
    super::search_records(query, state)
}

pub fn get_payment(id: &str, state: &CoreState) -> Result<Payment, String> {
    super::get_record(id, state)
}

pub fn add_payment(form: PaymentForm, state: &CoreState) -> Result<Payment, String> {
    let date = super::date_or_today(form.date.as_deref());
    let record = Payment::new(
        &form.id,
        &form.patient,
        &form.visit_id,
        form.amount,
        &date,
    );
    super::add_record(record, state)
}

pub fn update_payment(id: &str, patch: PaymentPatch, state: &CoreState) -> Result<Payment, String> {
    super::update_record(id, patch, state)
}

pub fn delete_payment(id: &str, state: &CoreState) -> Result<Payment, String> {
    super::delete_record(id, state)
}

pub fn payment_options(state: &CoreState) -> Result<Vec<SelectOption>, String> {
    super::record_options::<Payment>(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::logged_in_state;

    fn pay1() -> PaymentForm {
        PaymentForm {
            id: "PAY1".into(),
            patient: "Amal".into(),
            visit_id: "V1".into(),
            amount: 150.0,
            date: Some("2024-01-01".into()),
        }
    }

    #[test]
    fn update_amount_then_find() {
        let state = logged_in_state();
        add_payment(pay1(), &state).unwrap();
        let patch = PaymentPatch {
            amount: Some(200.0),
            ..Default::default()
        };
        update_payment("PAY1", patch, &state).unwrap();
        assert_eq!(get_payment("PAY1", &state).unwrap().amount, 200.0);
    }

    #[test]
    fn delete_on_empty_payments() {
        let state = logged_in_state();
        let err = delete_payment("PAY1", &state).unwrap_err();
        assert_eq!(err, "Payment not found: PAY1");
        assert!(list_payments(&state).unwrap().is_empty());
    }

    #[test]
    fn unknown_visit_id_is_stored() {
        let state = logged_in_state();
        let p = add_payment(
            PaymentForm {
                visit_id: "NO-SUCH-VISIT".into(),
                ..pay1()
            },
            &state,
        )
        .unwrap();
        assert_eq!(p.visit_id, "NO-SUCH-VISIT");
    }

    #[test]
    fn search_matches_visit_id_ignoring_case() {
        let state = logged_in_state();
        add_payment(pay1(), &state).unwrap();
        add_payment(
            PaymentForm {
                id: "PAY2".into(),
                patient: "Jane Doe".into(),
                visit_id: "V17".into(),
                ..pay1()
            },
            &state,
        )
        .unwrap();

        let hits = search_payments("v17", &state).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "PAY2");

        let by_patient = search_payments("AMAL", &state).unwrap();
        assert_eq!(by_patient.len(), 1);
        assert_eq!(by_patient[0].id, "PAY1");
        assert_eq!(search_payments("", &state).unwrap().len(), 2);
    }

    #[test]
    fn form_without_date_decodes() {
        let form: PaymentForm = serde_json::from_str(
            r#"{"id":"PAY2","patient":"Jane Doe","visit_id":"V1","amount":75.5}"#,
        )
        .unwrap();
        assert!(form.date.is_none());
        let state = logged_in_state();
        let p = add_payment(form, &state).unwrap();
        assert_eq!(p.patient, "Jane Doe");
        assert_eq!(p.amount, 75.5);
    }
}
