use serde::{Deserialize, Serialize};

use super::{patch_text, trimmed, EntityKind, Record};

/// Amount bounds of the add-payment form. Not enforced by the store.
pub const MIN_AMOUNT: f64 = 0.0;
pub const MAX_AMOUNT: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub patient: String,
    /// Never checked against the visits collection.
    pub visit_id: String,
    pub amount: f64,
    pub date: String,
}

impl Payment {
    pub fn new(id: &str, patient: &str, visit_id: &str, amount: f64, date: &str) -> Self {
        Self {
            id: trimmed(id),
            patient: trimmed(patient),
            visit_id: trimmed(visit_id),
            amount,
            date: trimmed(date),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentPatch {
    pub amount: Option<f64>,
    pub date: Option<String>,
}

impl Record for Payment {
    type Patch = PaymentPatch;
    const KIND: EntityKind = EntityKind::Payment;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.patient, &self.visit_id]
    }

    fn apply(&mut self, patch: PaymentPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        patch_text(&mut self.date, patch.date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_field_map() {
        let p = Payment::new("PAY1", "Amal", "V1", 150.0, "2024-01-01");
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["id"], "PAY1");
        assert_eq!(value["visit_id"], "V1");
        assert_eq!(value["amount"], 150.0);
    }

    #[test]
    fn apply_amount_keeps_date() {
        let mut p = Payment::new("PAY1", "Amal", "V1", 150.0, "2024-01-01");
        p.apply(PaymentPatch {
            amount: Some(200.0),
            date: None,
        });
        assert_eq!(p.amount, 200.0);
        assert_eq!(p.date, "2024-01-01");
    }
}
