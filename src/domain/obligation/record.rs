//! Raw obligation records as delivered by the persistence collaborator.
//!
//! Records carry plain strings; conversion into [`Obligation`] is the
//! validation boundary. Malformed dates and unknown cadences are rejected
//! here and never coerced.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{IsoDate, ObligationId, ValidationError};
use crate::domain::schedule::ScheduleError;

use super::{Cadence, Obligation};

/// Obligation as stored upstream (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationRecord {
    pub id: String,
    pub name: String,
    pub anchor_due_date: String,
    pub cadence: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub minimum_payment: f64,
    #[serde(default)]
    pub paid_dates: Option<Vec<String>>,
}

impl TryFrom<ObligationRecord> for Obligation {
    type Error = ValidationError;

    fn try_from(record: ObligationRecord) -> Result<Self, Self::Error> {
        let id = ObligationId::new(record.id)?;
        let anchor = IsoDate::parse("anchorDueDate", &record.anchor_due_date)?;
        let cadence: Cadence = record.cadence.parse()?;
        let paid_dates = record
            .paid_dates
            .unwrap_or_default()
            .iter()
            .map(|raw| IsoDate::parse("paidDates", raw))
            .collect::<Result<Vec<_>, _>>()?;

        let mut obligation = Obligation::new(id, record.name, anchor, cadence)?
            .with_minimum_payment(record.minimum_payment)?
            .with_paid_dates(paid_dates);
        if let Some(notes) = record.notes {
            obligation = obligation.with_notes(notes);
        }
        Ok(obligation)
    }
}

/// Parses and validates a JSON array of obligation records.
///
/// # Errors
/// - `ScheduleError::Validation` for unparsable JSON or any invalid record
/// - `ScheduleError::DuplicateObligation` when two records share an id
pub fn parse_obligations_json(json: &str) -> Result<Vec<Obligation>, ScheduleError> {
    let records: Vec<ObligationRecord> = serde_json::from_str(json)
        .map_err(|e| ValidationError::invalid_format("obligations", e.to_string()))?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut obligations = Vec::with_capacity(records.len());
    for record in records {
        let obligation = Obligation::try_from(record)?;
        if !seen.insert(obligation.id().clone()) {
            return Err(ScheduleError::DuplicateObligation(obligation.id().clone()));
        }
        obligations.push(obligation);
    }
    Ok(obligations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cadence: &str, anchor: &str) -> ObligationRecord {
        ObligationRecord {
            id: "card".to_string(),
            name: "Credit card".to_string(),
            anchor_due_date: anchor.to_string(),
            cadence: cadence.to_string(),
            notes: Some("Visa".to_string()),
            minimum_payment: 35.0,
            paid_dates: Some(vec!["2024-01-15".to_string()]),
        }
    }

    #[test]
    fn valid_record_converts() {
        let ob = Obligation::try_from(record("monthly", "2024-01-15")).unwrap();
        assert_eq!(ob.cadence(), Cadence::Monthly);
        assert_eq!(ob.notes(), Some("Visa"));
        assert!(ob.is_paid_on(&"2024-01-15".parse().unwrap()));
    }

    #[test]
    fn unknown_cadence_is_rejected() {
        let err = Obligation::try_from(record("quarterly", "2024-01-15")).unwrap_err();
        assert_eq!(err.field(), "cadence");
    }

    #[test]
    fn malformed_anchor_is_rejected() {
        let err = Obligation::try_from(record("weekly", "2024/01/15")).unwrap_err();
        assert_eq!(err.field(), "anchorDueDate");
    }

    #[test]
    fn malformed_paid_date_is_rejected() {
        let mut raw = record("weekly", "2024-01-15");
        raw.paid_dates = Some(vec!["yesterday".to_string()]);
        let err = Obligation::try_from(raw).unwrap_err();
        assert_eq!(err.field(), "paidDates");
    }

    #[test]
    fn parse_json_batch_with_optional_fields_missing() {
        let json = r#"[
            {"id": "a", "name": "Phone", "anchorDueDate": "2024-01-05", "cadence": "monthly",
             "minimumPayment": 0},
            {"id": "b", "name": "Loan", "anchorDueDate": "2024-01-01", "cadence": "biweekly",
             "notes": "car", "minimumPayment": 210.0, "paidDates": []}
        ]"#;

        let obligations = parse_obligations_json(json).unwrap();
        assert_eq!(obligations.len(), 2);
        assert_eq!(obligations[0].minimum_payment(), 0.0);
        assert_eq!(obligations[0].notes(), None);
        assert_eq!(obligations[1].notes(), Some("car"));
    }

    #[test]
    fn parse_json_rejects_missing_minimum_payment() {
        let json = r#"[{"id": "x", "name": "X", "anchorDueDate": "2024-01-01", "cadence": "weekly"}]"#;

        let err = parse_obligations_json(json).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Validation(ValidationError::InvalidFormat { ref reason, .. })
                if reason.contains("minimumPayment")
        ));
    }

    #[test]
    fn parse_json_accepts_negative_minimum_payment() {
        let json = r#"[
            {"id": "credit", "name": "Card credit", "anchorDueDate": "2024-01-01", "cadence": "monthly",
             "minimumPayment": -5},
            {"id": "rent", "name": "Rent", "anchorDueDate": "2024-01-01", "cadence": "monthly",
             "minimumPayment": 900}
        ]"#;

        let obligations = parse_obligations_json(json).unwrap();
        assert_eq!(obligations.len(), 2);
        assert_eq!(obligations[0].minimum_payment(), -5.0);
    }

    #[test]
    fn parse_json_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "name": "Phone", "anchorDueDate": "2024-01-05", "cadence": "monthly", "minimumPayment": 20},
            {"id": "a", "name": "Phone again", "anchorDueDate": "2024-01-06", "cadence": "none", "minimumPayment": 20}
        ]"#;

        let err = parse_obligations_json(json).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateObligation(id) if id.as_str() == "a"));
    }

    #[test]
    fn parse_json_rejects_malformed_json() {
        let err = parse_obligations_json("{not json").unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(_)));
    }
}
