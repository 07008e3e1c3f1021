//! Validated obligation record.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::foundation::{IsoDate, ObligationId, ValidationError};

use super::Cadence;

/// A recurring or one-time payment the engine schedules.
///
/// Owned by the persistence collaborator; the engine only borrows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    id: ObligationId,
    name: String,
    anchor_due_date: IsoDate,
    cadence: Cadence,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    minimum_payment: f64,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    paid_dates: BTreeSet<IsoDate>,
}

impl Obligation {
    /// Creates an obligation with no notes, zero minimum payment and no paid dates.
    pub fn new(
        id: ObligationId,
        name: impl Into<String>,
        anchor_due_date: IsoDate,
        cadence: Cadence,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            anchor_due_date,
            cadence,
            notes: None,
            minimum_payment: 0.0,
            paid_dates: BTreeSet::new(),
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the minimum payment. Any finite amount is accepted, negative
    /// credit balances included; NaN and infinities are rejected.
    pub fn with_minimum_payment(mut self, amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::invalid_format(
                "minimumPayment",
                format!("must be a finite amount, got {}", amount),
            ));
        }
        self.minimum_payment = amount;
        Ok(self)
    }

    pub fn with_paid_dates(mut self, dates: impl IntoIterator<Item = IsoDate>) -> Self {
        self.paid_dates = dates.into_iter().collect();
        self
    }

    pub fn id(&self) -> &ObligationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anchor_due_date(&self) -> IsoDate {
        self.anchor_due_date
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn minimum_payment(&self) -> f64 {
        self.minimum_payment
    }

    pub fn paid_dates(&self) -> &BTreeSet<IsoDate> {
        &self.paid_dates
    }

    /// Returns true if a payment was recorded for the occurrence on `date`.
    pub fn is_paid_on(&self, date: &IsoDate) -> bool {
        self.paid_dates.contains(date)
    }

    /// Text matched by free-text search: name, a space, then notes.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.notes.as_deref().unwrap_or(""))
    }
}
