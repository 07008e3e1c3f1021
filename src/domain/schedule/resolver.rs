//! Recurrence Resolver - first occurrence of a cadence on or after a date.

use crate::domain::foundation::IsoDate;
use crate::domain::obligation::Cadence;

/// Pure recurrence arithmetic.
///
/// # Month-end policy
/// Monthly occurrences keep the anchor's day-of-month. When the target month
/// is shorter, the occurrence is clamped to that month's last day. The day is
/// always derived from the anchor, never from the previous occurrence, so an
/// anchor on the 31st yields Jan 31, Feb 29, Mar 31, Apr 30.
///
/// Occurrences never precede the anchor, for every cadence.
pub struct RecurrenceResolver;

impl RecurrenceResolver {
    /// Returns the first occurrence on or after `reference`.
    ///
    /// `None` means there is no such occurrence: a one-time obligation whose
    /// anchor is already past, or a date beyond the representable range.
    pub fn next_on_or_after(
        anchor: IsoDate,
        cadence: Cadence,
        reference: IsoDate,
    ) -> Option<IsoDate> {
        match cadence {
            Cadence::None => (anchor >= reference).then_some(anchor),
            Cadence::Weekly | Cadence::Biweekly => {
                Self::next_stepped(anchor, cadence.step_days()?, reference)
            }
            Cadence::Monthly => Self::next_monthly(anchor, reference),
        }
    }

    /// Returns the occurrence immediately after `current`.
    ///
    /// `current` must itself be an occurrence of (`anchor`, `cadence`).
    pub fn following(anchor: IsoDate, cadence: Cadence, current: IsoDate) -> Option<IsoDate> {
        match cadence {
            Cadence::None => None,
            Cadence::Weekly | Cadence::Biweekly => current.add_days(cadence.step_days()?),
            Cadence::Monthly => {
                let offset = current.month_index() - anchor.month_index();
                Self::monthly_occurrence(anchor, offset.checked_add(1)?)
            }
        }
    }

    /// The `offset`-th monthly occurrence (offset 0 is the anchor itself).
    pub fn monthly_occurrence(anchor: IsoDate, offset: i64) -> Option<IsoDate> {
        let index = anchor.month_index().checked_add(offset)?;
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        IsoDate::from_ymd_clamped(year, month, anchor.day())
    }

    fn next_stepped(anchor: IsoDate, step_days: u64, reference: IsoDate) -> Option<IsoDate> {
        let diff = reference.days_since(&anchor);
        if diff <= 0 {
            return Some(anchor);
        }
        let diff = diff.unsigned_abs();
        let periods = (diff + step_days - 1) / step_days;
        let candidate = anchor.add_days(periods.checked_mul(step_days)?)?;
        Self::not_before(candidate, step_days, reference)
    }

    /// Advances `candidate` by one step if it still precedes `reference`.
    fn not_before(candidate: IsoDate, step_days: u64, reference: IsoDate) -> Option<IsoDate> {
        if candidate < reference {
            candidate.add_days(step_days)
        } else {
            Some(candidate)
        }
    }

    fn next_monthly(anchor: IsoDate, reference: IsoDate) -> Option<IsoDate> {
        if reference <= anchor {
            return Some(anchor);
        }
        let offset = reference.month_index() - anchor.month_index();
        let candidate = Self::monthly_occurrence(anchor, offset)?;
        if candidate < reference {
            Self::monthly_occurrence(anchor, offset.checked_add(1)?)
        } else {
            Some(candidate)
        }
    }
}
