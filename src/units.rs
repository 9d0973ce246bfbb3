use chrono::NaiveDate;
use thiserror::Error;

/// One scheduling request line under a unit: a calendar date plus one of the
/// catalog time-range labels. Both start empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateSlotEntry {
    pub date: Option<NaiveDate>,
    pub time_range: String,
}

/// A clinic unit with its list of date/time-slot entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitEntry {
    pub code: String,
    pub slots: Vec<DateSlotEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotField {
    Date,
    TimeRange,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("date is not a valid calendar date or lies in the past")]
    InvalidDate,
}

// Every operation below returns a fresh list instead of mutating in place, so
// signal consumers can compare snapshots. Out-of-bounds indices are silent
// no-ops: the UI derives them from the current render, so a miss only means
// the render raced an earlier removal.

pub fn add_unit(units: &[UnitEntry]) -> Vec<UnitEntry> {
    let mut next = units.to_vec();
    next.push(UnitEntry::default());
    next
}

pub fn remove_unit(units: &[UnitEntry], index: usize) -> Vec<UnitEntry> {
    let mut next = units.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

pub fn set_unit_code(units: &[UnitEntry], index: usize, code: &str) -> Vec<UnitEntry> {
    let mut next = units.to_vec();
    if let Some(unit) = next.get_mut(index) {
        unit.code = code.to_string();
    }
    next
}

pub fn add_slot(units: &[UnitEntry], unit: usize) -> Vec<UnitEntry> {
    let mut next = units.to_vec();
    if let Some(u) = next.get_mut(unit) {
        u.slots.push(DateSlotEntry::default());
    }
    next
}

pub fn remove_slot(units: &[UnitEntry], unit: usize, slot: usize) -> Vec<UnitEntry> {
    let mut next = units.to_vec();
    if let Some(u) = next.get_mut(unit) {
        if slot < u.slots.len() {
            u.slots.remove(slot);
        }
    }
    next
}

/// Sets one field of a slot. A date is accepted only if it parses as ISO
/// `YYYY-MM-DD` (the value shape of a date input) and is not earlier than
/// `today`; otherwise the caller keeps its current list and gets
/// `EditError::InvalidDate` back. The floor is checked here, at edit time,
/// so the user is told per selection rather than at submit.
pub fn set_slot_field(
    units: &[UnitEntry],
    unit: usize,
    slot: usize,
    field: SlotField,
    value: &str,
    today: NaiveDate,
) -> Result<Vec<UnitEntry>, EditError> {
    let mut next = units.to_vec();
    if let Some(entry) = next.get_mut(unit).and_then(|u| u.slots.get_mut(slot)) {
        match field {
            SlotField::Date => {
                let parsed = value.parse::<NaiveDate>().map_err(|_| EditError::InvalidDate)?;
                if parsed < today {
                    return Err(EditError::InvalidDate);
                }
                entry.date = Some(parsed);
            }
            SlotField::TimeRange => entry.time_range = value.to_string(),
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Local};

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn one_unit_one_slot() -> Vec<UnitEntry> {
        add_slot(&add_unit(&[]), 0)
    }

    #[test]
    fn add_then_remove_restores_prior_list() {
        let base = vec![UnitEntry { code: "ECOM-SP".into(), slots: vec![] }];
        let grown = add_unit(&base);
        assert_eq!(grown.len(), 2);
        assert_eq!(remove_unit(&grown, 1), base);
        assert_eq!(remove_unit(&add_unit(&[]), 0), Vec::<UnitEntry>::new());
    }

    #[test]
    fn remove_out_of_bounds_is_a_noop() {
        let base = add_unit(&[]);
        assert_eq!(remove_unit(&base, 5), base);
        assert_eq!(remove_slot(&base, 0, 0), base);
        assert_eq!(remove_slot(&base, 3, 0), base);
    }

    #[test]
    fn set_unit_code_targets_one_entry() {
        let units = add_unit(&add_unit(&[]));
        let next = set_unit_code(&units, 1, "ECOM-SP");
        assert_eq!(next[0].code, "");
        assert_eq!(next[1].code, "ECOM-SP");
        // original snapshot untouched
        assert_eq!(units[1].code, "");
    }

    #[test]
    fn date_in_the_past_is_rejected_and_state_unchanged() {
        let units = one_unit_one_slot();
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        let err = set_slot_field(
            &units, 0, 0, SlotField::Date, &yesterday.to_string(), today(),
        )
        .expect_err("yesterday must be rejected");
        assert_eq!(err, EditError::InvalidDate);
        assert_eq!(units[0].slots[0].date, None);
    }

    #[test]
    fn unparsable_date_is_rejected() {
        let units = one_unit_one_slot();
        let err = set_slot_field(&units, 0, 0, SlotField::Date, "31/12/2030", today())
            .expect_err("non-ISO input must be rejected");
        assert_eq!(err, EditError::InvalidDate);
    }

    #[test]
    fn today_and_tomorrow_are_accepted() {
        let units = one_unit_one_slot();
        let next = set_slot_field(&units, 0, 0, SlotField::Date, &today().to_string(), today())
            .expect("today is the floor, not past it");
        assert_eq!(next[0].slots[0].date, Some(today()));

        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        let next =
            set_slot_field(&next, 0, 0, SlotField::Date, &tomorrow.to_string(), today()).unwrap();
        assert_eq!(next[0].slots[0].date, Some(tomorrow));
    }

    #[test]
    fn time_range_is_set_verbatim() {
        let units = one_unit_one_slot();
        let next =
            set_slot_field(&units, 0, 0, SlotField::TimeRange, "09:00 às 15:00", today()).unwrap();
        assert_eq!(next[0].slots[0].time_range, "09:00 às 15:00");
    }

    #[test]
    fn slot_edit_with_missing_indices_is_a_noop() {
        let units = add_unit(&[]);
        let next =
            set_slot_field(&units, 0, 4, SlotField::TimeRange, "09:00 às 15:00", today()).unwrap();
        assert_eq!(next, units);
    }
}
