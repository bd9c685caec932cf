use super::models::{EventForm, RepeatType};
use chrono::{Datelike, Duration, Months, NaiveDate};

/// Concrete occurrences of a recurring form, starting with the form's own date.
///
/// Generation stops at the descriptor's end date or `horizon_end`, whichever
/// comes first. Monthly and yearly occurrences whose day does not exist in
/// the target month are skipped.
pub fn expand(form: &EventForm, horizon_end: NaiveDate) -> Vec<EventForm> {
    occurrence_dates(form, horizon_end)
        .into_iter()
        .map(|date| EventForm {
            date,
            ..form.clone()
        })
        .collect()
}

/// Dates of all occurrences of `form`
pub fn occurrence_dates(form: &EventForm, horizon_end: NaiveDate) -> Vec<NaiveDate> {
    let repeat = &form.repeat;
    if repeat.kind == RepeatType::None {
        return vec![form.date];
    }

    let last = repeat
        .end_date
        .map_or(horizon_end, |end| end.min(horizon_end));
    let interval = repeat.interval.max(1);

    let mut dates = Vec::new();
    let mut step: u32 = 0;
    loop {
        let offset = step.saturating_mul(interval);
        let candidate = match nth_occurrence(form.date, repeat.kind, offset) {
            Step::Date(date) => date,
            Step::Skip(reference) => {
                if reference > last {
                    break;
                }
                step += 1;
                continue;
            }
            Step::Overflow => break,
        };

        if candidate > last {
            break;
        }
        dates.push(candidate);
        step += 1;
    }

    dates
}

enum Step {
    Date(NaiveDate),
    /// The day does not exist this period; carries the period's first day
    Skip(NaiveDate),
    Overflow,
}

fn nth_occurrence(start: NaiveDate, kind: RepeatType, offset: u32) -> Step {
    match kind {
        RepeatType::None => Step::Date(start),
        RepeatType::Daily => start
            .checked_add_signed(Duration::days(i64::from(offset)))
            .map_or(Step::Overflow, Step::Date),
        RepeatType::Weekly => start
            .checked_add_signed(Duration::weeks(i64::from(offset)))
            .map_or(Step::Overflow, Step::Date),
        RepeatType::Monthly => month_step(start, offset),
        RepeatType::Yearly => match offset.checked_mul(12) {
            Some(months) => month_step(start, months),
            None => Step::Overflow,
        },
    }
}

/// `start` moved by `months`, without clamping the day
fn month_step(start: NaiveDate, months: u32) -> Step {
    let first_of_month = match start
        .with_day(1)
        .and_then(|d| d.checked_add_months(Months::new(months)))
    {
        Some(date) => date,
        None => return Step::Overflow,
    };

    match first_of_month.with_day(start.day()) {
        Some(date) => Step::Date(date),
        None => Step::Skip(first_of_month),
    }
}
