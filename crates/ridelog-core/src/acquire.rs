//! Interactive acquisition of a ride record.
//!
//! Prompts go to any `Write`, answers come from any `BufRead`, one line per
//! answer. A rejected answer re-prompts the same field; only the end of the
//! input stream or an I/O failure stops the loop early.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::date::{render_date, resolve};
use crate::duration::{
    format_seconds, parse_day_duration, parse_total_duration, DAY_DURATION_HINT,
    TOTAL_DURATION_HINT,
};
use crate::error::{RideError, Result};
use crate::field::{rotate, FieldSelector};
use crate::numeric::{is_numeric, parse_whole};
use crate::record::{FieldValue, RideDraft, RideRecord};

const DATE_HINT: &str = "d, d-m or d-m-y";

/// Parse a distance in km.
pub fn parse_distance(input: &str) -> Result<f64> {
    let input = input.trim();
    if !is_numeric(input) {
        return Err(RideError::format(input, "a float"));
    }
    input
        .parse::<f64>()
        .ok()
        .filter(|km| km.is_finite())
        .ok_or_else(|| RideError::format(input, "a float"))
}

/// Parse the number of the field to start with.
pub fn parse_start(input: &str) -> Result<FieldSelector> {
    let input = input.trim();
    let number = parse_whole(input)?;
    u8::try_from(number)
        .ok()
        .and_then(FieldSelector::from_number)
        .ok_or_else(|| RideError::format(input, "a number between 1 and 4"))
}

/// Parse the answer for `field` with that field's grammar.
pub fn parse_field(field: FieldSelector, input: &str) -> Result<FieldValue> {
    match field {
        FieldSelector::DayDistance | FieldSelector::TotalDistance => {
            parse_distance(input).map(FieldValue::Distance)
        }
        FieldSelector::DayDuration => parse_day_duration(input).map(FieldValue::Seconds),
        FieldSelector::TotalDuration => parse_total_duration(input).map(FieldValue::Seconds),
    }
}

/// Prompt text for `field`.
fn field_prompt(field: FieldSelector) -> String {
    match field {
        FieldSelector::DayDistance | FieldSelector::TotalDistance => {
            format!("{} [km]", field.label())
        }
        FieldSelector::DayDuration => format!("{}, expect {}", field.label(), DAY_DURATION_HINT),
        FieldSelector::TotalDuration => {
            format!("{}, expect {}", field.label(), TOTAL_DURATION_HINT)
        }
    }
}

/// Message printed after a rejected answer for `field`.
fn field_error(field: FieldSelector) -> String {
    match field {
        FieldSelector::DayDistance | FieldSelector::TotalDistance => "Expect a float".to_string(),
        FieldSelector::DayDuration => format!("Expect {}", DAY_DURATION_HINT),
        FieldSelector::TotalDuration => format!("Expect {}", TOTAL_DURATION_HINT),
    }
}

/// Drives the prompt/answer loop for one ride.
pub struct ValueAcquirer<R, W> {
    input: R,
    output: W,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> ValueAcquirer<R, W> {
    /// `today` fills in whatever the date answer leaves out.
    pub fn new(input: R, output: W, today: NaiveDate) -> Self {
        Self {
            input,
            output,
            today,
        }
    }

    /// Collect a complete ride: the date, the start field, then all four
    /// fields in rotation order.
    ///
    /// # Errors
    ///
    /// Returns `RideError::StreamExhausted` if the input ends first, or
    /// `RideError::Io` if a stream fails. The partial ride is discarded.
    pub fn acquire(&mut self) -> Result<RideRecord> {
        let date = self.acquire_date()?;
        let start = self.acquire_start()?;
        let order = rotate(start);
        tracing::debug!(?order, "field order");

        let mut draft = RideDraft::new(date);
        for field in order.iter() {
            let value = self.acquire_field(field)?;
            draft.set(field, value)?;
        }
        draft.finish()
    }

    /// Ask for the ride date until it resolves.
    pub fn acquire_date(&mut self) -> Result<NaiveDate> {
        let prompt = format!("Date ({}; empty for {})", DATE_HINT, render_date(self.today));
        let error = format!("Expect {}", DATE_HINT);
        let today = self.today;
        let date = self.ask(&[], &prompt, &error, |line| resolve(line, today))?;
        tracing::debug!(date = %date, "date accepted");
        Ok(date)
    }

    /// Ask which field to start with until a number in 1..=4 arrives.
    pub fn acquire_start(&mut self) -> Result<FieldSelector> {
        let mut menu = vec!["Start with which option:".to_string()];
        menu.extend(FieldSelector::ALL.iter().map(|field| format!("  {}", field)));
        let start = self.ask(
            &menu,
            "Option",
            "Expect a number between 1 and 4",
            parse_start,
        )?;
        tracing::debug!(start = start.number(), "start field accepted");
        Ok(start)
    }

    /// Ask for one field until its grammar accepts the answer.
    pub fn acquire_field(&mut self, field: FieldSelector) -> Result<FieldValue> {
        let value = self.ask(&[], &field_prompt(field), &field_error(field), |line| {
            parse_field(field, line)
        })?;
        match value {
            FieldValue::Distance(km) => tracing::debug!(field = field.label(), km, "accepted"),
            FieldValue::Seconds(s) => {
                tracing::debug!(field = field.label(), time = %format_seconds(s), "accepted")
            }
        }
        Ok(value)
    }

    fn ask<T>(
        &mut self,
        preamble: &[String],
        prompt: &str,
        error: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            for line in preamble {
                writeln!(self.output, "{}", line)?;
            }
            write!(self.output, "{}: ", prompt)?;
            self.output.flush()?;

            let parsed = match self.read_answer()? {
                Some(line) => parse(&line),
                None => Err(RideError::Format("answer is not valid UTF-8".to_string())),
            };
            match parsed {
                Ok(value) => return Ok(value),
                Err(RideError::Format(detail)) => {
                    tracing::debug!(%detail, "answer rejected");
                    writeln!(self.output, "{}", error)?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// One answer line without its terminator, or `None` if the bytes are
    /// not UTF-8.
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(RideError::StreamExhausted);
        }
        Ok(String::from_utf8(bytes)
            .ok()
            .map(|line| line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Run one acquisition over the given streams.
pub fn acquire<R: BufRead, W: Write>(input: R, output: W, today: NaiveDate) -> Result<RideRecord> {
    ValueAcquirer::new(input, output, today).acquire()
}
