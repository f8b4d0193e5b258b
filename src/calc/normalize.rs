/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::calc::fill::{
	fill_zero, leading_missing, resolve_optional, resolve_rates,
};
use crate::error::ValidationError;
use crate::parsing::number::parse_number;
use crate::parsing::raw_table::RawTable;
use crate::schedule::columns::{
	CAPEX, INTEREST_RATE, OPEX, SALVAGE_VALUE, YEAR,
};
use crate::schedule::cost_schedule::{is_percentage, CostSchedule, YearRecord};
use crate::schedule::year_label::YearLabel;
use tracing::{debug, warn};

/// Builds a resolved schedule from a table whose headers are already
/// normalized. Validation happens before any filling, so a bad cell is
/// reported at its original position.
pub fn schedule_from_table(
	table: &RawTable,
	rate_override: Option<f64>,
) -> Result<CostSchedule, ValidationError> {
	if table.is_empty() {
		return Err(ValidationError::EmptySchedule);
	}

	if let Some(rate) = rate_override {
		if !rate.is_finite() || !is_percentage(rate) {
			return Err(ValidationError::InvalidOverride { value: rate });
		}
	}

	let years = year_column(table)?;
	let capex = numeric_column(table, CAPEX, false)?.ok_or_else(|| missing(CAPEX))?;
	let opex = numeric_column(table, OPEX, false)?.ok_or_else(|| missing(OPEX))?;
	let rates = numeric_column(table, INTEREST_RATE, true)?;
	let salvage = numeric_column(table, SALVAGE_VALUE, false)?;

	check_range(CAPEX, &capex, |v| v >= 0.0)?;
	check_range(OPEX, &opex, |v| v >= 0.0)?;
	check_range(SALVAGE_VALUE, salvage.as_deref().unwrap_or_default(), |v| {
		v >= 0.0
	})?;
	// file rates are unused under an override
	if rate_override.is_none() {
		check_range(
			INTEREST_RATE,
			rates.as_deref().unwrap_or_default(),
			is_percentage,
		)?;
	}

	let len = table.len();
	match (&rates, rate_override) {
		(Some(column), Some(rate)) if column.iter().any(Option::is_some) => {
			warn!("interest rate override {}% replaces the rates in the file", rate)
		},
		(Some(column), None) if leading_missing(column) > 0 => {
			warn!(
				"first {} interest rate(s) missing; defaulting them to 0%",
				leading_missing(column)
			)
		},
		(None, None) => debug!("no {} column; assuming 0%", INTEREST_RATE),
		_ => {},
	}
	if salvage.is_none() {
		debug!("no {} column; assuming no salvage", SALVAGE_VALUE);
	}

	let capex = fill_zero(&capex);
	let opex = fill_zero(&opex);
	let rates = resolve_rates(rates.as_deref(), len, rate_override);
	let salvage = resolve_optional(salvage.as_deref(), len);

	let records = years
		.into_iter()
		.enumerate()
		.map(|(i, year)| {
			YearRecord::new(year, capex[i], opex[i])
				.with_rate(rates[i])
				.with_salvage(salvage[i])
		})
		.collect();

	CostSchedule::new(records)
}

fn missing(column: &str) -> ValidationError {
	ValidationError::MissingColumn {
		column: column.to_string(),
	}
}

fn year_column(table: &RawTable) -> Result<Vec<YearLabel>, ValidationError> {
	let cells = table.column(YEAR).ok_or_else(|| missing(YEAR))?;
	cells
		.into_iter()
		.enumerate()
		.map(|(position, cell)| match cell {
			Some(raw) => Ok(YearLabel::parse(raw)),
			None => Err(ValidationError::MissingYear { position }),
		})
		.collect()
}

/// Parses a numeric column, keeping missing cells as None. An absent column
/// is Ok(None) so the caller decides whether it is mandatory.
fn numeric_column(
	table: &RawTable,
	name: &str,
	allow_percent: bool,
) -> Result<Option<Vec<Option<f64>>>, ValidationError> {
	let Some(cells) = table.column(name) else {
		return Ok(None);
	};

	let mut values = Vec::with_capacity(cells.len());
	for (position, cell) in cells.into_iter().enumerate() {
		let value = match cell {
			None => None,
			Some(raw) => Some(parse_number(raw, allow_percent).ok_or_else(|| {
				ValidationError::NonNumeric {
					column: name.to_string(),
					position,
					value: raw.to_string(),
				}
			})?),
		};
		values.push(value);
	}

	Ok(Some(values))
}

fn check_range(
	column: &str,
	values: &[Option<f64>],
	valid: impl Fn(f64) -> bool,
) -> Result<(), ValidationError> {
	for (position, value) in values.iter().enumerate() {
		if let Some(v) = value {
			if !valid(*v) {
				return Err(ValidationError::OutOfRange {
					column: column.to_string(),
					position,
					value: *v,
				});
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
		let mut t = RawTable::new(headers.iter().map(|h| h.to_string()).collect());
		for row in rows {
			t.push_row(row.iter().map(|c| Some(c.to_string())).collect());
		}
		t
	}

	#[test]
	fn test_defaults() {
		let t = table(&["year", "capex", "opex"], &[&["1", "", "5"], &["2", "3", ""]]);
		let schedule = schedule_from_table(&t, None).unwrap();
		let records = schedule.records();
		assert_eq!(records[0].capex, 0.0);
		assert_eq!(records[1].opex, 0.0);
		assert_eq!(records[0].interest_rate, 0.0);
		assert_eq!(records[1].salvage_value, 0.0);
	}

	#[test]
	fn test_rates_forward_filled() {
		let t = table(
			&["year", "capex", "opex", "interest_rate"],
			&[&["1", "1", "1", ""], &["2", "1", "1", "6%"], &["3", "1", "1", ""]],
		);
		let schedule = schedule_from_table(&t, None).unwrap();
		let rates: Vec<f64> =
			schedule.records().iter().map(|r| r.interest_rate).collect();
		assert_eq!(rates, vec![0.0, 6.0, 6.0]);
	}

	#[test]
	fn test_override_broadcast() {
		let t = table(
			&["year", "capex", "opex", "interest_rate"],
			&[&["1", "1", "1", "4"], &["2", "1", "1", ""]],
		);
		let schedule = schedule_from_table(&t, Some(12.0)).unwrap();
		assert!(schedule.records().iter().all(|r| r.interest_rate == 12.0));
	}

	#[test]
	fn test_override_ignores_file_rate_range() {
		let t = table(
			&["year", "capex", "opex", "interest_rate"],
			&[&["1", "1000", "100", "150"], &["2", "0", "150", ""]],
		);
		assert!(matches!(
			schedule_from_table(&t, None),
			Err(ValidationError::OutOfRange { position: 0, .. })
		));

		let schedule = schedule_from_table(&t, Some(10.0)).unwrap();
		assert!(schedule.records().iter().all(|r| r.interest_rate == 10.0));
	}

	#[test]
	fn test_invalid_override() {
		let t = table(&["year", "capex", "opex"], &[&["1", "1", "1"]]);
		assert_eq!(
			schedule_from_table(&t, Some(101.0)),
			Err(ValidationError::InvalidOverride { value: 101.0 })
		);
	}

	#[test]
	fn test_missing_columns() {
		let t = table(&["year", "opex"], &[&["1", "1"]]);
		assert_eq!(schedule_from_table(&t, None), Err(missing("capex")));

		let t = table(&["year", "capex"], &[&["1", "1"]]);
		assert_eq!(schedule_from_table(&t, None), Err(missing("opex")));

		let t = table(&["capex", "opex"], &[&["1", "1"]]);
		assert_eq!(schedule_from_table(&t, None), Err(missing("year")));
	}

	#[test]
	fn test_empty_before_missing_column() {
		let t = table(&["capex"], &[]);
		assert_eq!(
			schedule_from_table(&t, None),
			Err(ValidationError::EmptySchedule)
		);
	}

	#[test]
	fn test_non_numeric_reports_position() {
		let t = table(&["year", "capex", "opex"], &[&["1", "1", "1"], &["2", "x", "1"]]);
		assert_eq!(
			schedule_from_table(&t, None),
			Err(ValidationError::NonNumeric {
				column: "capex".into(),
				position: 1,
				value: "x".into(),
			})
		);
	}

	#[test]
	fn test_percent_rejected_outside_rate_column() {
		let t = table(&["year", "capex", "opex"], &[&["1", "5%", "1"]]);
		assert!(matches!(
			schedule_from_table(&t, None),
			Err(ValidationError::NonNumeric { .. })
		));
	}

	#[test]
	fn test_missing_year_label() {
		let t = table(&["year", "capex", "opex"], &[&["1", "1", "1"], &["", "1", "1"]]);
		assert_eq!(
			schedule_from_table(&t, None),
			Err(ValidationError::MissingYear { position: 1 })
		);
	}

	#[test]
	fn test_negative_rate_rejected() {
		let t = table(
			&["year", "capex", "opex", "interest_rate"],
			&[&["1", "1", "1", "-2"]],
		);
		assert!(matches!(
			schedule_from_table(&t, None),
			Err(ValidationError::OutOfRange { .. })
		));
	}
}
