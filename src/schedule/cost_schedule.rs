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
use crate::error::ValidationError;
use crate::schedule::columns::{CAPEX, INTEREST_RATE, OPEX, SALVAGE_VALUE};
use crate::schedule::year_label::YearLabel;

/// One year of asset life with every missing value already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct YearRecord {
	pub year: YearLabel,
	pub capex: f64,
	pub opex: f64,
	pub interest_rate: f64, // percentage, 0-100
	pub salvage_value: f64,
}

impl YearRecord {
	pub fn new(year: impl Into<YearLabel>, capex: f64, opex: f64) -> Self {
		Self {
			year: year.into(),
			capex,
			opex,
			interest_rate: 0.0,
			salvage_value: 0.0,
		}
	}

	pub fn with_rate(mut self, interest_rate: f64) -> Self {
		self.interest_rate = interest_rate;
		self
	}

	pub fn with_salvage(mut self, salvage_value: f64) -> Self {
		self.salvage_value = salvage_value;
		self
	}

	/// The rate as used in discounting formulas.
	pub fn rate_fraction(&self) -> f64 {
		self.interest_rate / 100.0
	}
}

/// Ordered, non-empty sequence of years. Position i is year i+1 of asset
/// life for discounting purposes, whatever the label says.
#[derive(Clone, Debug, PartialEq)]
pub struct CostSchedule {
	records: Vec<YearRecord>,
}

impl CostSchedule {
	pub fn new(records: Vec<YearRecord>) -> Result<Self, ValidationError> {
		if records.is_empty() {
			return Err(ValidationError::EmptySchedule);
		}

		for (position, record) in records.iter().enumerate() {
			check_non_negative(CAPEX, position, record.capex)?;
			check_non_negative(OPEX, position, record.opex)?;
			check_non_negative(SALVAGE_VALUE, position, record.salvage_value)?;
			if !is_percentage(record.interest_rate) {
				return Err(ValidationError::OutOfRange {
					column: INTEREST_RATE.to_string(),
					position,
					value: record.interest_rate,
				});
			}
		}

		Ok(Self { records })
	}

	pub fn records(&self) -> &[YearRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

pub fn is_percentage(value: f64) -> bool {
	(0.0..=100.0).contains(&value)
}

fn check_non_negative(
	column: &str,
	position: usize,
	value: f64,
) -> Result<(), ValidationError> {
	if value.is_finite() && value >= 0.0 {
		Ok(())
	} else {
		Err(ValidationError::OutOfRange {
			column: column.to_string(),
			position,
			value,
		})
	}
}
