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
use thiserror::Error;

/// Problems with the input table itself. These are permanent for a given
/// input; the source data has to be fixed before computing again.
///
/// Positions are zero-based indices into the schedule, after blank rows have
/// been dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
	#[error("missing required column: {column}")]
	MissingColumn { column: String },

	#[error("empty schedule")]
	EmptySchedule,

	#[error("non-numeric value {value:?} in column {column} at position {position}")]
	NonNumeric {
		column: String,
		position: usize,
		value: String,
	},

	#[error("missing year label at position {position}")]
	MissingYear { position: usize },

	#[error("value {value} in column {column} at position {position} is out of range")]
	OutOfRange {
		column: String,
		position: usize,
		value: f64,
	},

	#[error("column {column} appears more than once")]
	DuplicateColumn { column: String },

	#[error("interest rate override {value} must be a percentage between 0 and 100")]
	InvalidOverride { value: f64 },
}

/// Failures of the calculation on input that passed validation. With rates
/// restricted to [0, 100] these are not expected to occur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
	#[error("annuity factor {value} at position {position} is not positive")]
	InfeasibleAnnuityFactor { position: usize, value: f64 },

	#[error("equivalent annual cost at position {position} is not finite")]
	NonFiniteEac { position: usize },

	#[error("no equivalent annual cost to minimize")]
	EmptySeries,
}

#[derive(Debug, Error)]
pub enum EolError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("malformed source: {0}")]
	MalformedSource(String),

	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error(transparent)]
	Computation(#[from] ComputationError),
}

pub type Result<T> = std::result::Result<T, EolError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_schedule_message() {
		assert_eq!(ValidationError::EmptySchedule.to_string(), "empty schedule");
	}

	#[test]
	fn test_messages_carry_context() {
		let err = ValidationError::NonNumeric {
			column: "opex".to_string(),
			position: 4,
			value: "n/a".to_string(),
		};
		let msg = err.to_string();
		assert!(msg.contains("opex"));
		assert!(msg.contains("position 4"));
		assert!(msg.contains("n/a"));

		let wrapped: EolError = ValidationError::MissingColumn {
			column: "capex".to_string(),
		}
		.into();
		assert_eq!(wrapped.to_string(), "missing required column: capex");
	}
}
