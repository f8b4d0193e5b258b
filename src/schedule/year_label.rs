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
use serde::Serialize;
use std::fmt;

/// Display label of a schedule row. Never used in any discounting; the row's
/// position is what determines the exponents.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(untagged)]
pub enum YearLabel {
	Number(i64),
	Text(String),
}

impl YearLabel {
	/// Integral values become numbers, so "2025" and "2025.0" (as exported by
	/// most spreadsheets) both read as 2025. Anything else is kept verbatim.
	pub fn parse(raw: &str) -> Self {
		let trimmed = raw.trim();
		if let Ok(n) = trimmed.parse::<i64>() {
			return YearLabel::Number(n);
		}

		if let Ok(f) = trimmed.parse::<f64>() {
			if f.is_finite()
				&& f.fract() == 0.0
				&& f >= i64::MIN as f64
				&& f <= i64::MAX as f64
			{
				return YearLabel::Number(f as i64);
			}
		}

		YearLabel::Text(trimmed.to_string())
	}
}

impl From<i64> for YearLabel {
	fn from(value: i64) -> Self {
		YearLabel::Number(value)
	}
}

impl From<&str> for YearLabel {
	fn from(value: &str) -> Self {
		YearLabel::Text(value.to_string())
	}
}

impl fmt::Display for YearLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			YearLabel::Number(n) => write!(f, "{}", n),
			YearLabel::Text(s) => write!(f, "{}", s),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_integer_labels() {
		assert_eq!(YearLabel::parse("3"), YearLabel::Number(3));
		assert_eq!(YearLabel::parse(" 2025 "), YearLabel::Number(2025));
		assert_eq!(YearLabel::parse("2025.0"), YearLabel::Number(2025));
	}

	#[test]
	fn test_text_labels() {
		assert_eq!(YearLabel::parse("FY24"), YearLabel::Text("FY24".into()));
		assert_eq!(YearLabel::parse("2.5"), YearLabel::Text("2.5".into()));
		assert_eq!(YearLabel::parse("NaN"), YearLabel::Text("NaN".into()));
	}

	#[test]
	fn test_display() {
		assert_eq!(YearLabel::Number(7).to_string(), "7");
		assert_eq!(YearLabel::from("Y7").to_string(), "Y7");
	}
}
