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
use regex::Regex;
use std::sync::LazyLock;

// Spreadsheet-style amounts: "$1,250.50", "-€300", "12,000"
static FORMATTED_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^(?P<sign>[-+])?\s*[$€£¥]?\s*(?P<int>\d{1,3}(?:,\d{3})+|\d+)?(?P<frac>\.\d+)?$",
	)
	.expect("amount pattern compiles")
});

/// Parses a numeric cell. Plain numbers (including scientific notation) are
/// tried first, then formatted amounts. A trailing percent sign is only
/// accepted when `allow_percent` is set. Returns None for anything that is
/// not a finite number.
pub fn parse_number(raw: &str, allow_percent: bool) -> Option<f64> {
	let mut s = raw.trim();
	if allow_percent {
		if let Some(stripped) = s.strip_suffix('%') {
			s = stripped.trim_end();
		}
	}

	if let Ok(value) = s.parse::<f64>() {
		return value.is_finite().then_some(value);
	}

	let caps = FORMATTED_AMOUNT.captures(s)?;
	let int = caps
		.name("int")
		.map(|m| m.as_str().replace(',', ""))
		.unwrap_or_default();
	let frac = caps.name("frac").map(|m| m.as_str()).unwrap_or_default();
	if int.is_empty() && frac.is_empty() {
		return None;
	}

	let int = if int.is_empty() { "0".to_string() } else { int };
	let value: f64 = format!("{}{}", int, frac).parse().ok()?;

	match caps.name("sign").map(|m| m.as_str()) {
		Some("-") => Some(-value),
		_ => Some(value),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plain_numbers() {
		assert_eq!(parse_number("1000", false), Some(1000.0));
		assert_eq!(parse_number(" 12.5 ", false), Some(12.5));
		assert_eq!(parse_number("1e3", false), Some(1000.0));
		assert_eq!(parse_number("-4", false), Some(-4.0));
	}

	#[test]
	fn test_formatted_amounts() {
		assert_eq!(parse_number("1,250.50", false), Some(1250.5));
		assert_eq!(parse_number("$1,000", false), Some(1000.0));
		assert_eq!(parse_number("-€300", false), Some(-300.0));
		assert_eq!(parse_number("£.5", false), Some(0.5));
	}

	#[test]
	fn test_percent_only_when_allowed() {
		assert_eq!(parse_number("10%", true), Some(10.0));
		assert_eq!(parse_number("7.5 %", true), Some(7.5));
		assert_eq!(parse_number("10%", false), None);
	}

	#[test]
	fn test_rejects_garbage() {
		assert_eq!(parse_number("n/a", false), None);
		assert_eq!(parse_number("1,00", false), None);
		assert_eq!(parse_number("$", false), None);
		assert_eq!(parse_number("NaN", false), None);
		assert_eq!(parse_number("inf", false), None);
	}
}
