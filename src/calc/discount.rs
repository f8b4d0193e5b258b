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

/// Whole periods as an exponent. Schedules are tens to hundreds of years
/// long, so saturating is purely theoretical.
fn periods(n: usize) -> i32 {
	i32::try_from(n).unwrap_or(i32::MAX)
}

/// Present value of `amount` paid `n` periods from now at fractional `rate`.
pub fn present_value(amount: f64, rate: f64, n: usize) -> f64 {
	amount / (1.0 + rate).powi(periods(n))
}

/// Annuity factor for the row at `position`, i.e. over position + 1 years.
/// At a zero rate the closed form divides by zero, so the limit (the number
/// of years) is returned directly.
pub fn annuity_factor(rate: f64, position: usize) -> f64 {
	let years = position + 1;
	if rate == 0.0 {
		return years as f64;
	}
	(1.0 - (1.0 + rate).powi(-periods(years))) / rate
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_annuity_zero_rate() {
		for position in 0..50 {
			assert_eq!(annuity_factor(0.0, position), (position + 1) as f64);
		}
	}

	#[test]
	fn test_annuity_ten_percent() {
		assert!((annuity_factor(0.1, 0) - 0.909090909).abs() < 1e-6);
		assert!((annuity_factor(0.1, 1) - 1.735537190).abs() < 1e-6);
		assert!((annuity_factor(0.1, 2) - 2.486851991).abs() < 1e-6);
	}

	#[test]
	fn test_annuity_approaches_zero_rate_limit() {
		let tiny = annuity_factor(1e-9, 9);
		assert!((tiny - 10.0).abs() < 1e-5);
	}

	#[test]
	fn test_present_value() {
		assert_eq!(present_value(100.0, 0.0, 5), 100.0);
		assert!((present_value(121.0, 0.1, 2) - 100.0).abs() < 1e-9);
		assert_eq!(present_value(50.0, 0.25, 0), 50.0);
	}
}
