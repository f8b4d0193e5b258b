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

/// Running totals, position 0 through i.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
	let mut total = 0.0;
	values
		.iter()
		.map(|v| {
			total += v;
			total
		})
		.collect()
}

pub fn add(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
	lhs.iter().zip(rhs).map(|(a, b)| a + b).collect()
}

pub fn divide(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
	lhs.iter().zip(rhs).map(|(a, b)| a / b).collect()
}

/// Position of the smallest value; the earliest one wins a tie. NaNs are
/// never selected.
pub fn argmin_first(values: &[f64]) -> Option<usize> {
	let mut best: Option<(usize, f64)> = None;
	for (i, v) in values.iter().enumerate() {
		if v.is_nan() {
			continue;
		}
		match best {
			Some((_, b)) if *v >= b => {},
			_ => best = Some((i, *v)),
		}
	}
	best.map(|(i, _)| i)
}
