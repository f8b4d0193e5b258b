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

//! Missing-value policies. Each one looks at a single column only, so the
//! order in which columns are filled can never change the result.

/// Missing entries become 0.0 (capex, opex, salvage).
pub fn fill_zero(column: &[Option<f64>]) -> Vec<f64> {
	column.iter().map(|v| v.unwrap_or(0.0)).collect()
}

/// Missing entries take the last known value above them. Entries above the
/// first known value get `leading`; nothing is ever filled upwards.
pub fn forward_fill(column: &[Option<f64>], leading: f64) -> Vec<f64> {
	let mut last = leading;
	column
		.iter()
		.map(|v| {
			if let Some(v) = v {
				last = *v;
			}
			last
		})
		.collect()
}

/// Interest rates: an override wins everywhere; otherwise forward fill with
/// a 0.0 default, and an absent column is all 0.0.
pub fn resolve_rates(
	column: Option<&[Option<f64>]>,
	len: usize,
	rate_override: Option<f64>,
) -> Vec<f64> {
	match (rate_override, column) {
		(Some(rate), _) => vec![rate; len],
		(None, Some(column)) => forward_fill(column, 0.0),
		(None, None) => vec![0.0; len],
	}
}

/// Optional columns such as salvage value: absent means all zeros.
pub fn resolve_optional(column: Option<&[Option<f64>]>, len: usize) -> Vec<f64> {
	match column {
		Some(column) => fill_zero(column),
		None => vec![0.0; len],
	}
}

/// Number of missing entries before the first known value.
pub fn leading_missing(column: &[Option<f64>]) -> usize {
	column.iter().take_while(|v| v.is_none()).count()
}
