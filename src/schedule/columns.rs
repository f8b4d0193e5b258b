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
use std::collections::BTreeMap;

pub const YEAR: &str = "year";
pub const CAPEX: &str = "capex";
pub const OPEX: &str = "opex";
pub const INTEREST_RATE: &str = "interest_rate";
pub const SALVAGE_VALUE: &str = "salvage_value";

const CANONICAL: [&str; 5] = [YEAR, CAPEX, OPEX, INTEREST_RATE, SALVAGE_VALUE];

/// Whether the calculator reads a column of this (normalized) name.
pub fn is_canonical(name: &str) -> bool {
	CANONICAL.contains(&name)
}

/// Headers are matched case-insensitively, ignoring surrounding whitespace.
pub fn normalize_name(name: &str) -> String {
	name.trim().to_lowercase()
}

/// Maps alternative input headers onto the canonical column names above, e.g.
/// a sheet that calls its label column "Period".
#[derive(Clone, Debug, Default)]
pub struct ColumnAliases {
	aliases: BTreeMap<String, &'static str>, // normalized alias -> canonical
}

impl ColumnAliases {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn add(&mut self, alias: &str, canonical: &'static str) {
		self.aliases.insert(normalize_name(alias), canonical);
	}

	/// Normalizes a raw header and replaces it with its canonical name if it
	/// is a known alias.
	pub fn resolve(&self, header: &str) -> String {
		let normalized = normalize_name(header);
		match self.aliases.get(&normalized) {
			Some(canonical) => canonical.to_string(),
			None => normalized,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_name() {
		assert_eq!(normalize_name("  CapEx "), "capex");
		assert_eq!(normalize_name("Interest_Rate"), "interest_rate");
	}

	#[test]
	fn test_resolve_alias() {
		let mut aliases = ColumnAliases::new();
		aliases.add(" Period ", YEAR);
		assert_eq!(aliases.resolve("PERIOD"), "year");
		assert_eq!(aliases.resolve(" Opex"), "opex");
	}

	#[test]
	fn test_is_canonical() {
		assert!(is_canonical("salvage_value"));
		assert!(!is_canonical("note"));
		assert!(!is_canonical("Capex"));
	}
}
