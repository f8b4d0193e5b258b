/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
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
use crate::schedule::columns::{
	ColumnAliases, CAPEX, INTEREST_RATE, OPEX, SALVAGE_VALUE, YEAR,
};
use anyhow::{bail, Error};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub defaults: Option<Defaults>,
	pub columns: Option<Columns>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Defaults {
	/// Uniform interest rate (percent) replacing every file's rates when
	/// `--rate` is not given.
	pub override_rate: Option<f64>,
	pub precision: Option<u32>,
	pub delimiter: Option<char>,
}

/// Input header to use for each canonical column, for sheets that don't
/// follow the template's naming.
#[derive(Debug, Default, Deserialize)]
pub struct Columns {
	pub year: Option<String>,
	pub capex: Option<String>,
	pub opex: Option<String>,
	pub interest_rate: Option<String>,
	pub salvage_value: Option<String>,
}

impl Config {
	pub fn override_rate(&self) -> Option<f64> {
		self.defaults.as_ref().and_then(|d| d.override_rate)
	}

	pub fn precision(&self) -> Option<u32> {
		self.defaults.as_ref().and_then(|d| d.precision)
	}

	/// The configured delimiter as a single byte; the csv crate only deals
	/// in ASCII delimiters.
	pub fn delimiter(&self) -> Result<Option<u8>, Error> {
		match self.defaults.as_ref().and_then(|d| d.delimiter) {
			None => Ok(None),
			Some(c) if c.is_ascii() => Ok(Some(c as u8)),
			Some(c) => bail!("Delimiter must be an ASCII character, got {:?}", c),
		}
	}

	pub fn aliases(&self) -> ColumnAliases {
		let mut aliases = ColumnAliases::new();
		if let Some(columns) = &self.columns {
			let pairs = [
				(&columns.year, YEAR),
				(&columns.capex, CAPEX),
				(&columns.opex, OPEX),
				(&columns.interest_rate, INTEREST_RATE),
				(&columns.salvage_value, SALVAGE_VALUE),
			];
			for (alias, canonical) in pairs {
				if let Some(alias) = alias {
					aliases.add(alias, canonical);
				}
			}
		}
		aliases
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_config() {
		let config: Config = toml::from_str("").unwrap();
		assert!(config.override_rate().is_none());
		assert!(config.precision().is_none());
		assert_eq!(config.aliases().resolve("Period"), "period");
	}

	#[test]
	fn test_full_config() {
		let content = r#"
			[defaults]
			override_rate = 8.5
			precision = 3
			delimiter = ";"

			[columns]
			year = "Period"
			salvage_value = "Residual"
		"#;
		let config: Config = toml::from_str(content).unwrap();
		assert_eq!(config.override_rate(), Some(8.5));
		assert_eq!(config.precision(), Some(3));
		assert_eq!(config.delimiter().unwrap(), Some(b';'));

		let aliases = config.aliases();
		assert_eq!(aliases.resolve("period"), "year");
		assert_eq!(aliases.resolve("RESIDUAL"), "salvage_value");
	}

	#[test]
	fn test_non_ascii_delimiter() {
		let config: Config =
			toml::from_str("[defaults]\ndelimiter = \"§\"").unwrap();
		assert!(config.delimiter().is_err());
	}
}
