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
use crate::config::config_file::Config;
use crate::parsing::raw_table::RawTable;
use crate::parsing::source::{CsvSource, JsonSource, TableSource};
use anyhow::{anyhow, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
	Csv,
	Json,
}

impl InputFormat {
	/// Guesses from the extension; anything that isn't .json is read as
	/// delimited text.
	pub fn from_path(file_path: &str) -> Self {
		match Path::new(file_path)
			.extension()
			.and_then(|e| e.to_str())
			.map(|e| e.to_lowercase())
		{
			Some(ext) if ext == "json" => InputFormat::Json,
			_ => InputFormat::Csv,
		}
	}
}

pub struct Filesystem;

impl Filesystem {
	pub fn new() -> Self {
		Self
	}

	pub fn open(&self, file_path: &str) -> Result<File, Error> {
		let path = Path::new(file_path);
		let file = File::open(path)
			.map_err(|e| anyhow!("unable to open {}: {}", file_path, e))?;
		Ok(file)
	}

	/// Reads the cost schedule at file_path into a raw table.
	pub fn read_table(
		&self,
		file_path: &str,
		format: InputFormat,
		delimiter: Option<u8>,
	) -> Result<RawTable, Error> {
		let reader = BufReader::new(self.open(file_path)?);
		debug!("reading {} as {:?}", file_path, format);

		let table = match format {
			InputFormat::Csv => {
				CsvSource::with_delimiter(delimiter.unwrap_or(b','))
					.read(reader)?
			},
			InputFormat::Json => JsonSource.read(reader)?,
		};
		Ok(table)
	}

	/// Fetches the config from the given path, or default path if none. A
	/// missing default config is not an error; a missing custom one is.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => {
				let home_dir = home_dir()
					.ok_or_else(|| anyhow!("Unable to determine home directory"))?;
				home_dir.join(".config/eol/config.toml")
			},
			Some(p) => PathBuf::from(p),
		};

		if !config_path.exists() && custom_config_path.is_none() {
			debug!("no config at {}, using defaults", config_path.display());
			return Ok(Config::default());
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("unable to read config {}: {}", config_path.display(), e)
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		Ok(config)
	}
}

impl Default for Filesystem {
	fn default() -> Self {
		Self::new()
	}
}
