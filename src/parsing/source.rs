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
use crate::error::{EolError, Result};
use crate::parsing::raw_table::RawTable;
use csv::ReaderBuilder;
use serde_json::Value;
use std::io::Read;

/// Anything that can turn a byte stream into a raw table.
pub trait TableSource {
	fn read<R: Read>(&self, reader: R) -> Result<RawTable>;
}

/// Delimited text with a header row.
pub struct CsvSource {
	delimiter: u8,
}

impl CsvSource {
	pub fn new() -> Self {
		Self { delimiter: b',' }
	}

	pub fn with_delimiter(delimiter: u8) -> Self {
		Self { delimiter }
	}
}

impl Default for CsvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl TableSource for CsvSource {
	fn read<R: Read>(&self, reader: R) -> Result<RawTable> {
		let mut rdr = ReaderBuilder::new()
			.delimiter(self.delimiter)
			.flexible(true)
			.from_reader(reader);

		let headers = rdr.headers()?.iter().map(str::to_string).collect();
		let mut table = RawTable::new(headers);

		for rec in rdr.records() {
			let rec = rec?;
			table.push_row(rec.iter().map(|c| Some(c.to_string())).collect());
		}

		Ok(table)
	}
}

/// A JSON array of flat objects, one per year. Keys become headers in the
/// order they are first seen.
pub struct JsonSource;

impl TableSource for JsonSource {
	fn read<R: Read>(&self, reader: R) -> Result<RawTable> {
		let value: Value = serde_json::from_reader(reader)?;
		let objects = match value {
			Value::Array(items) => items,
			_ => {
				return Err(EolError::MalformedSource(
					"expected an array of objects".to_string(),
				))
			},
		};

		let mut headers: Vec<String> = Vec::new();
		for (i, item) in objects.iter().enumerate() {
			let Value::Object(map) = item else {
				return Err(EolError::MalformedSource(format!(
					"element {} is not an object",
					i
				)));
			};
			for key in map.keys() {
				if !headers.contains(key) {
					headers.push(key.clone());
				}
			}
		}

		let mut table = RawTable::new(headers.clone());
		for (i, item) in objects.iter().enumerate() {
			let mut cells = Vec::with_capacity(headers.len());
			for header in &headers {
				let cell = match item.get(header) {
					None | Some(Value::Null) => None,
					Some(Value::String(s)) => Some(s.clone()),
					Some(Value::Number(n)) => Some(n.to_string()),
					Some(Value::Bool(b)) => Some(b.to_string()),
					Some(_) => {
						return Err(EolError::MalformedSource(format!(
							"element {} has a nested value under {:?}",
							i, header
						)))
					},
				};
				cells.push(cell);
			}
			table.push_row(cells);
		}

		Ok(table)
	}
}
