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
use crate::error::ValidationError;
use crate::schedule::columns::{is_canonical, ColumnAliases};
use std::collections::HashSet;
use tracing::{debug, warn};

/// An untyped, ordered table as handed over by a file source. Cells are kept
/// as text; blank cells are stored as missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
	headers: Vec<String>,
	rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
	pub fn new(headers: Vec<String>) -> Self {
		Self {
			headers,
			rows: Vec::new(),
		}
	}

	/// Adds a row, padding short rows with missing cells. Rows with every
	/// cell blank (typically trailing spreadsheet rows) are dropped.
	pub fn push_row(&mut self, cells: Vec<Option<String>>) {
		let mut row: Vec<Option<String>> = cells
			.into_iter()
			.map(|c| c.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
			.collect();

		if row.iter().all(Option::is_none) {
			debug!("skipping blank row after position {}", self.rows.len());
			return;
		}

		if row.len() > self.headers.len() {
			warn!(
				"row at position {} has {} cells but only {} headers; extra cells ignored",
				self.rows.len(),
				row.len(),
				self.headers.len()
			);
		}
		row.resize(self.headers.len(), None);
		self.rows.push(row);
	}

	pub fn headers(&self) -> &[String] {
		&self.headers
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// The cells of the column with exactly this header, top to bottom.
	pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
		let idx = self.headers.iter().position(|h| h == name)?;
		Some(self.rows.iter().map(|row| row[idx].as_deref()).collect())
	}

	/// Returns a copy whose headers are trimmed, lowercased and mapped through
	/// the aliases. Two headers landing on the same calculator column is an
	/// error. Other repeated headers are kept; lookups find the first.
	pub fn normalized(
		&self,
		aliases: &ColumnAliases,
	) -> Result<RawTable, ValidationError> {
		let mut seen = HashSet::new();
		let mut headers = Vec::with_capacity(self.headers.len());

		for header in &self.headers {
			let name = aliases.resolve(header);
			if !name.is_empty() && !seen.insert(name.clone()) {
				if is_canonical(&name) {
					return Err(ValidationError::DuplicateColumn { column: name });
				}
				warn!("column {} appears more than once; using the first", name);
			}
			headers.push(name);
		}

		Ok(RawTable {
			headers,
			rows: self.rows.clone(),
		})
	}
}
