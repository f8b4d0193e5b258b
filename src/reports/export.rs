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
use crate::error::Result;
use crate::schedule::enriched::{EnrichedRow, EnrichedSchedule};
use crate::schedule::year_label::YearLabel;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

pub const CSV_HEADERS: [&str; 16] = [
	"year",
	"capex",
	"opex",
	"interest_rate",
	"salvage_value",
	"annuity_factor",
	"capex_PV",
	"capex_PV_cumsum",
	"opex_PV",
	"opex_PV_cumsum",
	"total_PV_cumsum",
	"salvage_PV",
	"capex_annualized",
	"opex_annualized",
	"EAC",
	"optimal",
];

pub trait WriteFormat {
	fn write<W: Write>(&self, w: W, schedule: &EnrichedSchedule) -> Result<()>;
}

/// One line per year with every input and derived column. Numbers are
/// written at full precision unless a precision is set.
pub struct CsvExport {
	delimiter: u8,
	precision: Option<usize>,
}

impl CsvExport {
	pub fn new() -> Self {
		Self {
			delimiter: b',',
			precision: None,
		}
	}

	pub fn with_delimiter(mut self, delimiter: u8) -> Self {
		self.delimiter = delimiter;
		self
	}

	pub fn with_precision(mut self, precision: Option<usize>) -> Self {
		self.precision = precision;
		self
	}

	fn number(&self, value: f64) -> String {
		match self.precision {
			Some(p) => format!("{:.*}", p, value),
			None => value.to_string(),
		}
	}
}

impl Default for CsvExport {
	fn default() -> Self {
		Self::new()
	}
}

impl WriteFormat for CsvExport {
	fn write<W: Write>(&self, w: W, schedule: &EnrichedSchedule) -> Result<()> {
		let mut wrt = WriterBuilder::new()
			.delimiter(self.delimiter)
			.from_writer(w);

		wrt.write_record(CSV_HEADERS)?;
		for row in schedule.rows() {
			let numbers = [
				row.capex,
				row.opex,
				row.interest_rate,
				row.salvage_value,
				row.annuity_factor,
				row.capex_pv,
				row.capex_pv_cumsum,
				row.opex_pv,
				row.opex_pv_cumsum,
				row.total_pv_cumsum,
				row.salvage_pv,
				row.capex_annualized,
				row.opex_annualized,
				row.eac,
			];

			let mut record = Vec::with_capacity(CSV_HEADERS.len());
			record.push(row.year.to_string());
			record.extend(numbers.iter().map(|v| self.number(*v)));
			record.push(row.optimal.to_string());
			wrt.write_record(&record)?;
		}
		wrt.flush()?;
		Ok(())
	}
}

#[derive(Serialize)]
struct JsonDocument<'a> {
	optimal_year: &'a YearLabel,
	optimal_position: usize,
	#[serde(rename = "optimal_EAC")]
	optimal_eac: f64,
	rows: Vec<EnrichedRow<'a>>,
}

/// The whole enriched schedule as a JSON document.
pub struct JsonExport;

impl WriteFormat for JsonExport {
	fn write<W: Write>(&self, mut w: W, schedule: &EnrichedSchedule) -> Result<()> {
		let doc = JsonDocument {
			optimal_year: schedule.optimal_year(),
			optimal_position: schedule.optimal_position(),
			optimal_eac: schedule.optimal_eac(),
			rows: schedule.rows().collect(),
		};
		serde_json::to_writer_pretty(&mut w, &doc)?;
		writeln!(w)?;
		Ok(())
	}
}

/// Only the series a cost chart needs, for handing to a plotting tool.
pub struct ChartExport;

impl WriteFormat for ChartExport {
	fn write<W: Write>(&self, mut w: W, schedule: &EnrichedSchedule) -> Result<()> {
		serde_json::to_writer_pretty(&mut w, &schedule.chart_data())?;
		writeln!(w)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::calc::calculator::enrich;
	use crate::schedule::cost_schedule::{CostSchedule, YearRecord};
	use serde_json::Value;

	fn sample() -> EnrichedSchedule {
		let schedule = CostSchedule::new(vec![
			YearRecord::new(1, 100.0, 10.0),
			YearRecord::new(2, 0.0, 20.0),
			YearRecord::new(3, 0.0, 30.0),
		])
		.unwrap();
		enrich(schedule).unwrap()
	}

	#[test]
	fn test_csv_export() {
		let mut out = Vec::new();
		CsvExport::new().write(&mut out, &sample()).unwrap();
		let text = String::from_utf8(out).unwrap();
		let lines: Vec<&str> = text.lines().collect();

		assert_eq!(lines.len(), 4);
		assert_eq!(lines[0], CSV_HEADERS.join(","));
		assert_eq!(lines[1], "1,100,10,0,0,1,100,100,10,10,110,0,100,10,110,false");
		assert_eq!(
			lines[3],
			"3,0,30,0,0,3,0,100,30,60,160,0,33.333333333333336,20,53.333333333333336,true"
		);
	}

	#[test]
	fn test_csv_export_precision_and_delimiter() {
		let mut out = Vec::new();
		CsvExport::new()
			.with_delimiter(b';')
			.with_precision(Some(2))
			.write(&mut out, &sample())
			.unwrap();
		let text = String::from_utf8(out).unwrap();
		assert!(text.lines().nth(3).unwrap().ends_with(";53.33;true"));
	}

	#[test]
	fn test_json_export() {
		let mut out = Vec::new();
		JsonExport.write(&mut out, &sample()).unwrap();
		let doc: Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(doc["optimal_year"], 3);
		assert_eq!(doc["optimal_position"], 2);
		assert_eq!(doc["rows"].as_array().unwrap().len(), 3);
		assert_eq!(doc["rows"][0]["EAC"], 110.0);
		assert_eq!(doc["rows"][2]["optimal"], true);
	}

	#[test]
	fn test_chart_export() {
		let mut out = Vec::new();
		ChartExport.write(&mut out, &sample()).unwrap();
		let doc: Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(doc["year"], serde_json::json!([1, 2, 3]));
		assert_eq!(doc["EAC"].as_array().unwrap().len(), 3);
		assert_eq!(doc["optimal_year"], 3);
	}
}
