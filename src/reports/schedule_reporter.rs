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
use crate::reports::table::Table;
use crate::schedule::enriched::EnrichedSchedule;

const HEADERS: [&str; 16] = [
	"",
	"Year",
	"Capex",
	"Opex",
	"Rate %",
	"Salvage",
	"Annuity",
	"Capex PV",
	"Capex PV cum",
	"Opex PV",
	"Opex PV cum",
	"Total PV cum",
	"Salvage PV",
	"Capex ann.",
	"Opex ann.",
	"EAC",
];

/// Human-readable calculation table. Rounding happens here only; the
/// schedule keeps full precision.
pub struct ScheduleReporter<'a> {
	schedule: &'a EnrichedSchedule,
	precision: usize,
}

impl<'a> ScheduleReporter<'a> {
	pub const DEFAULT_PRECISION: usize = 2;

	pub fn new(schedule: &'a EnrichedSchedule, precision: usize) -> Self {
		Self {
			schedule,
			precision,
		}
	}

	/// The annotation shown alongside the chart in the original tool.
	pub fn summary(&self) -> String {
		format!("EOL is at year - {}", self.schedule.optimal_year())
	}

	pub fn render(&self) -> String {
		let mut table = Table::new(HEADERS.len());
		table.right_align((2..HEADERS.len()).collect());
		table.add_header(HEADERS.to_vec());
		table.add_separator();

		let p = self.precision;
		for row in self.schedule.rows() {
			let values = [
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

			let mut cells = Vec::with_capacity(HEADERS.len());
			cells.push(if row.optimal { "*" } else { "" }.to_string());
			cells.push(row.year.to_string());
			cells.extend(values.iter().map(|v| format!("{:.*}", p, v)));
			table.add_row(cells);
		}

		format!("{}\n{}\n", table.render(), self.summary())
	}
}
