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
use crate::schedule::cost_schedule::CostSchedule;
use crate::schedule::year_label::YearLabel;
use serde::Serialize;

/// Every series derived from a schedule. Each vector has one value per
/// position of the schedule it was computed from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DerivedSeries {
	pub annuity_factor: Vec<f64>,
	pub capex_pv: Vec<f64>,
	pub capex_pv_cumsum: Vec<f64>,
	pub opex_pv: Vec<f64>,
	pub opex_pv_cumsum: Vec<f64>,
	pub total_pv_cumsum: Vec<f64>,
	pub salvage_pv: Vec<f64>,
	pub capex_annualized: Vec<f64>,
	pub opex_annualized: Vec<f64>,
	pub eac: Vec<f64>,
}

/// A schedule together with its derived series and the position of minimum
/// equivalent annual cost. Only the calculator builds these, so the series
/// always line up with the schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedSchedule {
	schedule: CostSchedule,
	series: DerivedSeries,
	optimal: usize,
}

/// A single position of an enriched schedule, flattened for exporters.
#[derive(Clone, Debug, Serialize)]
pub struct EnrichedRow<'a> {
	pub year: &'a YearLabel,
	pub capex: f64,
	pub opex: f64,
	pub interest_rate: f64,
	pub salvage_value: f64,
	pub annuity_factor: f64,
	#[serde(rename = "capex_PV")]
	pub capex_pv: f64,
	#[serde(rename = "capex_PV_cumsum")]
	pub capex_pv_cumsum: f64,
	#[serde(rename = "opex_PV")]
	pub opex_pv: f64,
	#[serde(rename = "opex_PV_cumsum")]
	pub opex_pv_cumsum: f64,
	#[serde(rename = "total_PV_cumsum")]
	pub total_pv_cumsum: f64,
	#[serde(rename = "salvage_PV")]
	pub salvage_pv: f64,
	pub capex_annualized: f64,
	pub opex_annualized: f64,
	#[serde(rename = "EAC")]
	pub eac: f64,
	pub optimal: bool,
}

/// The series a cost chart plots, plus where to put the EOL marker.
#[derive(Clone, Debug, Serialize)]
pub struct ChartData<'a> {
	pub year: Vec<&'a YearLabel>,
	pub opex: Vec<f64>,
	pub opex_annualized: Vec<f64>,
	pub capex: Vec<f64>,
	pub capex_annualized: Vec<f64>,
	#[serde(rename = "EAC")]
	pub eac: Vec<f64>,
	pub optimal_year: &'a YearLabel,
}

impl EnrichedSchedule {
	pub(crate) fn new(
		schedule: CostSchedule,
		series: DerivedSeries,
		optimal: usize,
	) -> Self {
		Self {
			schedule,
			series,
			optimal,
		}
	}

	pub fn schedule(&self) -> &CostSchedule {
		&self.schedule
	}

	pub fn series(&self) -> &DerivedSeries {
		&self.series
	}

	pub fn len(&self) -> usize {
		self.schedule.len()
	}

	pub fn is_empty(&self) -> bool {
		self.schedule.is_empty()
	}

	pub fn optimal_position(&self) -> usize {
		self.optimal
	}

	/// The economic optimal life, as the label of the minimizing row.
	pub fn optimal_year(&self) -> &YearLabel {
		&self.schedule.records()[self.optimal].year
	}

	pub fn optimal_eac(&self) -> f64 {
		self.series.eac[self.optimal]
	}

	pub fn row(&self, position: usize) -> Option<EnrichedRow<'_>> {
		let record = self.schedule.records().get(position)?;
		let s = &self.series;
		Some(EnrichedRow {
			year: &record.year,
			capex: record.capex,
			opex: record.opex,
			interest_rate: record.interest_rate,
			salvage_value: record.salvage_value,
			annuity_factor: s.annuity_factor[position],
			capex_pv: s.capex_pv[position],
			capex_pv_cumsum: s.capex_pv_cumsum[position],
			opex_pv: s.opex_pv[position],
			opex_pv_cumsum: s.opex_pv_cumsum[position],
			total_pv_cumsum: s.total_pv_cumsum[position],
			salvage_pv: s.salvage_pv[position],
			capex_annualized: s.capex_annualized[position],
			opex_annualized: s.opex_annualized[position],
			eac: s.eac[position],
			optimal: position == self.optimal,
		})
	}

	pub fn rows(&self) -> impl Iterator<Item = EnrichedRow<'_>> + '_ {
		(0..self.len()).filter_map(move |position| self.row(position))
	}

	pub fn chart_data(&self) -> ChartData<'_> {
		let records = self.schedule.records();
		ChartData {
			year: records.iter().map(|r| &r.year).collect(),
			opex: records.iter().map(|r| r.opex).collect(),
			opex_annualized: self.series.opex_annualized.clone(),
			capex: records.iter().map(|r| r.capex).collect(),
			capex_annualized: self.series.capex_annualized.clone(),
			eac: self.series.eac.clone(),
			optimal_year: self.optimal_year(),
		}
	}
}
