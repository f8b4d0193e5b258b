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
use crate::calc::discount::{annuity_factor, present_value};
use crate::calc::normalize::schedule_from_table;
use crate::calc::series::{add, argmin_first, cumulative_sum, divide};
use crate::error::{ComputationError, Result};
use crate::parsing::raw_table::RawTable;
use crate::schedule::columns::ColumnAliases;
use crate::schedule::cost_schedule::CostSchedule;
use crate::schedule::enriched::{DerivedSeries, EnrichedSchedule};
use tracing::{debug, info};

/// Computes the economic optimal life of a cost schedule. Holds only the
/// knobs of a run; every call is independent.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
	aliases: ColumnAliases,
	rate_override: Option<f64>,
}

impl Calculator {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn with_aliases(mut self, aliases: ColumnAliases) -> Self {
		self.aliases = aliases;
		self
	}

	/// Applies one interest rate (percent) to every year, ignoring the
	/// schedule's own rates.
	pub fn with_rate_override(mut self, rate: Option<f64>) -> Self {
		self.rate_override = rate;
		self
	}

	/// Normalizes and validates the table, then enriches it. Nothing is
	/// returned unless every step succeeds.
	pub fn compute(&self, table: &RawTable) -> Result<EnrichedSchedule> {
		let table = table.normalized(&self.aliases)?;
		debug!("normalized headers: {:?}", table.headers());

		let schedule = schedule_from_table(&table, self.rate_override)?;
		Ok(enrich(schedule)?)
	}
}

/// Shorthand for a calculator without column aliases.
pub fn compute(
	table: &RawTable,
	rate_override: Option<f64>,
) -> Result<EnrichedSchedule> {
	Calculator::new().with_rate_override(rate_override).compute(table)
}

/// Derives every series for an already-resolved schedule and finds the year
/// of minimum equivalent annual cost.
pub fn enrich(
	schedule: CostSchedule,
) -> std::result::Result<EnrichedSchedule, ComputationError> {
	let records = schedule.records();

	let annuity: Vec<f64> = records
		.iter()
		.enumerate()
		.map(|(i, r)| annuity_factor(r.rate_fraction(), i))
		.collect();
	for (position, value) in annuity.iter().enumerate() {
		if !(*value > 0.0 && value.is_finite()) {
			return Err(ComputationError::InfeasibleAnnuityFactor {
				position,
				value: *value,
			});
		}
	}
	debug!("annuity factors: {:?}", annuity);

	// Capital is spent at the start of year i+1, so it is discounted over i
	// periods; operating cost and salvage fall at the end, over i+1.
	let capex_pv: Vec<f64> = records
		.iter()
		.enumerate()
		.map(|(i, r)| present_value(r.capex, r.rate_fraction(), i))
		.collect();
	let opex_pv: Vec<f64> = records
		.iter()
		.enumerate()
		.map(|(i, r)| present_value(r.opex, r.rate_fraction(), i + 1))
		.collect();
	let salvage_pv: Vec<f64> = records
		.iter()
		.enumerate()
		.map(|(i, r)| present_value(r.salvage_value, r.rate_fraction(), i + 1))
		.collect();

	let capex_pv_cumsum = cumulative_sum(&capex_pv);
	let opex_pv_cumsum = cumulative_sum(&opex_pv);
	let total_pv_cumsum = add(&capex_pv_cumsum, &opex_pv_cumsum);

	let capex_annualized = divide(&capex_pv_cumsum, &annuity);
	let opex_annualized = divide(&opex_pv_cumsum, &annuity);
	let eac: Vec<f64> = total_pv_cumsum
		.iter()
		.zip(&salvage_pv)
		.zip(&annuity)
		.map(|((total, salvage), factor)| (total - salvage) / factor)
		.collect();

	if let Some(position) = eac.iter().position(|v| !v.is_finite()) {
		return Err(ComputationError::NonFiniteEac { position });
	}

	let optimal = argmin_first(&eac).ok_or(ComputationError::EmptySeries)?;
	info!(
		"economic optimal life at {} (position {}), EAC {:.2}",
		records[optimal].year, optimal, eac[optimal]
	);

	let series = DerivedSeries {
		annuity_factor: annuity,
		capex_pv,
		capex_pv_cumsum,
		opex_pv,
		opex_pv_cumsum,
		total_pv_cumsum,
		salvage_pv,
		capex_annualized,
		opex_annualized,
		eac,
	};

	Ok(EnrichedSchedule::new(schedule, series, optimal))
}
