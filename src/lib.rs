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

//! Economic optimal life of an asset: the service year at which the
//! equivalent annual cost of capital plus operating cost, net of salvage, is
//! lowest.

pub mod calc;
pub mod config;
pub mod error;
pub mod parsing;
pub mod reports;
pub mod schedule;

pub use calc::calculator::{compute, enrich, Calculator};
pub use error::{ComputationError, EolError, Result, ValidationError};
pub use parsing::raw_table::RawTable;
pub use schedule::cost_schedule::{CostSchedule, YearRecord};
pub use schedule::enriched::{ChartData, DerivedSeries, EnrichedRow, EnrichedSchedule};
pub use schedule::year_label::YearLabel;
