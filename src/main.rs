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
use anyhow::{bail, Error};
use clap::{ArgAction, Parser, ValueEnum};
use eol::calc::calculator::Calculator;
use eol::parsing::filesystem::{Filesystem, InputFormat};
use eol::reports::export::{ChartExport, CsvExport, JsonExport, WriteFormat};
use eol::reports::schedule_reporter::ScheduleReporter;
use std::fs::File;
use std::io::{self, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
	name = "eol",
	version,
	about = "Economic optimal life of an asset from its cost schedule"
)]
struct Cli {
	/// Specifies the input file (columns: year, capex, opex, and optionally
	/// interest_rate and salvage_value)
	#[arg(short)]
	file: String,

	/// Input format; inferred from the file extension if omitted
	#[arg(long = "in-format", value_enum)]
	in_format: Option<InFormat>,

	/// Output format
	#[arg(long = "out-format", value_enum, default_value = "table")]
	out_format: OutFormat,

	/// Write output here instead of stdout
	#[arg(short, long)]
	output: Option<String>,

	/// Uniform interest rate in percent, replacing the file's rates
	#[arg(short, long)]
	rate: Option<f64>,

	/// Decimal places to show in the table (and CSV, if given)
	#[arg(short, long)]
	precision: Option<u32>,

	/// Custom config file location (default: ~/.config/eol/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// More logging on stderr; repeat for more detail
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

impl Cli {
	/// Nobody wants more than this; it only stops runaway output.
	const MAX_PRECISION: u32 = 12;

	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if let Some(prec) = self.precision {
			if prec > Cli::MAX_PRECISION {
				bail!("Maximum precision is {}", Cli::MAX_PRECISION);
			}
		}

		Ok(())
	}
}

#[derive(ValueEnum, Clone, Copy, PartialEq)]
enum InFormat {
	Csv,
	Json,
}

#[derive(ValueEnum, Clone, Copy, PartialEq)]
enum OutFormat {
	Table, // aligned calculation table plus the EOL line
	Csv,
	Json,
	Chart, // chart series as JSON
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	args.validate()?;
	init_logging(args.verbose);

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;

	// config precision gets the same bound as the flag
	let precision = args.precision.or(config.precision());
	if precision.is_some_and(|p| p > Cli::MAX_PRECISION) {
		bail!("Maximum precision is {}", Cli::MAX_PRECISION);
	}

	let delimiter = config.delimiter()?;
	let format = match args.in_format {
		Some(InFormat::Csv) => InputFormat::Csv,
		Some(InFormat::Json) => InputFormat::Json,
		None => InputFormat::from_path(&args.file),
	};
	let table = fs.read_table(&args.file, format, delimiter)?;

	let rate_override = match (args.rate, config.override_rate()) {
		(Some(rate), _) => Some(rate),
		(None, Some(rate)) => {
			warn!(
				"override_rate {}% from the config file replaces the rates in {}",
				rate, args.file
			);
			Some(rate)
		},
		(None, None) => None,
	};

	let calculator = Calculator::new()
		.with_aliases(config.aliases())
		.with_rate_override(rate_override);
	let enriched = calculator.compute(&table)?;

	let mut writer: Box<dyn Write> = match &args.output {
		Some(path) => Box::new(File::create(path)?),
		None => Box::new(io::stdout()),
	};

	match args.out_format {
		OutFormat::Table => {
			let reporter = ScheduleReporter::new(
				&enriched,
				precision
					.map(|p| p as usize)
					.unwrap_or(ScheduleReporter::DEFAULT_PRECISION),
			);
			writer.write_all(reporter.render().as_bytes())?;
		},
		OutFormat::Csv => CsvExport::new()
			.with_delimiter(delimiter.unwrap_or(b','))
			.with_precision(args.precision.map(|p| p as usize))
			.write(&mut writer, &enriched)?,
		OutFormat::Json => JsonExport.write(&mut writer, &enriched)?,
		OutFormat::Chart => ChartExport.write(&mut writer, &enriched)?,
	}

	writer.flush()?;
	Ok(())
}

/// Logs go to stderr so they never mix with exported data. RUST_LOG wins
/// over the -v count when set.
fn init_logging(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}
