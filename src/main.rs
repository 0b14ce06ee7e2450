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
use crate::config::config_file::Config;
use crate::gl::ledger::{Ledger, Period};
use crate::gl::tree::CategoryTree;
use crate::parsing::filesystem::Filesystem;
use crate::reports::category_reporter::CategoryReporter;
use crate::reports::comparison_reporter::ComparisonReporter;
use crate::reports::rendered::RenderedReport;
use crate::reports::sum_renderer::{EmptySum, SumRenderer};
use crate::reports::table::Table;
use anyhow::{bail, Error};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::collections::BTreeMap;
use tracing::{debug, warn};

mod config;
mod gl;
mod parsing;
mod reports;
mod util;

#[derive(Parser)]
#[command(
	name = "zenalyzer",
	version,
	about = "Categorized summaries of ZenMoney exports"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The report to produce
	command: Directive,

	/// ZenMoney CSV exports to read
	#[arg(required = true)]
	files: Vec<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Ignore transactions prior to this date (YYYY-MM-DD)
	#[arg(short, long)]
	begin: Option<String>,

	/// Ignore transactions after this date (YYYY-MM-DD)
	#[arg(short, long)]
	end: Option<String>,

	/// Custom config file location (default: ~/.config/zenalyzer/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Convert all sums to this currency using the configured rates
	#[arg(short, long)]
	currency: Option<String>,

	/// Period length for the comparison report
	#[arg(short, long, value_enum, default_value_t = Period::Month)]
	period: Period,

	/// Output format
	#[arg(short, long, value_enum, default_value_t = Output::Table)]
	output: Output,

	/// Log diagnostics to stderr
	#[arg(short, long)]
	verbose: bool,
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Sum, // single-period summary
	Cmp, // period-by-period comparison
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Output {
	Table,
	Csv,
	Json,
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	util::logging::init_logging(args.verbose);

	let (begin, end) = get_range(&args)?;
	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;

	let mut ledger = Ledger::new();
	let mut parser = parsing::parser::Parser::new();
	parser.parse_files(&args.files, &mut ledger)?;

	let ledger = ledger.between(&begin, &end);
	if ledger.is_empty() {
		warn!("no transactions in the selected date range");
	}

	let report = match args.command {
		Directive::Sum => {
			let renderer = renderer(&args, &config, config.sum_empty())?;
			category_report(&ledger, &renderer)?
		},
		Directive::Cmp => {
			let renderer =
				renderer(&args, &config, config.comparison_empty())?;
			comparison_report(ledger, args.period, &renderer)?
		},
	};

	match args.output {
		Output::Table => Table::from_report(&report).print(),
		Output::Csv => report.write_csv(std::io::stdout().lock())?,
		Output::Json => println!("{}", report.to_json()?),
	}

	Ok(())
}

fn renderer(
	args: &Cli,
	config: &Config,
	empty: EmptySum,
) -> Result<SumRenderer, Error> {
	match &args.currency {
		Some(currency) => {
			let rates = config.rate_table(currency)?;
			debug!("converting all sums into {}", rates.base());
			Ok(SumRenderer::converted(rates))
		},
		None => Ok(SumRenderer::multiline(empty)),
	}
}

fn category_report(
	ledger: &Ledger,
	renderer: &SumRenderer,
) -> Result<RenderedReport, Error> {
	let tree = CategoryTree::new(&ledger.category_sums()?)?;
	CategoryReporter::new(&tree).report(renderer)
}

fn comparison_report(
	ledger: Ledger,
	period: Period,
	renderer: &SumRenderer,
) -> Result<RenderedReport, Error> {
	let mut trees = BTreeMap::new();

	for (label, period_ledger) in ledger.split_by_period(period) {
		debug!(
			"{}: {} transactions",
			label,
			period_ledger.transactions().len()
		);
		let tree = CategoryTree::new(&period_ledger.category_sums()?)?;
		trees.insert(label, tree);
	}

	ComparisonReporter::new(&trees).report(renderer)
}

fn get_range(args: &Cli) -> Result<(NaiveDate, NaiveDate), Error> {
	let begin = match &args.begin {
		Some(s) => parse_date(s)?,
		None => NaiveDate::MIN,
	};
	let end = match &args.end {
		Some(s) => parse_date(s)?,
		None => NaiveDate::MAX,
	};

	if begin > end {
		bail!("Begin date {} is after end date {}", begin, end);
	}

	Ok((begin, end))
}

fn parse_date(s: &str) -> Result<NaiveDate, Error> {
	NaiveDate::parse_from_str(s, "%Y-%m-%d")
		.map_err(|e| anyhow::anyhow!("Date format must be YYYY-MM-DD: {}", e))
}
