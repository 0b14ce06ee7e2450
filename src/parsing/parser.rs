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
use crate::gl::ledger::Ledger;
use crate::gl::transaction::{Posting, Transaction};
use crate::parsing::filesystem::Filesystem;
use crate::util::amount::Amount;
use anyhow::{anyhow, bail, Error};
use chrono::NaiveDate;
use csv::StringRecord;
use std::io::Read;
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns every transaction record must have. Exports may append more.
const MIN_COLUMNS: usize = 10;

/// Reads ZenMoney CSV exports into a ledger.
///
/// An export starts with a preamble of arbitrary rows; the row whose first
/// cell is `date` is the column header, and everything after it is one
/// transaction per row:
///
/// date, category, payee, comment,
/// outgoing account, outgoing amount, outgoing currency,
/// incoming account, incoming amount, incoming currency, ...
pub struct Parser {
	fs: Filesystem,
}

impl Parser {
	pub fn new() -> Self {
		Self {
			fs: Filesystem::new(),
		}
	}

	/// Parses every file into the ledger, in the order given.
	pub fn parse_files(
		&mut self,
		file_paths: &[String],
		ledger: &mut Ledger,
	) -> Result<(), Error> {
		for file_path in file_paths {
			let file = self.fs.open(file_path)?;
			let transactions = parse_export(file)
				.map_err(|e| anyhow!("{}: {}", file_path, e))?;

			info!(
				"read {} transactions from {}",
				transactions.len(),
				file_path
			);
			ledger.extend(transactions);
		}

		Ok(())
	}
}

pub fn parse_export<R: Read>(reader: R) -> Result<Vec<Transaction>, Error> {
	let mut csv_reader = csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.from_reader(reader);

	let mut transactions = Vec::new();
	let mut in_preamble = true;

	for result in csv_reader.records() {
		let record = result?;
		let line = record.position().map_or(0, |p| p.line());

		if in_preamble {
			if record.get(0) == Some("date") {
				in_preamble = false;
			} else {
				debug!("skipping preamble line {}", line);
			}
			continue;
		}

		let transaction = parse_record(&record)
			.map_err(|e| anyhow!("line {}: {}", line, e))?;
		transactions.push(transaction);
	}

	if in_preamble {
		bail!("no header row starting with \"date\" found");
	}

	Ok(transactions)
}

fn parse_record(record: &StringRecord) -> Result<Transaction, Error> {
	if record.len() < MIN_COLUMNS {
		bail!(
			"expected at least {} columns, found {}",
			MIN_COLUMNS,
			record.len()
		);
	}

	let cell = |i: usize| record.get(i).unwrap_or_default();

	let date = NaiveDate::parse_from_str(cell(0), DATE_FORMAT)
		.map_err(|e| anyhow!("bad date \"{}\": {}", cell(0), e))?;

	Ok(Transaction {
		date,
		category: cell(1).to_string(),
		payee: cell(2).to_string(),
		comment: cell(3).to_string(),
		outgoing: parse_posting(cell(4), cell(5), cell(6))?,
		incoming: parse_posting(cell(7), cell(8), cell(9))?,
	})
}

/// A side exists only when it names an account and carries an amount.
fn parse_posting(
	account: &str,
	value: &str,
	currency: &str,
) -> Result<Option<Posting>, Error> {
	if account.is_empty() {
		return Ok(None);
	}

	Ok(parse_amount(value, currency)?
		.map(|amount| Posting::new(account, amount)))
}

/// Parses an amount, accepting a decimal comma. Either cell being empty
/// means there is no amount.
fn parse_amount(value: &str, currency: &str) -> Result<Option<Amount>, Error> {
	if value.is_empty() || currency.is_empty() {
		return Ok(None);
	}

	let parsed = value
		.replace(',', ".")
		.parse::<f64>()
		.map_err(|e| anyhow!("bad amount \"{}\": {}", value, e))?;
	if !parsed.is_finite() {
		bail!("bad amount \"{}\": not a finite number", value);
	}

	Ok(Some(Amount::new(parsed, currency)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::gl::transaction::TransactionType;

	const HEADER: &str = "date,categoryName,payee,comment,outcomeAccountName,outcome,outcomeCurrencyShortTitle,incomeAccountName,income,incomeCurrencyShortTitle,createdDate,changedDate";

	fn export(rows: &[&str]) -> String {
		let mut out = String::from("\u{feff}Export;ZenMoney\n\n");
		out.push_str(HEADER);
		out.push('\n');
		for row in rows {
			out.push_str(row);
			out.push('\n');
		}
		out
	}

	#[test]
	fn test_parse_kinds() {
		let data = export(&[
			"2024-01-03,Food / Groceries,Shop,,Card,\"12,50\",EUR,,,,x,y",
			"2024-01-04,Salary,Employer,,,,,Card,1000,EUR,x,y",
			"2024-01-05,,,,Card,100,EUR,Savings,100,EUR,x,y",
		]);

		let txns = parse_export(data.as_bytes()).unwrap();
		assert_eq!(txns.len(), 3);

		assert_eq!(txns[0].kind().unwrap(), TransactionType::Outgoing);
		assert_eq!(txns[0].category, "Food / Groceries");
		assert_eq!(txns[0].payee, "Shop");
		assert_eq!(
			txns[0].outgoing,
			Some(Posting::new("Card", Amount::new(12.5, "EUR")))
		);

		assert_eq!(txns[1].kind().unwrap(), TransactionType::Income);
		assert_eq!(
			txns[1].incoming,
			Some(Posting::new("Card", Amount::new(1000.0, "EUR")))
		);

		assert_eq!(txns[2].kind().unwrap(), TransactionType::Transfer);
		assert_eq!(
			txns[2].date,
			NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
		);
	}

	#[test]
	fn test_empty_amount_or_currency_is_absent() {
		let data = export(&["2024-01-03,Food,,,Card,,EUR,Card,5,,x,y"]);

		let txns = parse_export(data.as_bytes()).unwrap();
		assert_eq!(txns[0].outgoing, None);
		assert_eq!(txns[0].incoming, None);
		assert!(txns[0].kind().is_err());
	}

	#[test]
	fn test_header_only() {
		let data = export(&[]);
		assert!(parse_export(data.as_bytes()).unwrap().is_empty());
	}

	#[test]
	fn test_missing_header_fails() {
		assert!(parse_export("a,b,c\n".as_bytes()).is_err());
	}

	#[test]
	fn test_short_row_fails() {
		let data = export(&["2024-01-03,Food,,,Card,5"]);
		let err = parse_export(data.as_bytes()).unwrap_err();
		assert!(err.to_string().contains("line 4"));
	}

	#[test]
	fn test_bad_values_fail() {
		let bad_date = export(&["03.01.2024,Food,,,Card,5,EUR,,,,x,y"]);
		assert!(parse_export(bad_date.as_bytes()).is_err());

		let bad_amount = export(&["2024-01-03,Food,,,Card,five,EUR,,,,x,y"]);
		assert!(parse_export(bad_amount.as_bytes()).is_err());
	}

	#[test]
	fn test_non_finite_amounts_fail() {
		for value in ["NaN", "inf", "-inf", "1e400"] {
			let row = format!("2024-01-03,Food,,,Card,{},USD,,,,x,y", value);
			let data = export(&[row.as_str()]);

			let err = parse_export(data.as_bytes()).unwrap_err().to_string();
			assert!(err.contains("not a finite number"), "{}: {}", value, err);
			assert!(err.contains("line 4"), "{}: {}", value, err);
		}
	}
}
