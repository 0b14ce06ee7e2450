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
use crate::gl::multi_sum::MultiCurrencySum;
use crate::gl::transaction::{Transaction, TransactionType};
use crate::gl::tree::CategorySums;
use anyhow::Error;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::collections::BTreeMap;
use tracing::debug;

/// Granularity used to split a ledger for comparison reports.
#[derive(ValueEnum, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Period {
	#[default]
	Month,
	Year,
}

impl Period {
	/// Sortable label of the period containing the given date.
	pub fn label(&self, date: &NaiveDate) -> String {
		match self {
			Period::Month => date.format("%Y-%m").to_string(),
			Period::Year => date.format("%Y").to_string(),
		}
	}
}

#[derive(Debug, Default)]
pub struct Ledger {
	transactions: Vec<Transaction>,
}

impl Ledger {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn add(&mut self, transaction: Transaction) {
		self.transactions.push(transaction);
	}

	pub fn extend(&mut self, transactions: Vec<Transaction>) {
		self.transactions.extend(transactions);
	}

	pub fn transactions(&self) -> &[Transaction] {
		&self.transactions
	}

	pub fn is_empty(&self) -> bool {
		self.transactions.is_empty()
	}

	/// Keeps only the transactions dated within the inclusive range.
	pub fn between(self, begin: &NaiveDate, end: &NaiveDate) -> Self {
		Self {
			transactions: self
				.transactions
				.into_iter()
				.filter(|t| t.date >= *begin && t.date <= *end)
				.collect(),
		}
	}

	/// Partitions the ledger by period label. Periods without any
	/// transactions do not appear.
	pub fn split_by_period(self, period: Period) -> BTreeMap<String, Ledger> {
		let mut out: BTreeMap<String, Ledger> = BTreeMap::new();

		for transaction in self.transactions {
			out.entry(period.label(&transaction.date))
				.or_default()
				.add(transaction);
		}

		out
	}

	/// Sums spending per category path, then nets income against it.
	///
	/// Income only reduces a category that already has spending recorded in
	/// this ledger; income booked anywhere else is dropped. Transfers are
	/// ignored entirely.
	pub fn category_sums(&self) -> Result<CategorySums, Error> {
		let mut sums = CategorySums::new();

		for transaction in &self.transactions {
			if transaction.kind()? != TransactionType::Outgoing {
				continue;
			}
			if let Some(posting) = &transaction.outgoing {
				sums.entry(transaction.category_path()?)
					.or_insert_with(MultiCurrencySum::new)
					.add(&posting.amount);
			}
		}

		for transaction in &self.transactions {
			if transaction.kind()? != TransactionType::Income {
				continue;
			}
			let Some(posting) = &transaction.incoming else {
				continue;
			};

			// only paths with spending exist in sums at this point
			let path = transaction.category_path()?;
			match sums.get_mut(&path) {
				Some(sum) => sum.add(&posting.amount.negate()),
				None => debug!(
					"dropping income {} on {}: no spending in {}",
					posting.amount, transaction.date, path
				),
			}
		}

		Ok(sums)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::gl::category::CategoryPath;
	use crate::gl::transaction::tests::{expense, income};
	use crate::gl::transaction::Posting;
	use crate::util::amount::Amount;

	fn path(segments: &[&str]) -> CategoryPath {
		CategoryPath::new(segments).unwrap()
	}

	fn date(s: &str) -> NaiveDate {
		NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
	}

	#[test]
	fn test_expenses_accumulate() {
		let mut ledger = Ledger::new();
		ledger.add(expense("2024-01-01", "Food / Groceries", 60.0, "USD"));
		ledger.add(expense("2024-01-05", "Food / Groceries", 15.0, "USD"));
		ledger.add(expense("2024-01-07", "Food", 40.0, "USD"));
		ledger.add(expense("2024-01-07", "Food", 4.0, "EUR"));

		let sums = ledger.category_sums().unwrap();
		assert_eq!(sums.len(), 2);
		assert_eq!(sums[&path(&["Food", "Groceries"])].get("USD"), Some(75.0));
		assert_eq!(sums[&path(&["Food"])].get("USD"), Some(40.0));
		assert_eq!(sums[&path(&["Food"])].get("EUR"), Some(4.0));
	}

	#[test]
	fn test_income_nets_matching_expense() {
		let mut ledger = Ledger::new();
		ledger.add(expense("2024-01-01", "Food", 100.0, "USD"));
		ledger.add(income("2024-01-02", "Food", 30.0, "USD"));

		let sums = ledger.category_sums().unwrap();
		assert_eq!(sums[&path(&["Food"])].get("USD"), Some(70.0));
	}

	#[test]
	fn test_income_in_new_currency_is_netted() {
		let mut ledger = Ledger::new();
		ledger.add(expense("2024-01-01", "Food", 100.0, "USD"));
		ledger.add(income("2024-01-02", "Food", 5.0, "EUR"));

		let sums = ledger.category_sums().unwrap();
		let food = &sums[&path(&["Food"])];
		assert_eq!(food.get("USD"), Some(100.0));
		assert_eq!(food.get("EUR"), Some(-5.0));
	}

	#[test]
	fn test_income_without_expense_is_dropped() {
		let mut ledger = Ledger::new();
		ledger.add(expense("2024-01-01", "Food", 100.0, "USD"));
		ledger.add(income("2024-01-02", "Salary", 3000.0, "USD"));
		// same top level, but a different path
		ledger.add(income("2024-01-02", "Food / Cafe", 8.0, "USD"));

		let sums = ledger.category_sums().unwrap();
		assert_eq!(sums.len(), 1);
		assert!(!sums.contains_key(&path(&["Salary"])));
		assert!(!sums.contains_key(&path(&["Food", "Cafe"])));
	}

	#[test]
	fn test_income_order_does_not_matter() {
		let mut ledger = Ledger::new();
		ledger.add(income("2024-01-01", "Food", 30.0, "USD"));
		ledger.add(expense("2024-01-09", "Food", 100.0, "USD"));

		let sums = ledger.category_sums().unwrap();
		assert_eq!(sums[&path(&["Food"])].get("USD"), Some(70.0));
	}

	#[test]
	fn test_transfers_ignored() {
		let mut transfer = expense("2024-01-01", "", 500.0, "USD");
		transfer.incoming =
			Some(Posting::new("Savings", Amount::new(500.0, "USD")));

		let mut ledger = Ledger::new();
		ledger.add(transfer);

		assert!(ledger.category_sums().unwrap().is_empty());
	}

	#[test]
	fn test_between_is_inclusive() {
		let mut ledger = Ledger::new();
		ledger.add(expense("2024-01-01", "Food", 1.0, "USD"));
		ledger.add(expense("2024-01-15", "Food", 2.0, "USD"));
		ledger.add(expense("2024-01-31", "Food", 4.0, "USD"));
		ledger.add(expense("2024-02-01", "Food", 8.0, "USD"));

		let ledger = ledger.between(&date("2024-01-15"), &date("2024-01-31"));
		let sums = ledger.category_sums().unwrap();
		assert_eq!(sums[&path(&["Food"])].get("USD"), Some(6.0));
	}

	#[test]
	fn test_split_by_month() {
		let mut ledger = Ledger::new();
		ledger.add(expense("2024-01-01", "Food", 1.0, "USD"));
		ledger.add(expense("2024-01-31", "Food", 2.0, "USD"));
		ledger.add(expense("2024-03-01", "Food", 4.0, "USD"));

		let periods = ledger.split_by_period(Period::Month);
		let labels: Vec<&String> = periods.keys().collect();
		assert_eq!(labels, vec!["2024-01", "2024-03"]);
		assert_eq!(periods["2024-01"].transactions().len(), 2);
	}

	#[test]
	fn test_netting_is_per_period() {
		let mut ledger = Ledger::new();
		ledger.add(expense("2023-12-20", "Food", 50.0, "USD"));
		ledger.add(income("2024-01-02", "Food", 10.0, "USD"));

		let periods = ledger.split_by_period(Period::Year);
		let sums_2023 = periods["2023"].category_sums().unwrap();
		let sums_2024 = periods["2024"].category_sums().unwrap();

		assert_eq!(sums_2023[&path(&["Food"])].get("USD"), Some(50.0));
		assert!(sums_2024.is_empty());
	}

	#[test]
	fn test_malformed_category_fails() {
		let mut ledger = Ledger::new();
		ledger.add(expense("2024-01-01", "a / b / c", 1.0, "USD"));
		assert!(ledger.category_sums().is_err());
	}
}
