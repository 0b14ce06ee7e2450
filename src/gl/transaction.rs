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
use crate::gl::category::CategoryPath;
use crate::util::amount::Amount;
use anyhow::{bail, Error};
use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionType {
	Income,
	Outgoing,
	Transfer,
}

/// One side of a transaction: money leaving or arriving at an account.
#[derive(Clone, Debug, PartialEq)]
pub struct Posting {
	pub account: String,
	pub amount: Amount,
}

impl Posting {
	pub fn new(account: &str, amount: Amount) -> Self {
		Self {
			account: account.to_string(),
			amount,
		}
	}
}

/// A single exported transaction, as parsed from one record.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
	pub date: NaiveDate,
	pub category: String, // raw, e.g. "Food / Groceries, Household"
	pub payee: String,
	pub comment: String,

	pub outgoing: Option<Posting>,
	pub incoming: Option<Posting>,
}

impl Transaction {
	/// Both sides present is a transfer between own accounts; otherwise the
	/// side that is present decides. A record with neither side is broken.
	pub fn kind(&self) -> Result<TransactionType, Error> {
		match (&self.outgoing, &self.incoming) {
			(Some(_), Some(_)) => Ok(TransactionType::Transfer),
			(Some(_), None) => Ok(TransactionType::Outgoing),
			(None, Some(_)) => Ok(TransactionType::Income),
			(None, None) => bail!(
				"transaction on {} ({}) has no outgoing or incoming side",
				self.date,
				self.payee
			),
		}
	}

	pub fn category_path(&self) -> Result<CategoryPath, Error> {
		CategoryPath::from_raw(&self.category)
	}
}
