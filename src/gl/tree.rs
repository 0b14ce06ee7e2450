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
use crate::gl::multi_sum::MultiCurrencySum;
use crate::util::amount::Amount;
use anyhow::{bail, Error};
use std::collections::BTreeMap;

/// Per category path sums, as produced by the ledger's netting step.
pub type CategorySums = BTreeMap<CategoryPath, MultiCurrencySum>;

/// One top-level category and everything booked below it. For example, with
/// the paths
///
/// Food
/// Food / Groceries
/// Food / Cafe
///
/// the `Food` node holds the first path's amounts in `own`, one entry each
/// for Groceries and Cafe in `subcategories`, and all three in `cumulative`.
///
/// `cumulative` equals `own` plus every subcategory, per currency, after
/// every `add`.
#[derive(Debug, Default)]
pub struct TopLevelCategory {
	pub name: String,

	/// Amounts booked directly on the top level, not on any subcategory.
	pub own: MultiCurrencySum,
	pub cumulative: MultiCurrencySum,
	pub subcategories: BTreeMap<String, MultiCurrencySum>, // name -> sum
}

impl TopLevelCategory {
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_string(),
			..Default::default()
		}
	}

	pub fn add(
		&mut self,
		path: &CategoryPath,
		amount: &Amount,
	) -> Result<(), Error> {
		if path.top() != self.name {
			bail!(
				"cannot book {} under top-level category {}",
				path,
				self.name
			);
		}

		self.cumulative.add(amount);

		match path.sub() {
			None => self.own.add(amount),
			Some(sub) => self
				.subcategories
				.entry(sub.to_string())
				.or_insert_with(MultiCurrencySum::new)
				.add(amount),
		}

		Ok(())
	}

	pub fn has_subcategories(&self) -> bool {
		!self.subcategories.is_empty()
	}
}

/// Two-level category hierarchy built once from pre-aggregated sums.
#[derive(Debug, Default)]
pub struct CategoryTree {
	pub top_level_categories: BTreeMap<String, TopLevelCategory>,
}

impl CategoryTree {
	pub fn new(sums: &CategorySums) -> Result<Self, Error> {
		let mut tree = Self::default();

		for (path, sum) in sums {
			let top_level = tree
				.top_level_categories
				.entry(path.top().to_string())
				.or_insert_with(|| TopLevelCategory::new(path.top()));

			for amount in sum.items() {
				top_level.add(path, &amount)?;
			}
		}

		Ok(tree)
	}

	pub fn get(&self, name: &str) -> Option<&TopLevelCategory> {
		self.top_level_categories.get(name)
	}
}
