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
use crate::gl::exchange_rates::RateTable;
use crate::reports::sum_renderer::EmptySum;
use anyhow::{anyhow, Error};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	/// Rate tables keyed by the currency they convert into, e.g.
	/// `[rates.USD]` holds `EUR = 1.08` meaning one EUR is 1.08 USD.
	pub rates: Option<BTreeMap<String, BTreeMap<String, f64>>>,
	pub report: Option<Report>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Report {
	/// How an empty sum is shown in the single-period report (default: zero).
	pub sum_empty: Option<EmptySum>,

	/// How an empty sum is shown in the comparison report (default: blank).
	pub comparison_empty: Option<EmptySum>,
}

impl Config {
	/// The rate table converting into `base`, which must be configured.
	pub fn rate_table(&self, base: &str) -> Result<RateTable, Error> {
		let rates = self
			.rates
			.as_ref()
			.and_then(|tables| tables.get(base))
			.ok_or_else(|| {
				anyhow!("no [rates.{}] table in config; cannot convert", base)
			})?;

		RateTable::new(base, rates.clone())
	}

	pub fn sum_empty(&self) -> EmptySum {
		self.report
			.as_ref()
			.and_then(|r| r.sum_empty)
			.unwrap_or(EmptySum::Zero)
	}

	pub fn comparison_empty(&self) -> EmptySum {
		self.report
			.as_ref()
			.and_then(|r| r.comparison_empty)
			.unwrap_or(EmptySum::Blank)
	}
}
