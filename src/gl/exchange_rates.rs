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
use anyhow::{anyhow, bail, Error};
use std::collections::BTreeMap;

/// Fixed conversion rates into one base currency. Each rate states how many
/// units of the base one unit of the keyed currency is worth.
///
/// Nothing is inferred: a currency without a configured rate cannot be
/// converted, and any attempt to do so fails. The base currency itself is
/// worth 1.0 unless the table says otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
	base: String,
	rates: BTreeMap<String, f64>, // currency -> units of base per unit
}

impl RateTable {
	pub fn new(
		base: &str,
		rates: BTreeMap<String, f64>,
	) -> Result<Self, Error> {
		for (currency, rate) in &rates {
			if !rate.is_finite() || *rate <= 0.0 {
				bail!(
					"rate for {} into {} must be positive, got {}",
					currency,
					base,
					rate
				);
			}
		}

		Ok(Self {
			base: base.to_string(),
			rates,
		})
	}

	pub fn base(&self) -> &str {
		&self.base
	}

	pub fn rate(&self, currency: &str) -> Result<f64, Error> {
		if let Some(rate) = self.rates.get(currency) {
			return Ok(*rate);
		}

		if currency == self.base {
			return Ok(1.0);
		}

		Err(anyhow!(
			"no exchange rate configured from {} to {}",
			currency,
			self.base
		))
	}

	/// Collapses every currency in the sum into a single figure in the base
	/// currency. Fails if any currency present lacks a rate.
	pub fn convert(&self, sum: &MultiCurrencySum) -> Result<f64, Error> {
		let mut converted = 0.0;

		for amount in sum.items() {
			converted += amount.value * self.rate(&amount.currency)?;
		}

		Ok(converted)
	}
}
