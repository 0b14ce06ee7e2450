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
use crate::util::amount::Amount;
use std::collections::BTreeMap;
use std::fmt;

/// Running totals held in any number of currencies at once. Currencies are
/// never converted into each other here; each one accumulates on its own.
///
/// A currency counts as present from its first `add`, even if later
/// additions bring it back to exactly zero. `is_nonzero` reports presence,
/// not value, so a fully netted-out category still shows up as `0.00`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiCurrencySum {
	totals: BTreeMap<String, f64>, // currency -> running total
}

impl MultiCurrencySum {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn add(&mut self, amount: &Amount) {
		*self
			.totals
			.entry(amount.currency.clone())
			.or_insert(0.0) += amount.value;
	}

	/// True iff at least one currency has been added to this sum.
	pub fn is_nonzero(&self) -> bool {
		!self.totals.is_empty()
	}

	#[cfg(test)]
	pub fn get(&self, currency: &str) -> Option<f64> {
		self.totals.get(currency).copied()
	}

	/// One amount per present currency, ordered by currency code.
	pub fn items(&self) -> impl Iterator<Item = Amount> + '_ {
		self.totals
			.iter()
			.map(|(currency, value)| Amount::new(*value, currency))
	}

	/// Renders each currency on its own line, joined with ` +`. An empty sum
	/// renders as an empty string.
	pub fn format_multiline(&self) -> String {
		self.items()
			.map(|a| a.to_string())
			.collect::<Vec<String>>()
			.join(" +\n")
	}
}

/// Single-line form; an empty sum displays as `0`.
impl fmt::Display for MultiCurrencySum {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.totals.is_empty() {
			return write!(f, "0");
		}

		let joined = self
			.items()
			.map(|a| a.to_string())
			.collect::<Vec<String>>()
			.join(", ");

		write!(f, "{}", joined)
	}
}
