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
use crate::gl::multi_sum::MultiCurrencySum;
use crate::util::format::format_currency;
use anyhow::Error;
use serde::Deserialize;

/// How a sum with no currencies at all is shown in multiline mode.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EmptySum {
	/// Rendered as the literal `0`.
	Zero,
	/// Rendered as an empty cell.
	Blank,
}

/// Chosen once per report: either show every currency separately, or reduce
/// each sum to one figure through a fixed rate table.
#[derive(Clone, Debug)]
pub enum Valuation {
	Multiline,
	Converted(RateTable),
}

/// Turns sums into report cells.
#[derive(Clone, Debug)]
pub struct SumRenderer {
	valuation: Valuation,
	empty: EmptySum,
}

impl SumRenderer {
	pub fn new(valuation: Valuation, empty: EmptySum) -> Self {
		Self { valuation, empty }
	}

	pub fn multiline(empty: EmptySum) -> Self {
		Self::new(Valuation::Multiline, empty)
	}

	pub fn converted(rates: RateTable) -> Self {
		Self::new(Valuation::Converted(rates), EmptySum::Blank)
	}

	/// Statistics only make sense over scalar values, so they are available
	/// only when sums are converted.
	pub fn has_statistics(&self) -> bool {
		matches!(self.valuation, Valuation::Converted(_))
	}

	/// The scalar value of the sum, or `None` in multiline mode.
	pub fn evaluate(
		&self,
		sum: &MultiCurrencySum,
	) -> Result<Option<f64>, Error> {
		match &self.valuation {
			Valuation::Multiline => Ok(None),
			Valuation::Converted(rates) => Ok(Some(rates.convert(sum)?)),
		}
	}

	pub fn render(&self, sum: &MultiCurrencySum) -> Result<String, Error> {
		match &self.valuation {
			Valuation::Converted(rates) => {
				Ok(format_currency(rates.convert(sum)?))
			},
			Valuation::Multiline => {
				if sum.is_nonzero() {
					return Ok(sum.format_multiline());
				}
				Ok(match self.empty {
					EmptySum::Zero => "0".to_string(),
					EmptySum::Blank => String::new(),
				})
			},
		}
	}
}
