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
use std::fmt;
use std::ops::Neg;

/// A signed value with a currency.
#[derive(Clone, Debug, PartialEq)]
pub struct Amount {
	pub currency: String,
	pub value: f64,
}

impl Amount {
	pub fn new(value: f64, currency: &str) -> Self {
		Self {
			value,
			currency: currency.to_string(),
		}
	}

	/// Returns a copy of this amount with the sign flipped.
	pub fn negate(&self) -> Self {
		-self.clone()
	}
}

impl Neg for Amount {
	type Output = Amount;
	fn neg(self) -> Self::Output {
		Self::Output {
			currency: self.currency,
			value: -self.value,
		}
	}
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.2} {}", self.value, self.currency)
	}
}
