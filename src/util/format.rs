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

/// Formats a scalar as a two-decimal figure with comma thousands grouping
/// and no currency symbol, e.g. `-1,234.50`.
///
/// A value that rounds to zero is always rendered without a sign.
pub fn format_currency(value: f64) -> String {
	let fixed = format!("{:.2}", value.abs());
	let (integer_part, fraction_part) =
		fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

	let mut int_str = integer_part.to_string();
	let mut i = int_str.len() as isize - 3;
	while i > 0 {
		int_str.insert(i as usize, ',');
		i -= 3;
	}

	let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
	if value < 0.0 && !rounds_to_zero {
		format!("-{}.{}", int_str, fraction_part)
	} else {
		format!("{}.{}", int_str, fraction_part)
	}
}
