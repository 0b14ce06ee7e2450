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
use anyhow::{bail, Error};
use std::fmt;

/// Label given to transactions whose top-level category is blank.
pub const UNCATEGORIZED: &str = "UNCATEGORIZED";

/// Identifies a top-level category and, optionally, one subcategory below
/// it. Both labels are guaranteed non-empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CategoryPath {
	top: String,
	sub: Option<String>,
}

impl CategoryPath {
	/// Builds a path from one or two segments. Anything else is a broken
	/// record upstream and is rejected.
	pub fn new(segments: &[&str]) -> Result<Self, Error> {
		match segments {
			[top] => Ok(Self {
				top: Self::checked(top, "top-level")?,
				sub: None,
			}),
			[top, sub] => Ok(Self {
				top: Self::checked(top, "top-level")?,
				sub: Some(Self::checked(sub, "subcategory")?),
			}),
			_ => bail!(
				"category path must have 1 or 2 segments, got {}",
				segments.len()
			),
		}
	}

	/// Derives the path from a raw export category such as
	/// `"Food / Groceries, Household"`. Only the first comma-separated
	/// category is used; a blank top level becomes `UNCATEGORIZED`.
	pub fn from_raw(raw: &str) -> Result<Self, Error> {
		let primary = raw.split(", ").next().unwrap_or_default();

		let mut segments: Vec<&str> = primary.split(" / ").collect();
		if segments[0].is_empty() {
			segments[0] = UNCATEGORIZED;
		}

		Self::new(&segments)
			.map_err(|e| anyhow::anyhow!("bad category \"{}\": {}", raw, e))
	}

	pub fn top(&self) -> &str {
		&self.top
	}

	pub fn sub(&self) -> Option<&str> {
		self.sub.as_deref()
	}

	fn checked(segment: &str, what: &str) -> Result<String, Error> {
		if segment.is_empty() {
			bail!("empty {} category label", what);
		}
		Ok(segment.to_string())
	}
}

impl fmt::Display for CategoryPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.sub {
			None => write!(f, "{}", self.top),
			Some(sub) => write!(f, "{} / {}", self.top, sub),
		}
	}
}
