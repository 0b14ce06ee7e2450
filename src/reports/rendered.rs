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
use anyhow::{anyhow, Error};
use serde::Serialize;
use std::io::Write;

/// The finished product of a reporter: a header and data rows of display
/// strings, every row as wide as the header. Blank cells are meaningful
/// (they visually group subcategories under their parent) and are kept
/// verbatim by every output format.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderedReport {
	header: Vec<String>,
	rows: Vec<Vec<String>>,
}

impl RenderedReport {
	pub fn new(header: Vec<String>) -> Self {
		Self {
			header,
			rows: Vec::new(),
		}
	}

	pub fn header(&self) -> &[String] {
		&self.header
	}

	pub fn rows(&self) -> &[Vec<String>] {
		&self.rows
	}

	pub fn width(&self) -> usize {
		self.header.len()
	}

	pub fn push_row(&mut self, row: Vec<String>) -> Result<(), Error> {
		if row.len() != self.width() {
			return Err(anyhow!(
				"report row has {} cells, header has {}",
				row.len(),
				self.width()
			));
		}
		self.rows.push(row);
		Ok(())
	}

	pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
		let mut csv_writer = csv::Writer::from_writer(writer);

		csv_writer.write_record(&self.header)?;
		for row in &self.rows {
			csv_writer.write_record(row)?;
		}

		csv_writer.flush()?;
		Ok(())
	}

	pub fn to_json(&self) -> Result<String, Error> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}
