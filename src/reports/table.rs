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
use crate::reports::rendered::RenderedReport;
use std::fmt::Write;

/// Aligned plain-text printer for rendered reports.
///
/// A cell may hold several lines (multi-currency sums do); the row then
/// takes as many physical lines as its tallest cell, and every other cell is
/// padded out with blanks.
pub struct Table {
	column_count: usize,
	rows: Vec<Row>,
	right_align: Vec<bool>, // indicates columns by index
}

pub enum Row {
	Header(Vec<String>),
	Data(Vec<String>),
	Separator,
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			rows: Vec::new(),
			right_align: vec![false; column_count],
		}
	}

	/// Header, separator, then the data rows. Every column after the first
	/// two holds figures and is right-aligned.
	pub fn from_report(report: &RenderedReport) -> Self {
		let mut table = Table::new(report.width());
		table.right_align((2..report.width()).collect());

		table.add_header(report.header().to_vec());
		table.add_separator();
		for row in report.rows() {
			table.add_row(row.clone());
		}

		table
	}

	pub fn add_header(&mut self, row: Vec<String>) {
		self.rows.push(Row::Header(row));
	}

	pub fn add_row(&mut self, row: Vec<String>) {
		self.rows.push(Row::Data(row));
	}

	pub fn add_separator(&mut self) {
		self.rows.push(Row::Separator);
	}

	/// Specifies columns that should be right-aligned by index.
	pub fn right_align(&mut self, cols: Vec<usize>) {
		for col in cols {
			self.right_align[col] = true;
		}
	}

	pub fn print(&self) {
		println!();
		print!("{}", self.render());
	}

	pub fn render(&self) -> String {
		let mut max_widths = vec![0; self.column_count];

		for row in &self.rows {
			if let Row::Data(cells) | Row::Header(cells) = row {
				for (i, value) in cells.iter().enumerate() {
					for line in value.lines() {
						max_widths[i] = max_widths[i].max(line.chars().count());
					}
				}
			}
		}

		let mut out = String::new();
		for row in &self.rows {
			match row {
				Row::Header(cells) => {
					self.render_centered_row(&mut out, &max_widths, cells, " | ")
				},
				Row::Data(cells) => {
					self.render_data_row(&mut out, &max_widths, cells, "   ")
				},
				Row::Separator => self.render_separator(&mut out, &max_widths),
			}
		}

		out
	}

	fn render_data_row(
		&self,
		out: &mut String,
		max_widths: &[usize],
		cells: &[String],
		separator: &str,
	) {
		let split: Vec<Vec<&str>> =
			cells.iter().map(|c| c.lines().collect()).collect();
		let height = split.iter().map(|l| l.len()).max().unwrap_or(0).max(1);

		for line_no in 0..height {
			let mut line = String::new();
			for (i, lines) in split.iter().enumerate() {
				let value = lines.get(line_no).copied().unwrap_or("");
				let width = max_widths[i];
				if self.right_align[i] {
					let _ = write!(line, "{:>width$}", value, width = width);
				} else {
					let _ = write!(line, "{:<width$}", value, width = width);
				}
				if i < split.len() - 1 {
					line.push_str(separator);
				}
			}
			out.push_str(line.trim_end());
			out.push('\n');
		}
	}

	fn render_centered_row(
		&self,
		out: &mut String,
		max_widths: &[usize],
		cells: &[String],
		separator: &str,
	) {
		let mut line = String::new();
		for (i, value) in cells.iter().enumerate() {
			line.push_str(&Table::center_align(value, max_widths[i]));
			if i < cells.len() - 1 {
				line.push_str(separator);
			}
		}
		out.push_str(line.trim_end());
		out.push('\n');
	}

	fn render_separator(&self, out: &mut String, max_widths: &[usize]) {
		let total_width: usize = max_widths.iter().sum::<usize>()
			+ (3 * self.column_count.saturating_sub(1));
		out.push_str(&"-".repeat(total_width));
		out.push('\n');
	}

	fn center_align(value: &str, width: usize) -> String {
		let len = value.chars().count();
		if len >= width {
			return value.to_string();
		}
		let total_padding = width - len;
		let left_padding = total_padding / 2;
		let right_padding = total_padding - left_padding;

		format!(
			"{}{}{}",
			" ".repeat(left_padding),
			value,
			" ".repeat(right_padding)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn strings(cells: &[&str]) -> Vec<String> {
		cells.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn test_single_line_rows() {
		let mut report =
			RenderedReport::new(strings(&["Category", "Subcategory", "Sum"]));
		report
			.push_row(strings(&["Food", "", "-100.00 USD"]))
			.unwrap();
		report.push_row(strings(&["", "___", "-40.00 USD"])).unwrap();

		let rendered = Table::from_report(&report).render();
		let lines: Vec<&str> = rendered.lines().collect();

		assert_eq!(lines[0], "Category | Subcategory |     Sum");
		assert_eq!(lines[1], "-".repeat(8 + 11 + 11 + 6));
		assert_eq!(lines[2], "Food                     -100.00 USD");
		assert_eq!(lines[3], "           ___            -40.00 USD");
	}

	#[test]
	fn test_multiline_cells_expand() {
		let mut report = RenderedReport::new(strings(&["Category", "Sum"]));
		report
			.push_row(strings(&["Travel", "5.00 EUR +\n10.00 USD"]))
			.unwrap();

		let rendered = Table::from_report(&report).render();
		let lines: Vec<&str> = rendered.lines().collect();

		assert_eq!(lines.len(), 4);
		assert_eq!(lines[2], "Travel     5.00 EUR +");
		assert_eq!(lines[3], "           10.00 USD");
	}

	#[test]
	fn test_empty_cells_still_take_a_line() {
		let mut report = RenderedReport::new(strings(&["Category", "Sum"]));
		report.push_row(strings(&["Gifts", ""])).unwrap();

		let rendered = Table::from_report(&report).render();
		assert_eq!(rendered.lines().nth(2), Some("Gifts"));
	}
}
