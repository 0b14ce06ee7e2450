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
use crate::gl::tree::CategoryTree;
use crate::reports::category_reporter::OWN_ROW_LABEL;
use crate::reports::rendered::RenderedReport;
use crate::reports::sum_renderer::SumRenderer;
use crate::util::format::format_currency;
use anyhow::Error;
use std::collections::{BTreeMap, BTreeSet};

/// Side-by-side report over several periods, one column per period label in
/// ascending order. Rows follow the same layout as the single-period report.
///
/// When sums are converted to a scalar, two more columns carry the mean and
/// population standard deviation across all periods. A period in which a
/// category does not appear counts as zero for those figures.
pub struct ComparisonReporter<'a> {
	trees: &'a BTreeMap<String, CategoryTree>, // period label -> tree
}

impl<'a> ComparisonReporter<'a> {
	pub fn new(trees: &'a BTreeMap<String, CategoryTree>) -> Self {
		Self { trees }
	}

	pub fn report(
		&self,
		renderer: &SumRenderer,
	) -> Result<RenderedReport, Error> {
		let mut header =
			vec!["Category".to_string(), "Subcategory".to_string()];
		header.extend(self.trees.keys().cloned());
		if renderer.has_statistics() {
			header.push("Mean".to_string());
			header.push("Std-Dev".to_string());
		}
		let mut report = RenderedReport::new(header);

		let top_level_names: BTreeSet<&String> = self
			.trees
			.values()
			.flat_map(|tree| tree.top_level_categories.keys())
			.collect();

		for name in top_level_names {
			let mut top_row = PeriodRow::new(name, renderer);
			let mut own_row = PeriodRow::new("", renderer);
			let mut subcategories: BTreeSet<&String> = BTreeSet::new();

			// Checked across all periods, not per period.
			let mut has_own = false;
			let mut has_subcategories = false;

			for tree in self.trees.values() {
				match tree.get(name) {
					Some(tlc) => {
						top_row.push(&tlc.cumulative)?;
						own_row.push(&tlc.own)?;

						has_own |= tlc.own.is_nonzero();
						has_subcategories |= tlc.has_subcategories();
						subcategories.extend(tlc.subcategories.keys());
					},
					None => {
						top_row.push_absent();
						own_row.push_absent();
					},
				}
			}

			report.push_row(top_row.finish(""))?;

			if has_own && has_subcategories {
				report.push_row(own_row.finish(OWN_ROW_LABEL))?;
			}

			for subcategory in subcategories {
				let mut row = PeriodRow::new("", renderer);

				for tree in self.trees.values() {
					match tree
						.get(name)
						.and_then(|tlc| tlc.subcategories.get(subcategory))
					{
						Some(sum) => row.push(sum)?,
						None => row.push_absent(),
					}
				}

				report.push_row(row.finish(subcategory))?;
			}
		}

		Ok(report)
	}
}

/// One report row being filled in period by period, collecting scalar values
/// for the statistics columns as it goes.
struct PeriodRow<'r> {
	category: String,
	cells: Vec<String>,
	values: Vec<f64>,
	renderer: &'r SumRenderer,
}

impl<'r> PeriodRow<'r> {
	fn new(category: &str, renderer: &'r SumRenderer) -> Self {
		Self {
			category: category.to_string(),
			cells: Vec::new(),
			values: Vec::new(),
			renderer,
		}
	}

	/// Converts the sum at most once; the same scalar feeds both the cell
	/// and the statistics.
	fn push(&mut self, sum: &MultiCurrencySum) -> Result<(), Error> {
		match self.renderer.evaluate(sum)? {
			Some(value) => {
				self.cells.push(format_currency(value));
				self.values.push(value);
			},
			None => self.cells.push(self.renderer.render(sum)?),
		}
		Ok(())
	}

	fn push_absent(&mut self) {
		self.cells.push(String::new());
		if self.renderer.has_statistics() {
			self.values.push(0.0);
		}
	}

	fn finish(self, subcategory: &str) -> Vec<String> {
		let mut row = vec![self.category, subcategory.to_string()];
		row.extend(self.cells);

		if self.renderer.has_statistics() {
			let (mean, std_dev) = mean_and_std_dev(&self.values);
			row.push(format_currency(mean));
			row.push(format_currency(std_dev));
		}

		row
	}
}

/// Mean and population standard deviation. Both are zero for no values.
fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
	if values.is_empty() {
		return (0.0, 0.0);
	}

	let n = values.len() as f64;
	let mean = values.iter().sum::<f64>() / n;
	let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

	(mean, variance.sqrt())
}
