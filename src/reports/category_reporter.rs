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
use crate::gl::tree::CategoryTree;
use crate::reports::rendered::RenderedReport;
use crate::reports::sum_renderer::SumRenderer;
use anyhow::Error;

/// Subcategory label for amounts booked directly on a top-level category
/// that also has subcategories.
pub const OWN_ROW_LABEL: &str = "___";

/// Single-period report: one Sum column, categories sorted by name.
///
///     Category    Subcategory          Sum
///     Food                      -100.00 USD
///                 ___            -40.00 USD
///                 Groceries      -60.00 USD
pub struct CategoryReporter<'a> {
	tree: &'a CategoryTree,
}

impl<'a> CategoryReporter<'a> {
	pub fn new(tree: &'a CategoryTree) -> Self {
		Self { tree }
	}

	pub fn report(
		&self,
		renderer: &SumRenderer,
	) -> Result<RenderedReport, Error> {
		let mut report = RenderedReport::new(vec![
			"Category".to_string(),
			"Subcategory".to_string(),
			"Sum".to_string(),
		]);

		for (name, tlc) in &self.tree.top_level_categories {
			report.push_row(vec![
				name.clone(),
				String::new(),
				renderer.render(&tlc.cumulative)?,
			])?;

			// Without subcategories, own and cumulative are the same figure.
			if tlc.own.is_nonzero() && tlc.has_subcategories() {
				report.push_row(vec![
					String::new(),
					OWN_ROW_LABEL.to_string(),
					renderer.render(&tlc.own)?,
				])?;
			}

			for (subcategory, sum) in &tlc.subcategories {
				report.push_row(vec![
					String::new(),
					subcategory.clone(),
					renderer.render(sum)?,
				])?;
			}
		}

		Ok(report)
	}
}
