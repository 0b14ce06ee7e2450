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
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Diagnostics go to stderr so that stdout
/// only ever carries the rendered report. `RUST_LOG` takes precedence over
/// the verbosity flag.
pub fn init_logging(verbose: bool) {
	let default_directive = if verbose {
		"zenalyzer=debug"
	} else {
		"zenalyzer=warn"
	};

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	// no-op if a subscriber is already installed
	let _ = fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
