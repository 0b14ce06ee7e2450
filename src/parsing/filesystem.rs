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
use crate::config::config_file::Config;
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use std::collections::HashSet;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct Filesystem {
	/// Set of input files that have been opened. The same export given
	/// twice would count every transaction twice.
	opened_files: HashSet<String>,
}

impl Filesystem {
	pub fn new() -> Self {
		Self {
			opened_files: HashSet::new(),
		}
	}

	pub fn open(&mut self, file_path: &str) -> Result<File, Error> {
		self.declare_file(file_path)?;
		let path = Path::new(file_path);
		File::open(path)
			.map_err(|e| anyhow!("cannot open {}: {}", file_path, e))
	}

	pub fn declare_file(&mut self, file_path: &str) -> Result<(), Error> {
		if self.opened_files.contains(file_path) {
			bail!("File given more than once: {}", file_path)
		}
		self.opened_files.insert(file_path.to_string());
		Ok(())
	}

	/// Fetches the config from the given path, or the default path if none.
	/// A missing file at the default location just means no configuration;
	/// a missing file that was asked for explicitly is an error.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => match home_dir() {
				Some(home) => home.join(".config/zenalyzer/config.toml"),
				None => {
					debug!("no home directory; using empty config");
					return Ok(Config::default());
				},
			},
			Some(p) => PathBuf::from(p),
		};

		if !config_path.exists() && custom_config_path.is_none() {
			debug!("no config at {}", config_path.display());
			return Ok(Config::default());
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("cannot read config {}: {}", config_path.display(), e)
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		debug!("loaded config from {}", config_path.display());
		Ok(config)
	}
}
