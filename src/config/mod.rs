// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. The catalog
//! access token may also be supplied through the environment, which takes
//! precedence over the file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tmdb::{TmdbSettings, image::ImageSize};

const CONFIG_NAME: &str = "moviegrid";

pub(crate) const TOKEN_ENV_VAR: &str = "TMDB_TOKEN";

const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub include_adult: bool,
    pub access_token: Option<String>,
    pub poster_size: ImageSize,
    pub backdrop_size: ImageSize,
    pub connect_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            include_adult: false,
            access_token: None,
            poster_size: ImageSize::W500,
            backdrop_size: ImageSize::Original,
            connect_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Resolves the access token, preferring a non-empty environment value.
    pub(crate) fn resolve_access_token(&self, env_token: Option<String>) -> Option<String> {
        env_token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.access_token.clone())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Builds the HTTP client settings, reading the token from the
    /// environment.
    pub(crate) fn tmdb_settings(&self) -> TmdbSettings {
        let env_token = std::env::var(TOKEN_ENV_VAR).ok();

        TmdbSettings {
            base_url: self.api_base_url.clone(),
            access_token: self.resolve_access_token(env_token),
            language: self.language.clone(),
            include_adult: self.include_adult,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

pub fn load_config() -> AppConfig {
    match confy::load(CONFIG_NAME, None) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load configuration, using defaults");
            AppConfig::default()
        }
    }
}
