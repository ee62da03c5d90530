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

//! Diagnostic logging.
//!
//! Anything written to stdout or stderr would corrupt the TUI, so logging is
//! off unless `MOVIEGRID_LOG` names a file to append to. The level is taken
//! from `RUST_LOG`, defaulting to `info`.

use std::{fs::OpenOptions, sync::Mutex};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV_VAR: &str = "MOVIEGRID_LOG";

pub(crate) fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV_VAR).filter(|p| !p.is_empty()) else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            // The terminal is not yet in raw mode, so this is still visible
            eprintln!("Failed to open log file {}: {e}", log_path.to_string_lossy());
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(file_layer).init();
}
