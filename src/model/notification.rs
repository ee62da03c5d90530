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

//! Transient notifications shown in the status line.

use std::time::{Duration, Instant};

pub(crate) const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub(crate) struct Notification {
    pub(crate) message: String,
    pub(crate) level: NotificationLevel,
    expires_at: Instant,
}

impl Notification {
    pub(crate) fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self::expiring_at(message, level, Instant::now() + NOTIFICATION_LIFETIME)
    }

    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub(crate) fn expiring_at(
        message: impl Into<String>,
        level: NotificationLevel,
        expires_at: Instant,
    ) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at,
        }
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_lifetime() {
        let now = Instant::now();
        let notification =
            Notification::expiring_at("No movies found", NotificationLevel::Error, now + NOTIFICATION_LIFETIME);

        assert!(!notification.is_expired(now));
        assert!(notification.is_expired(now + NOTIFICATION_LIFETIME));
    }
}
