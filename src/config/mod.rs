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
//! This module manages the application configuration file. A missing or
//! unreadable file yields the defaults, and every section tolerates missing
//! keys so older files keep loading.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{carousel::Settings, contact::submit::Recipient};

const CONFIG_NAME: &str = "folio";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub draft_database: String,
    pub log_file: String,
    pub contact: ContactConfig,
    pub carousel: CarouselConfig,
    pub ui: UiConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub owner_name: String,
    pub owner_email: String,
    pub endpoint: String,
    /// Base for site-relative project links such as `/games/dungeon`.
    pub site_url: String,
    pub request_timeout_secs: u64,
    pub fallback_delay_ms: u64,
    pub links: Vec<SocialLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    /// Card width in terminal cells.
    pub item_width: u16,
    pub gap: u16,
    /// Cells per second at 1x.
    pub base_speed: f64,
    pub duplication_factor: usize,
    pub speed_choices: Vec<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub reduced_motion: bool,
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            draft_database: "folio.db".to_string(),
            log_file: "folio.log".to_string(),
            contact: ContactConfig::default(),
            carousel: CarouselConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            owner_name: "Greyber Sojo".to_string(),
            owner_email: "greybersojo@gmail.com".to_string(),
            endpoint: "http://localhost:3000/api/contact".to_string(),
            site_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 10,
            fallback_delay_ms: 600,
            links: vec![
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/greyber-sojo".to_string(),
                },
                SocialLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com/GreyberSojo".to_string(),
                },
                SocialLink {
                    name: "Itch.io".to_string(),
                    url: "https://itch.io/profile".to_string(),
                },
            ],
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: 34,
            gap: 2,
            base_speed: 8.0,
            duplication_factor: 2,
            speed_choices: vec![0.5, 1.0, 2.0],
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            tick_ms: 33,
        }
    }
}

impl ContactConfig {
    pub(crate) fn recipient(&self) -> Recipient {
        Recipient {
            name: self.owner_name.clone(),
            email: self.owner_email.clone(),
        }
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Turns a site-relative link into an absolute URL; absolute links pass
    /// through unchanged.
    pub fn resolve_link(&self, link: &str) -> String {
        if link.contains("://") {
            link.to_string()
        } else {
            format!(
                "{}/{}",
                self.site_url.trim_end_matches('/'),
                link.trim_start_matches('/')
            )
        }
    }
}

impl CarouselConfig {
    pub(crate) fn settings(&self) -> Settings {
        Settings {
            item_width: f64::from(self.item_width),
            gap: f64::from(self.gap),
            base_speed: self.base_speed,
            duplication_factor: self.duplication_factor,
        }
    }

    /// The configured speed multipliers, or `1x` alone if none are usable.
    pub fn speeds(&self) -> Vec<f64> {
        let speeds: Vec<f64> = self
            .speed_choices
            .iter()
            .copied()
            .filter(|s| s.is_finite() && *s > 0.0)
            .collect();
        if speeds.is_empty() { vec![1.0] } else { speeds }
    }
}

impl UiConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.clamp(10, 1000))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stored_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");

        let mut config = AppConfig::default();
        config.carousel.base_speed = 12.5;
        config.contact.endpoint = "https://example.com/api/contact".to_string();
        confy::store_path(&path, &config).unwrap();

        let loaded: AppConfig = confy::load_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "version = 1\n[ui]\nreduced_motion = true\n").unwrap();

        let loaded: AppConfig = confy::load_path(&path).unwrap();
        assert!(loaded.ui.reduced_motion);
        assert_eq!(loaded.ui.tick_ms, 33);
        assert_eq!(loaded.contact, ContactConfig::default());
    }

    #[test]
    fn relative_links_resolve_against_site() {
        let contact = ContactConfig {
            site_url: "https://me.dev/".to_string(),
            ..ContactConfig::default()
        };
        assert_eq!(contact.resolve_link("/games/truco"), "https://me.dev/games/truco");
        assert_eq!(contact.resolve_link("/"), "https://me.dev/");
        assert_eq!(
            contact.resolve_link("https://github.com/x"),
            "https://github.com/x"
        );
    }

    #[test]
    fn unusable_speeds_fall_back_to_one() {
        let carousel = CarouselConfig {
            speed_choices: vec![0.0, -1.0],
            ..CarouselConfig::default()
        };
        assert_eq!(carousel.speeds(), vec![1.0]);
        assert_eq!(CarouselConfig::default().speeds(), vec![0.5, 1.0, 2.0]);
    }
}
