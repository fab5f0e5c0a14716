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

use crate::model::Metrics;

/// Formats a star count for the project table, abbreviating thousands.
///
/// Projects without stars get an empty string so the column stays quiet.
///
/// # Examples
///
/// ```
/// assert_eq!(format_stars(42), "★ 42");
/// assert_eq!(format_stars(1340), "★ 1.3k");
/// ```
pub(crate) fn format_stars(stars: u32) -> String {
    match stars {
        0 => String::new(),
        1..=999 => format!("★ {}", stars),
        _ => format!("★ {:.1}k", f64::from(stars) / 1000.0),
    }
}

/// Formats a speed multiplier the way the speed selector labels it.
pub(crate) fn format_speed(speed: f64) -> String {
    format!("{}x", speed)
}

/// Joins whatever repository metrics are present into one line.
pub(crate) fn format_metrics(metrics: &Metrics) -> String {
    let mut parts = Vec::new();
    if let Some(stars) = metrics.stars {
        parts.push(format!("★ {}", stars));
    }
    if let Some(language) = metrics.language.as_deref() {
        parts.push(language.to_string());
    }
    if let Some(updated) = metrics.last_updated {
        parts.push(format!("updated {}", updated.format("%b %Y")));
    }
    parts.join(" · ")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stars_abbreviate_thousands() {
        assert_eq!(format_stars(0), "");
        assert_eq!(format_stars(7), "★ 7");
        assert_eq!(format_stars(999), "★ 999");
        assert_eq!(format_stars(1340), "★ 1.3k");
    }

    #[test]
    fn speeds_drop_trailing_zero() {
        assert_eq!(format_speed(0.5), "0.5x");
        assert_eq!(format_speed(1.0), "1x");
        assert_eq!(format_speed(2.0), "2x");
    }

    #[test]
    fn metrics_skip_missing_parts() {
        let metrics = Metrics {
            stars: Some(12),
            last_updated: NaiveDate::from_ymd_opt(2025, 3, 1),
            language: None,
        };
        assert_eq!(format_metrics(&metrics), "★ 12 · updated Mar 2025");
        assert_eq!(format_metrics(&Metrics::default()), "");
    }
}
