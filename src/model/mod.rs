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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the project
//! records shown in the showcase and the filter selections applied to them,
//! together with the sub-modules that hold the static content and the pure
//! filtering logic.

pub(crate) mod catalog;
pub(crate) mod filter;
pub(crate) mod profile;

use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Game,
    Web,
    Tool,
    Qa,
}

impl Category {
    pub(crate) const ALL: [Category; 4] = [Category::Game, Category::Web, Category::Tool, Category::Qa];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Category::Game => "game",
            Category::Web => "web",
            Category::Tool => "tool",
            Category::Qa => "qa",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Wip,
    Done,
    Prototype,
}

impl Status {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Status::Wip => "WIP",
            Status::Done => "Done",
            Status::Prototype => "Prototype",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Media {
    Image { src: String },
    Video { src: String, poster: Option<String> },
}

impl Media {
    /// The still frame to show for this media, falling back to a generic cover
    /// for videos without a poster.
    pub(crate) fn preview(&self) -> &str {
        match self {
            Media::Image { src } => src,
            Media::Video { poster: Some(poster), .. } => poster,
            Media::Video { .. } => "/covers/fallback.webp",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) repo: Option<String>,
    pub(crate) demo: Option<String>,
    pub(crate) case_study: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkKind {
    Repo,
    Demo,
    CaseStudy,
}

impl LinkKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            LinkKind::Repo => "repository",
            LinkKind::Demo => "demo",
            LinkKind::CaseStudy => "case study",
        }
    }
}

impl Links {
    pub(crate) fn get(&self, kind: LinkKind) -> Option<&str> {
        match kind {
            LinkKind::Repo => self.repo.as_deref(),
            LinkKind::Demo => self.demo.as_deref(),
            LinkKind::CaseStudy => self.case_study.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metrics {
    pub(crate) stars: Option<u32>,
    pub(crate) last_updated: Option<NaiveDate>,
    pub(crate) language: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TestLevel {
    Smoke,
    Regression,
    E2e,
}

impl TestLevel {
    pub(crate) fn label(self) -> &'static str {
        match self {
            TestLevel::Smoke => "Smoke",
            TestLevel::Regression => "Regression",
            TestLevel::E2e => "E2E",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TestOutcome {
    Passed,
    Failed,
}

impl TestOutcome {
    pub(crate) fn label(self) -> &'static str {
        match self {
            TestOutcome::Passed => "passed",
            TestOutcome::Failed => "failed",
        }
    }
}

/// The test case behind a QA project and its last recorded run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestCase {
    /// Given/When/Then steps, in order. May be empty when only code is shown.
    pub(crate) steps: Vec<String>,
    pub(crate) expected: String,
    pub(crate) code: Option<String>,
    pub(crate) level: TestLevel,
    pub(crate) outcome: TestOutcome,
    pub(crate) duration_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Project {
    pub(crate) slug: String,
    pub(crate) title: String,
    pub(crate) summary: String,
    pub(crate) category: Category,
    pub(crate) year: u16,
    pub(crate) tech: Vec<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) media: Vec<Media>,
    pub(crate) links: Links,
    pub(crate) status: Option<Status>,
    pub(crate) featured: bool,
    pub(crate) metrics: Option<Metrics>,
    pub(crate) test_case: Option<TestCase>,
}

impl Project {
    pub(crate) fn stars(&self) -> u32 {
        self.metrics.as_ref().and_then(|m| m.stars).unwrap_or(0)
    }

    pub(crate) fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
