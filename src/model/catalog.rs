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

//! The project catalog.
//!
//! The full set of showcased projects is fixed at build time. It is loaded
//! once at startup and never mutated.

use chrono::NaiveDate;

use crate::model::{Category, Links, Media, Metrics, Project, Status, TestCase, TestLevel, TestOutcome};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn image(src: &str) -> Media {
    Media::Image { src: src.to_string() }
}

fn video(src: &str, poster: &str) -> Media {
    Media::Video {
        src: src.to_string(),
        poster: Some(poster.to_string()),
    }
}

fn links(repo: Option<&str>, demo: Option<&str>, case_study: Option<&str>) -> Links {
    Links {
        repo: repo.map(str::to_string),
        demo: demo.map(str::to_string),
        case_study: case_study.map(str::to_string),
    }
}

fn metrics(stars: u32, (y, m, d): (i32, u32, u32), language: &str) -> Option<Metrics> {
    Some(Metrics {
        stars: Some(stars),
        last_updated: NaiveDate::from_ymd_opt(y, m, d),
        language: Some(language.to_string()),
    })
}

/// Builds the catalog in its canonical order.
pub(crate) fn projects() -> Vec<Project> {
    vec![
        Project {
            slug: "dungeon-crawler".into(),
            title: "Dungeon Crawler".into(),
            summary: "2D prototype with loot, procedural rooms and basic real-time combat.".into(),
            category: Category::Game,
            year: 2025,
            tech: strings(&["Godot", "GDScript", "Tilemaps"]),
            tags: strings(&["Procedural", "2D", "Pixel"]),
            media: vec![video("/games/dungeon-preview.mp4", "/games/game1.jpg")],
            links: links(
                Some("https://github.com/greyber/dungeon-crawler"),
                Some("/games/dungeon"),
                Some("/projects/dungeon-crawler"),
            ),
            status: Some(Status::Prototype),
            featured: false,
            metrics: metrics(12, (2025, 7, 20), "GDScript"),
            test_case: None,
        },
        Project {
            slug: "pixel-shooter".into(),
            title: "Pixel Shooter".into(),
            summary: "Arcade shooter with waves, power-ups and a simple particle system.".into(),
            category: Category::Game,
            year: 2024,
            tech: strings(&["Unity", "C#"]),
            tags: strings(&["Shooter", "Arcade", "FX", "2D"]),
            media: vec![video("/games/shooter-preview.mp4", "/games/game2.jpg")],
            links: links(
                Some("https://github.com/greyber/pixel-shooter"),
                Some("/games/shooter"),
                Some("/projects/pixel-shooter"),
            ),
            status: Some(Status::Prototype),
            featured: false,
            metrics: metrics(9, (2025, 7, 5), "C#"),
            test_case: None,
        },
        Project {
            slug: "truco-argentino".into(),
            title: "Truco Argentino (Godot)".into(),
            summary: "Rules of Truco: envido, optional flor, truco/retruco/vale cuatro. Simple UI with logic ready for AI and online play.".into(),
            category: Category::Game,
            year: 2025,
            tech: strings(&["Godot", "GDScript", "State Machines"]),
            tags: strings(&["Cards", "AI (roadmap)", "Online (roadmap)"]),
            media: vec![video("/games/truco-preview.mp4", "/games/game3.jpg")],
            links: links(
                Some("https://github.com/greyber/truco-godot"),
                Some("/games/truco"),
                Some("/projects/truco-argentino"),
            ),
            status: Some(Status::Wip),
            featured: true,
            metrics: metrics(21, (2025, 8, 10), "GDScript"),
            test_case: None,
        },
        Project {
            slug: "portfolio-website".into(),
            title: "This site (Portfolio)".into(),
            summary: "Portfolio with dark/light themes, animated sections, SEO and reusable components.".into(),
            category: Category::Web,
            year: 2025,
            tech: strings(&["Next.js", "Tailwind", "Framer Motion", "shadcn/ui"]),
            tags: strings(&["SEO", "Accessibility", "Animations"]),
            media: vec![image("/covers/portfolio-cover.webp")],
            links: links(
                Some("https://github.com/greyber/portfolio"),
                Some("/"),
                Some("/projects/portfolio-website"),
            ),
            status: Some(Status::Done),
            featured: true,
            metrics: metrics(5, (2025, 8, 15), "TypeScript"),
            test_case: None,
        },
        Project {
            slug: "qa-automation-playwright".into(),
            title: "QA Automation (Playwright)".into(),
            summary: "UI and API test suite with Playwright fixtures, screenshots and HTML reports.".into(),
            category: Category::Qa,
            year: 2025,
            tech: strings(&["Playwright", "TypeScript", "CI"]),
            tags: strings(&["Testing", "API", "UI"]),
            media: vec![image("/covers/playwright-cover.webp")],
            links: links(
                Some("https://github.com/greyber/playwright-suite"),
                Some("https://stackblitz.com/edit/playwright-demo"),
                Some("/projects/qa-automation-playwright"),
            ),
            status: Some(Status::Done),
            featured: false,
            metrics: metrics(18, (2025, 7, 30), "TypeScript"),
            test_case: Some(TestCase {
                steps: vec![],
                expected: "User authenticated and dashboard visible after submit.".into(),
                code: Some(
                    r#"import { test, expect } from '@playwright/test';
test('Login OK', async ({ page }) => {
  await page.goto('https://app.example.com/login');
  await page.getByLabel('Email').fill('user@test.com');
  await page.getByLabel('Password').fill('Password123');
  await page.getByRole('button', { name: 'Login' }).click();
  await expect(page.getByRole('heading', { name: 'Dashboard' })).toBeVisible();
});"#
                        .into(),
                ),
                level: TestLevel::Smoke,
                outcome: TestOutcome::Passed,
                duration_secs: 7,
            }),
        },
        Project {
            slug: "api-auth-roles".into(),
            title: "API - Authentication and Roles".into(),
            summary: "Postman collection covering login, refresh tokens and role/claim checks (200/401/403).".into(),
            category: Category::Qa,
            year: 2024,
            tech: strings(&["Postman", "JavaScript", "Security"]),
            tags: strings(&["Testing", "API"]),
            media: vec![image("/covers/postman-cover.webp")],
            links: links(None, None, Some("/projects/api-auth-roles")),
            status: Some(Status::Done),
            featured: false,
            metrics: metrics(4, (2024, 11, 2), "JavaScript"),
            test_case: Some(TestCase {
                steps: vec![],
                expected: "200 with a valid token; 403 on insufficient role; 401 on an expired token.".into(),
                code: Some(
                    r#"pm.test("Token present", () => {
  const json = pm.response.json();
  pm.expect(json).to.have.property("access_token");
});"#
                        .into(),
                ),
                level: TestLevel::Regression,
                outcome: TestOutcome::Passed,
                duration_secs: 4,
            }),
        },
        Project {
            slug: "sap-r2r-uat".into(),
            title: "SAP Finance R2R - Closing UAT".into(),
            summary: "Validation of R2R postings and reports with test design and evidence tracked in Xray/JIRA.".into(),
            category: Category::Qa,
            year: 2023,
            tech: strings(&["SAP Finance", "JIRA / Xray", "Manual Testing"]),
            tags: strings(&["Testing", "UAT"]),
            media: vec![image("/covers/xray-cover.webp")],
            links: Links::default(),
            status: Some(Status::Done),
            featured: false,
            metrics: None,
            test_case: Some(TestCase {
                steps: strings(&[
                    "Given a SAP GUI environment with valid credentials",
                    "When I post a journal entry in FB50 and query FBL3N",
                    "Then balances and documents reflect the entry in the correct period",
                ]),
                expected: "Correct postings, reconciled balances and consistent accounting reports in the closing period."
                    .into(),
                code: None,
                level: TestLevel::Regression,
                outcome: TestOutcome::Passed,
                duration_secs: 420,
            }),
        },
        Project {
            slug: "log-harvester".into(),
            title: "STB Log Harvester".into(),
            summary: "Small tool collecting set-top box logs over ADB and PowerShell with timestamped evidence bundles.".into(),
            category: Category::Tool,
            year: 2022,
            tech: strings(&["PowerShell", "ADB"]),
            tags: strings(&["Testing", "Automation"]),
            media: vec![image("/covers/logs-cover.webp")],
            links: links(Some("https://github.com/greyber/log-harvester"), None, None),
            status: Some(Status::Done),
            featured: false,
            metrics: metrics(2, (2023, 3, 14), "PowerShell"),
            test_case: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::filter::{all_tags, find_by_slug};

    #[test]
    fn slugs_are_unique() {
        let catalog = projects();
        let unique: HashSet<_> = catalog.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn every_project_has_media() {
        assert!(projects().iter().all(|p| !p.media.is_empty()));
    }

    #[test]
    fn tags_are_sorted_and_unique() {
        let tags = all_tags(&projects());
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
        assert!(tags.contains(&"2D".to_string()));
    }

    #[test]
    fn qa_projects_carry_a_test_case() {
        for project in projects().iter().filter(|p| p.category == Category::Qa) {
            let case = project.test_case.as_ref().unwrap();
            assert!(!case.steps.is_empty() || case.code.is_some(), "{} has nothing to show", project.slug);
            assert!(!case.expected.is_empty());
        }
    }

    #[test]
    fn finds_projects_by_slug() {
        let catalog = projects();
        assert_eq!(
            find_by_slug(&catalog, "pixel-shooter").map(|p| p.title.as_str()),
            Some("Pixel Shooter")
        );
        assert!(find_by_slug(&catalog, "missing").is_none());
    }
}
