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

//! Project filtering and ordering.
//!
//! Pure functions deriving the visible subset of the catalog from the current
//! filter selections. Nothing here fails: a filter that matches nothing yields
//! an empty list.

use std::{cmp::Ordering, collections::BTreeSet};

use crate::model::{Category, Project};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub(crate) fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    /// Steps through `All` and then each category in turn.
    pub(crate) fn cycle(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(c) => {
                let idx = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
                Category::ALL
                    .get(idx + 1)
                    .map(|next| CategoryFilter::Only(*next))
                    .unwrap_or(CategoryFilter::All)
            }
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::parse(value).map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SortKey {
    #[default]
    Recent,
    Oldest,
    Alphabetical,
    Popular,
}

impl SortKey {
    pub(crate) fn cycle(self) -> Self {
        match self {
            SortKey::Recent => SortKey::Oldest,
            SortKey::Oldest => SortKey::Alphabetical,
            SortKey::Alphabetical => SortKey::Popular,
            SortKey::Popular => SortKey::Recent,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Oldest => "oldest",
            SortKey::Alphabetical => "a-z",
            SortKey::Popular => "popular",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "recent" | "new" | "newest" => Some(SortKey::Recent),
            "oldest" | "old" => Some(SortKey::Oldest),
            "az" | "a-z" | "alpha" | "title" => Some(SortKey::Alphabetical),
            "popular" | "stars" => Some(SortKey::Popular),
            _ => None,
        }
    }

    fn compare(self, a: &Project, b: &Project) -> Ordering {
        match self {
            SortKey::Recent => b.year.cmp(&a.year),
            SortKey::Oldest => a.year.cmp(&b.year),
            SortKey::Alphabetical => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Popular => b.stars().cmp(&a.stars()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FilterState {
    pub(crate) category: CategoryFilter,
    pub(crate) tags: BTreeSet<String>,
    pub(crate) search: String,
    pub(crate) sort: SortKey,
}

impl FilterState {
    /// Adds the tag if absent, removes it otherwise. Tags compare
    /// case-insensitively, as they do when matching.
    pub(crate) fn toggle_tag(&mut self, tag: &str) {
        let before = self.tags.len();
        self.tags.retain(|t| !t.eq_ignore_ascii_case(tag));
        if self.tags.len() == before {
            self.tags.insert(tag.to_string());
        }
    }

    pub(crate) fn matches(&self, project: &Project) -> bool {
        self.category.matches(project.category)
            && self.tags.iter().all(|t| project.has_tag(t))
            && matches_search(project, &self.search)
    }
}

fn matches_search(project: &Project, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    project.title.to_lowercase().contains(&needle)
        || project.summary.to_lowercase().contains(&needle)
        || project.tech.iter().any(|t| t.to_lowercase().contains(&needle))
}

/// Returns the catalog positions of the matching projects, in display order.
///
/// The sort is stable, so projects comparing equal under the chosen key keep
/// their catalog order.
pub(crate) fn matching_indices(projects: &[Project], state: &FilterState) -> Vec<usize> {
    let mut indices: Vec<usize> = projects
        .iter()
        .enumerate()
        .filter(|(_, p)| state.matches(p))
        .map(|(i, _)| i)
        .collect();

    indices.sort_by(|a, b| state.sort.compare(&projects[*a], &projects[*b]));

    indices
}

pub(crate) fn apply<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    matching_indices(projects, state)
        .into_iter()
        .map(|i| &projects[i])
        .collect()
}

/// Every topic tag used in the catalog, deduplicated and sorted.
pub(crate) fn all_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub(crate) fn find_by_slug<'a>(projects: &'a [Project], slug: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Links, Media, Metrics};

    fn project(slug: &str, category: Category, year: u16, stars: Option<u32>) -> Project {
        Project {
            slug: slug.to_string(),
            title: slug.to_string(),
            summary: format!("Summary of {slug}"),
            category,
            year,
            tech: vec!["Rust".to_string()],
            tags: vec![],
            media: vec![Media::Image { src: format!("/covers/{slug}.webp") }],
            links: Links::default(),
            status: None,
            featured: false,
            metrics: stars.map(|s| Metrics { stars: Some(s), ..Metrics::default() }),
            test_case: None,
        }
    }

    fn slugs(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn every_result_satisfies_all_predicates() {
        let catalog = crate::model::catalog::projects();
        let tags = all_tags(&catalog);

        let searches = ["", "godot", "PLAYWRIGHT", "api", "zzz-no-match"];
        let mut categories = vec![CategoryFilter::All];
        categories.extend(Category::ALL.map(CategoryFilter::Only));

        for category in &categories {
            for search in searches {
                for tag in tags.iter().map(Some).chain(std::iter::once(None)) {
                    let mut state = FilterState {
                        category: *category,
                        search: search.to_string(),
                        ..FilterState::default()
                    };
                    if let Some(tag) = tag {
                        state.toggle_tag(tag);
                    }

                    for p in apply(&catalog, &state) {
                        assert!(category.matches(p.category));
                        assert!(state.tags.iter().all(|t| p.has_tag(t)));
                        assert!(matches_search(p, search));
                    }
                }
            }
        }
    }

    #[test]
    fn empty_filters_return_whole_catalog_in_order() {
        let catalog = vec![
            project("a", Category::Game, 2024, None),
            project("b", Category::Web, 2024, None),
            project("c", Category::Qa, 2024, None),
        ];

        let result = apply(&catalog, &FilterState::default());
        assert_eq!(slugs(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn tags_use_and_semantics() {
        let mut a = project("a", Category::Game, 2025, None);
        a.tags = vec!["2D".into(), "Pixel".into()];
        let mut b = project("b", Category::Game, 2025, None);
        b.tags = vec!["2D".into()];
        let catalog = vec![a, b];

        let mut state = FilterState::default();
        state.toggle_tag("2D");
        assert_eq!(slugs(&apply(&catalog, &state)), vec!["a", "b"]);

        state.toggle_tag("pixel");
        assert_eq!(slugs(&apply(&catalog, &state)), vec!["a"]);

        state.toggle_tag("pixel");
        assert_eq!(slugs(&apply(&catalog, &state)), vec!["a", "b"]);
    }

    #[test]
    fn search_matches_title_summary_and_tech_case_insensitively() {
        let mut a = project("alpha", Category::Tool, 2023, None);
        a.tech = vec!["Playwright".into()];
        let mut b = project("beta", Category::Tool, 2023, None);
        b.summary = "An arcade SHOOTER".into();
        let catalog = vec![a, b];

        let state = |s: &str| FilterState { search: s.to_string(), ..FilterState::default() };

        assert_eq!(slugs(&apply(&catalog, &state("ALPHA"))), vec!["alpha"]);
        assert_eq!(slugs(&apply(&catalog, &state("shooter"))), vec!["beta"]);
        assert_eq!(slugs(&apply(&catalog, &state("wright"))), vec!["alpha"]);
        assert_eq!(slugs(&apply(&catalog, &state("   "))), vec!["alpha", "beta"]);
        assert!(apply(&catalog, &state("nothing")).is_empty());
    }

    #[test]
    fn recent_and_oldest_are_reversed_for_distinct_years() {
        let catalog = vec![
            project("b", Category::Web, 2021, None),
            project("d", Category::Web, 2025, None),
            project("a", Category::Web, 2019, None),
            project("c", Category::Web, 2023, None),
        ];

        let recent = FilterState { sort: SortKey::Recent, ..FilterState::default() };
        let oldest = FilterState { sort: SortKey::Oldest, ..FilterState::default() };

        let mut recent_order = slugs(&apply(&catalog, &recent));
        let oldest_order = slugs(&apply(&catalog, &oldest));

        assert_eq!(recent_order, vec!["d", "c", "b", "a"]);
        recent_order.reverse();
        assert_eq!(recent_order, oldest_order);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            project("first", Category::Game, 2025, Some(3)),
            project("second", Category::Game, 2024, Some(10)),
            project("third", Category::Game, 2025, Some(3)),
        ];

        let recent = FilterState { sort: SortKey::Recent, ..FilterState::default() };
        assert_eq!(slugs(&apply(&catalog, &recent)), vec!["first", "third", "second"]);

        let popular = FilterState { sort: SortKey::Popular, ..FilterState::default() };
        assert_eq!(slugs(&apply(&catalog, &popular)), vec!["second", "first", "third"]);
    }

    #[test]
    fn alphabetical_ignores_case() {
        let catalog = vec![
            project("beta", Category::Web, 2025, None),
            project("Alpha", Category::Web, 2025, None),
            project("gamma", Category::Web, 2025, None),
        ];

        let state = FilterState { sort: SortKey::Alphabetical, ..FilterState::default() };
        assert_eq!(slugs(&apply(&catalog, &state)), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn category_cycle_visits_every_category_then_all() {
        let mut filter = CategoryFilter::All;
        let mut seen = vec![];
        for _ in 0..5 {
            filter = filter.cycle();
            seen.push(filter.label());
        }
        assert_eq!(seen, vec!["game", "web", "tool", "qa", "all"]);
    }

    #[test]
    fn toggling_a_tag_ignores_case() {
        let mut state = FilterState::default();
        state.toggle_tag("Pixel");
        state.toggle_tag("pixel");
        assert!(state.tags.is_empty());

        state.toggle_tag("pixel");
        state.toggle_tag("2D");
        assert_eq!(state.tags.len(), 2);
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(CategoryFilter::parse("ALL"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::parse("qa"), Some(CategoryFilter::Only(Category::Qa)));
        assert_eq!(CategoryFilter::parse("music"), None);
        assert_eq!(SortKey::parse("a-z"), Some(SortKey::Alphabetical));
        assert_eq!(SortKey::parse("stars"), Some(SortKey::Popular));
        assert_eq!(SortKey::parse("random"), None);
    }
}
