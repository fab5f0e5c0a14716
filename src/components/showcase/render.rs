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

//! UI rendering logic for the showcase view.
//!
//! Carousel cards are laid out at fractional offsets that may start left of
//! the track, so each card is rendered into its own buffer and copied into
//! the frame column by column, clipped to the track.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Padding, Paragraph, Widget, Wrap},
};

use crate::{
    carousel::CarouselState,
    components::{ShowcaseLayout, ShowcaseView},
    events::Focus,
    model::{Media, Project, TestOutcome, filter::FilterState},
    render::popup_area,
    theme::Theme,
    util::format::{format_metrics, format_speed},
};

const MIN_CARD_HEIGHT: u16 = 8;

impl ShowcaseView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        projects: &[&Project],
        filter: &FilterState,
        focus: Focus,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_filter_bar(f, chunks[0], filter, focus, theme);

        match self.layout {
            ShowcaseLayout::Carousel => self.draw_carousel(f, chunks[1], projects, theme),
            ShowcaseLayout::List => {
                self.track_area = None;
                self.table.draw(f, chunks[1], projects, theme);
            }
        }

        if let Some(project) = self.modal.and_then(|m| projects.get(m)) {
            draw_modal(f, area, project, theme);
        }
    }

    fn draw_filter_bar(&self, f: &mut Frame, area: Rect, filter: &FilterState, focus: Focus, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let search_prefix = format!(
            "Category: {}   Sort: {}   Search: ",
            filter.category.label(),
            filter.sort.label()
        );
        let search_style = if focus == Focus::SearchInput {
            Style::default().fg(theme.commander_colour).bg(theme.gauge_track_colour)
        } else {
            Style::default().fg(theme.text_fg)
        };
        let search_text = if self.search_input.value().is_empty() && focus != Focus::SearchInput {
            Span::styled("(press /)", Style::default().fg(theme.muted_fg))
        } else {
            Span::styled(self.search_input.value(), search_style)
        };

        let top = Line::from(vec![
            Span::styled(search_prefix.as_str(), Style::default().fg(theme.muted_fg)),
            search_text,
        ]);
        f.render_widget(Paragraph::new(top), rows[0]);

        if focus == Focus::SearchInput {
            let cursor_x = rows[0].x
                + search_prefix.chars().count() as u16
                + self.search_input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x.min(rows[0].right().saturating_sub(1)), rows[0].y));
        }

        let mut tags = vec![Span::styled("Tags: ", Style::default().fg(theme.muted_fg))];
        for (i, tag) in self.tags.iter().enumerate() {
            let selected = filter.tags.contains(tag);
            let mut style = if selected {
                Style::default().fg(theme.background_colour).bg(theme.tag_fg)
            } else {
                Style::default().fg(theme.tag_fg)
            };
            if i == self.tag_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            tags.push(Span::styled(format!("#{tag}"), style));
            tags.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(tags)), rows[1]);
    }

    fn draw_carousel(&mut self, f: &mut Frame, area: Rect, projects: &[&Project], theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(MIN_CARD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);
        let track = chunks[0];

        let item_width = self.card_width.min(track.width).max(1);
        self.carousel.measure(f64::from(item_width), f64::from(track.width));
        self.track_area = Some(track);

        let count = projects.len();
        if count == 0 {
            let empty = Paragraph::new("No projects match the current filters. Press x to clear them.")
                .alignment(Alignment::Center)
                .fg(theme.muted_fg);
            f.render_widget(empty, track);
            return;
        }

        let stride = self.carousel.stride();
        let offset = self.carousel.offset();
        let active = self.carousel.active_index();
        let slots = count * self.carousel.rendered_copies();

        for slot in 0..slots {
            let x = offset + slot as f64 * stride;
            if x + f64::from(item_width) <= 0.0 {
                continue;
            }
            if x >= f64::from(track.width) {
                break;
            }

            let position = slot % count;
            let card = card(projects[position], position == active, theme);
            blit_clipped(f, track, x.round() as i32, item_width, card);
        }

        self.draw_dots(f, chunks[1], count, active, theme);

        let progress = Gauge::default()
            .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
            .ratio(self.carousel.progress())
            .label("")
            .use_unicode(true);
        f.render_widget(progress, chunks[2]);

        self.draw_status(f, chunks[3], projects[active], active, count, theme);
    }

    fn draw_dots(&self, f: &mut Frame, area: Rect, count: usize, active: usize, theme: &Theme) {
        let dots: Vec<Span> = (0..count)
            .map(|i| {
                if i == active {
                    Span::styled("● ", Style::default().fg(theme.accent_colour))
                } else {
                    Span::styled("○ ", Style::default().fg(theme.muted_fg))
                }
            })
            .collect();
        f.render_widget(Paragraph::new(Line::from(dots)).alignment(Alignment::Center), area);
    }

    fn draw_status(
        &self,
        f: &mut Frame,
        area: Rect,
        project: &Project,
        active: usize,
        count: usize,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(area);

        let status = format!("Project {} of {}: {}", active + 1, count, project.title);
        f.render_widget(Paragraph::new(status).fg(theme.text_fg), chunks[0]);

        let state = match self.carousel.state() {
            CarouselState::Running => "",
            CarouselState::Paused => "paused  ",
            CarouselState::Stopped if self.carousel.reduced_motion() => "reduced motion  ",
            CarouselState::Stopped => "stopped  ",
        };

        let mut spans = vec![Span::styled(state, Style::default().fg(theme.muted_fg))];
        for speed in self.speeds() {
            let label = format_speed(*speed);
            if *speed == self.carousel.speed() {
                spans.push(Span::styled(format!("[{label}]"), Style::default().fg(theme.accent_colour).bold()));
            } else {
                spans.push(Span::styled(format!(" {label} "), Style::default().fg(theme.muted_fg)));
            }
        }
        f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), chunks[1]);
    }
}

fn card<'a>(project: &'a Project, active: bool, theme: &Theme) -> Paragraph<'a> {
    let border_colour = if active { theme.accent_colour } else { theme.border_colour };

    let mut meta = vec![
        Span::styled(project.category.label().to_uppercase(), Style::default().fg(theme.table_category_fg)),
        Span::styled(format!("  {}", project.year), Style::default().fg(theme.table_year_fg)),
    ];
    if let Some(status) = project.status {
        meta.push(Span::styled(format!("  {}", status.label()), Style::default().fg(theme.muted_fg)));
    }

    let mut lines = vec![Line::from(meta)];
    if let Some(media) = project.media.first() {
        lines.push(media_line(media, theme));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(project.summary.as_str()).fg(theme.text_fg));
    lines.push(Line::from(""));
    lines.push(Line::from(project.tech.join(" · ")).fg(theme.heading_fg));
    lines.push(Line::from(
        project
            .tags
            .iter()
            .map(|t| Span::styled(format!("#{t} "), Style::default().fg(theme.tag_fg)))
            .collect::<Vec<_>>(),
    ));

    let title = if project.featured {
        format!(" * {} ", project.title)
    } else {
        format!(" {} ", project.title)
    };

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_colour))
            .title(Span::styled(title, Style::default().fg(theme.heading_fg).bold()))
            .padding(Padding::horizontal(1)),
    )
}

fn media_line<'a>(media: &'a Media, theme: &Theme) -> Line<'a> {
    let icon = match media {
        Media::Image { .. } => "▣ ",
        Media::Video { .. } => "▶ ",
    };
    Line::from(vec![
        Span::styled(icon, Style::default().fg(theme.accent_colour)),
        Span::styled(media.preview(), Style::default().fg(theme.muted_fg)),
    ])
}

/// Renders `widget` at column `x` of `track` (which may be negative or run
/// past the right edge) keeping only the cells inside the track.
fn blit_clipped<W: Widget>(f: &mut Frame, track: Rect, x: i32, width: u16, widget: W) {
    let card_area = Rect::new(0, 0, width, track.height);
    let mut card_buf = Buffer::empty(card_area);
    widget.render(card_area, &mut card_buf);

    let left = i32::from(track.x);
    let right = i32::from(track.right());
    let frame_buf = f.buffer_mut();

    for cx in 0..width {
        let tx = left + x + i32::from(cx);
        if tx < left || tx >= right {
            continue;
        }
        for cy in 0..track.height {
            frame_buf[(tx as u16, track.y + cy)] = card_buf[(cx, cy)].clone();
        }
    }
}

fn draw_modal(f: &mut Frame, area: Rect, project: &Project, theme: &Theme) {
    let popup = popup_area(area, 80, 85);
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_colour))
        .title(Span::styled(format!(" {} ", project.title), Style::default().bold()))
        .title_bottom(Line::from(" h/l browse  r/d/c open link  Esc close ").fg(theme.muted_fg))
        .padding(Padding::uniform(1))
        .style(Style::default().bg(theme.background_colour));

    // Untrimmed so code keeps its indentation
    f.render_widget(
        Paragraph::new(modal_lines(project, theme)).wrap(Wrap { trim: false }).block(block),
        popup,
    );
}

fn modal_lines<'a>(project: &'a Project, theme: &Theme) -> Vec<Line<'a>> {
    let heading = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(theme.accent_colour).bold()));

    let mut meta = format!("{}  {}", project.category.label().to_uppercase(), project.year);
    if let Some(status) = project.status {
        meta.push_str(&format!("  {}", status.label()));
    }

    let mut lines = vec![
        Line::from(meta).fg(theme.muted_fg),
        Line::from(""),
        Line::from(project.summary.as_str()).fg(theme.text_fg),
        Line::from(""),
        heading("Tech"),
        Line::from(project.tech.join(", ")).fg(theme.text_fg),
        heading("Tags"),
        Line::from(project.tags.join(", ")).fg(theme.tag_fg),
    ];

    if let Some(metrics) = project.metrics.as_ref() {
        lines.push(heading("Metrics"));
        lines.push(Line::from(format_metrics(metrics)).fg(theme.text_fg));
    }

    if let Some(case) = project.test_case.as_ref() {
        lines.push(heading("Test run"));
        let outcome_colour = match case.outcome {
            TestOutcome::Passed => theme.success_fg,
            TestOutcome::Failed => theme.error_fg,
        };
        lines.push(Line::from(vec![
            Span::styled(case.outcome.label(), Style::default().fg(outcome_colour).bold()),
            Span::styled(
                format!("  {}  {}s", case.level.label(), case.duration_secs),
                Style::default().fg(theme.muted_fg),
            ),
        ]));

        if !case.steps.is_empty() {
            lines.push(heading("Steps"));
            for (i, step) in case.steps.iter().enumerate() {
                lines.push(Line::from(format!("{}. {}", i + 1, step)).fg(theme.text_fg));
            }
        }

        lines.push(heading("Expected"));
        lines.push(Line::from(case.expected.as_str()).fg(theme.text_fg));

        if let Some(code) = case.code.as_deref() {
            lines.push(heading("Code"));
            lines.extend(code.lines().map(|l| Line::from(l).fg(theme.tag_fg)));
        }
    }

    lines.push(heading("Media"));
    for media in &project.media {
        lines.push(media_line(media, theme));
    }

    lines.push(Line::from(""));
    lines.push(heading("Links"));
    for (key, label, link) in [
        ("r", "Repository", project.links.repo.as_deref()),
        ("d", "Demo", project.links.demo.as_deref()),
        ("c", "Case study", project.links.case_study.as_deref()),
    ] {
        let line = match link {
            Some(url) => Line::from(vec![
                Span::styled(format!("[{key}] {label:<11}"), Style::default().fg(theme.accent_colour)),
                Span::styled(url, Style::default().fg(theme.text_fg)),
            ]),
            None => Line::from(format!("[{key}] {label:<11}not available")).fg(theme.muted_fg),
        };
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{catalog, filter::find_by_slug};

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn modal_shows_test_case_steps() {
        let catalog = catalog::projects();
        let project = find_by_slug(&catalog, "sap-r2r-uat").unwrap();
        let lines = text(&modal_lines(project, &Theme::default()));

        let steps = lines.iter().position(|l| l == "Steps").unwrap();
        assert_eq!(lines[steps + 1], "1. Given a SAP GUI environment with valid credentials");
        assert!(lines.iter().any(|l| l == "Expected"));
        assert!(lines.iter().any(|l| l.starts_with("passed  Regression  420s")));
    }

    #[test]
    fn modal_shows_test_code_lines() {
        let catalog = catalog::projects();
        let project = find_by_slug(&catalog, "api-auth-roles").unwrap();
        let lines = text(&modal_lines(project, &Theme::default()));

        let code = lines.iter().position(|l| l == "Code").unwrap();
        assert_eq!(lines[code + 1], r#"pm.test("Token present", () => {"#);
        assert_eq!(lines[code + 2], "  const json = pm.response.json();");
        assert!(!lines.iter().any(|l| l == "Steps"));
    }

    #[test]
    fn modal_omits_test_sections_for_other_projects() {
        let catalog = catalog::projects();
        let project = find_by_slug(&catalog, "log-harvester").unwrap();
        let lines = text(&modal_lines(project, &Theme::default()));
        assert!(!lines.iter().any(|l| l == "Test run" || l == "Expected"));
    }
}
