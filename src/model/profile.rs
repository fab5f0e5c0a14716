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

//! Personal profile content for the hero and about sections.

pub(crate) struct Hero {
    pub(crate) name: &'static str,
    pub(crate) role: &'static str,
    pub(crate) tagline: &'static str,
    pub(crate) highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Work,
    Education,
    Freelance,
}

impl EntryKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            EntryKind::Work => "work",
            EntryKind::Education => "education",
            EntryKind::Freelance => "freelance",
        }
    }
}

pub(crate) struct TimelineEntry {
    pub(crate) period: &'static str,
    pub(crate) title: &'static str,
    pub(crate) organisation: &'static str,
    pub(crate) description: &'static str,
    pub(crate) kind: EntryKind,
}

pub(crate) struct SkillGroup {
    pub(crate) name: &'static str,
    pub(crate) skills: &'static [&'static str],
}

pub(crate) const HERO: Hero = Hero {
    name: "Greyber Sojo",
    role: "QA Analyst & Game Developer",
    tagline: "Manual, functional and UAT testing with a growing automation toolbox, plus games built in Unity and Godot.",
    highlights: &[
        "3+ years of QA on OTT/STB and SAP Finance",
        "Automation with Tosca, Playwright and Cypress",
        "2D/3D gameplay prototypes in C# and GDScript",
    ],
};

pub(crate) const INTRO: &str = "Methodical, detail oriented and results driven. I have validated apps such as \
HBO Max, Netflix and Spotify on set-top boxes, secured critical financial processes in SAP Finance, and \
complement that with game development and full-stack web work.";

pub(crate) const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "May 2024 - Jun 2025",
        title: "QA Analyst - SAP Finance",
        organisation: "Globant",
        description: "Functional, regression and UAT testing in SAP GUI (Record-to-Report). Test design, defect \
reporting in JIRA/Xray and dashboards that improved process quality by 15%. Basic automation with Tosca and \
Playwright to cut manual effort.",
        kind: EntryKind::Work,
    },
    TimelineEntry {
        period: "Apr 2022 - May 2024",
        title: "QC Analyst - OTT & STB",
        organisation: "Globant",
        description: "Manual and end-to-end testing of OTT apps on set-top boxes. Detailed bug reports reduced \
resolution time by 20%. API checks with Postman and log analysis with PowerShell and Android developer options.",
        kind: EntryKind::Work,
    },
    TimelineEntry {
        period: "2023 - present",
        title: "Game Developer (Freelance)",
        organisation: "Indie Games",
        description: "2D/3D prototypes in Unity (C#) and Godot (GDScript) focused on gameplay loops, AI, physics, \
user interfaces and stability.",
        kind: EntryKind::Freelance,
    },
    TimelineEntry {
        period: "2022 - 2023",
        title: "The Web Developer Bootcamp",
        organisation: "Udemy",
        description: "74 hour full-stack certification: HTML, CSS, JavaScript, Node.js, Express and MongoDB.",
        kind: EntryKind::Education,
    },
    TimelineEntry {
        period: "2012 - 2015",
        title: "Business Administration (TSU)",
        organisation: "UPTBAL",
        description: "Management, planning and control of organisations with emphasis on finance, marketing and \
strategy.",
        kind: EntryKind::Education,
    },
];

pub(crate) const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        name: "QA",
        skills: &[
            "Manual Testing",
            "Regression Testing",
            "UAT",
            "Tosca",
            "Playwright",
            "Cypress",
            "Postman",
            "JIRA / Xray",
            "Spira",
            "TestRail",
        ],
    },
    SkillGroup {
        name: "Development",
        skills: &["JavaScript", "Node.js", "Express", "MongoDB", "SQL", "Unity (C#)", "Godot (GDScript)"],
    },
    SkillGroup {
        name: "Other",
        skills: &["English (B2)", "Portuguese (A1)", "Business Administration"],
    },
];
