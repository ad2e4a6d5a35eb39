//! Presentational components.
//!
//! Every function here is a pure renderer over its inputs; the announcement
//! banner is the one component carrying UI-local state (its visibility flag).
//! Maud escapes interpolated values, so content strings may contain anything.

use campus_domain::content::{ProgramConfig, ProgramFeature, StatItem};
use maud::{Markup, PreEscaped, html};

/// Centered max-width wrapper used by every page section.
#[must_use]
pub fn container(content: Markup) -> Markup {
    html! {
        div class="container" {
            (content)
        }
    }
}

/// Titled page section with an anchor id.
#[must_use]
pub fn section(id: &str, title: &str, content: Markup) -> Markup {
    html! {
        section id=(id) class="section" {
            (container(html! {
                h2 class="section-title" { (title) }
                (content)
            }))
        }
    }
}

/// Grey box standing in for photography that has not been delivered yet.
#[must_use]
pub fn image_placeholder(label: &str, width: u32, height: u32) -> Markup {
    html! {
        div class="image-placeholder"
            style=(format!("aspect-ratio: {width} / {height};"))
            aria-label=(label) {
            span { (label) }
        }
    }
}

/// Statistics band: one figure per item, in input order.
#[must_use]
pub fn stats_display(items: &[StatItem]) -> Markup {
    html! {
        dl class="stats-display" {
            @for item in items {
                div class="stat-item" {
                    (icon(&item.icon))
                    dd class="stat-value" { (item.stat) }
                    dt class="stat-name" { (item.name) }
                }
            }
        }
    }
}

/// Full-width band wrapping [`stats_display`] in a titled section.
#[must_use]
pub fn stats_section(title: &str, items: &[StatItem]) -> Markup {
    section("stats", title, stats_display(items))
}

/// Lead banner for a program page: name, description, tuition tag.
#[must_use]
pub fn program_hero(program: &ProgramConfig) -> Markup {
    html! {
        header class="program-hero" {
            (container(html! {
                h1 { (program.name) }
                p class="program-description" { (program.description) }
                p class="program-tuition" {
                    (format!("{:.0} {} / {}", program.tuition.amount, program.tuition.currency, program.tuition.period))
                }
            }))
        }
    }
}

/// Three-up grid of program selling points.
#[must_use]
pub fn program_features(features: &[ProgramFeature]) -> Markup {
    html! {
        ul class="program-features" {
            @for feature in features {
                li class="feature-card" {
                    (icon(&feature.icon))
                    h3 { (feature.title) }
                    p { (feature.description) }
                }
            }
        }
    }
}

/// Inline SVG pictogram from a path descriptor.
fn icon(path_descriptor: &str) -> Markup {
    html! {
        svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true" {
            path d=(path_descriptor) stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" {}
        }
    }
}

/// Dismissable announcement strip shown above the page header.
///
/// Visibility defaults from the caller and can only move one way: once
/// dismissed, the banner stays hidden for the lifetime of this value.
/// Nothing is persisted across requests.
#[derive(Debug)]
pub struct AnnouncementBanner {
    text: Option<String>,
    visible: bool,
}

impl AnnouncementBanner {
    #[must_use]
    pub const fn new(text: Option<String>, visible: bool) -> Self {
        Self { text, visible }
    }

    /// Hides the banner permanently.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Empty markup when hidden or when there is nothing to announce.
    #[must_use]
    pub fn render(&self) -> Markup {
        match &self.text {
            Some(text) if self.visible => html! {
                aside class="announcement-banner" role="status" {
                    (container(html! {
                        p { (text) }
                    }))
                }
            },
            _ => PreEscaped(String::new()),
        }
    }
}
