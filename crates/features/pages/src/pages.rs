//! Page renderers.
//!
//! Each page is a pure function from typed content to markup. HTML is built
//! with [maud](https://maud.lambda.xyz/): type-safe templates with automatic
//! XSS escaping. The program section renders behind an [`ErrorBoundary`] so a
//! content problem degrades that section instead of the whole page.

use crate::boundary::{ErrorBoundary, RenderError};
use crate::components::{
    AnnouncementBanner, container, image_placeholder, program_features, program_hero, section,
    stats_section,
};
use crate::content::SiteContent;
use crate::gate::role_gate;
use campus_domain::config::SiteMeta;
use campus_domain::content::ProgramConfig;
use campus_domain::roles::Role;
use maud::{DOCTYPE, Markup, html};

const CSS: &str = include_str!("../static/site.css");

/// Renders the base HTML document structure.
fn base_document(site: &SiteMeta, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(site.description);
                title { (title) " — " (site.name) }
                style { (CSS) }
            }
            body {
                (site_header(site))
                main { (content) }
                (site_footer(site))
            }
        }
    }
}

fn site_header(site: &SiteMeta) -> Markup {
    html! {
        header class="site-header" {
            (container(html! {
                a class="site-name" href="/" { (site.name) }
                nav class="site-nav" {
                    a href="/programs" { "Programs" }
                    a href="/contact" { "Contact" }
                }
            }))
        }
    }
}

fn site_footer(site: &SiteMeta) -> Markup {
    html! {
        footer class="site-footer" {
            (container(html! {
                p { (site.name) " · " (site.description) }
            }))
        }
    }
}

/// Program overview: levels, schedule, features.
///
/// # Errors
/// Fails when the program has no levels to show; the caller's boundary turns
/// that into a section-local fallback.
pub fn program_overview(program: &ProgramConfig) -> Result<Markup, RenderError> {
    if program.levels.is_empty() {
        return Err(RenderError::MissingContent("program levels"));
    }

    Ok(html! {
        div class="program-overview" {
            ul class="program-levels" {
                @for level in &program.levels {
                    li {
                        h3 { (level.name) }
                        p { (level.description) }
                    }
                }
            }
            table class="program-schedule" {
                @for (day, time) in program.schedule.slots() {
                    tr {
                        th scope="row" { (day) }
                        td { (time) }
                    }
                }
            }
            (program_features(&program.features))
        }
    })
}

/// Home page: banner, hero, stats band, program teaser.
pub fn home(site: &SiteMeta, content: &SiteContent) -> Markup {
    let banner = AnnouncementBanner::new(content.announcement.clone(), true);
    let mut boundary = ErrorBoundary::new();
    let program = boundary.render(|| program_overview(&content.program));

    base_document(
        site,
        "Welcome",
        html! {
            (banner.render())
            header class="hero" {
                (container(html! {
                    h1 { (site.name) }
                    p { (site.description) }
                    (image_placeholder("Campus photo", 3, 2))
                }))
            }
            (stats_section("Our school in numbers", &content.stats))
            (section("program", &content.program.name, program))
        },
    )
}

/// Programs page: full program presentation.
pub fn programs(site: &SiteMeta, content: &SiteContent) -> Markup {
    let mut boundary = ErrorBoundary::new();
    let overview = boundary.render(|| program_overview(&content.program));

    base_document(
        site,
        &content.program.name,
        html! {
            (program_hero(&content.program))
            (section("overview", "What you will learn", overview))
            (section("materials", "Course materials", html! {
                ul class="course-materials" {
                    @for material in &content.program.materials {
                        li { (material.title) " " span class="material-kind" { "(" (material.kind) ")" } }
                    }
                }
            }))
        },
    )
}

/// Contact page: the submission form, plus an editor-only content link.
pub fn contact(site: &SiteMeta, content: &SiteContent, current_role: Role) -> Markup {
    let banner = AnnouncementBanner::new(content.announcement.clone(), true);

    let editor_tools = role_gate(
        current_role,
        &[Role::Admin, Role::Editor],
        html! {
            p class="editor-tools" {
                a href="/api/diagnostics" { "Connectivity diagnostics" }
            }
        },
        None,
    );

    base_document(
        site,
        "Contact",
        html! {
            (banner.render())
            (section("contact", "Get in touch", html! {
                form class="contact-form" method="post" action="/contact" {
                    label { "First name"
                        input type="text" name="first-name" required;
                    }
                    label { "Last name"
                        input type="text" name="last-name" required;
                    }
                    label { "Email"
                        input type="email" name="email" required;
                    }
                    label { "Message"
                        textarea name="message" rows="6" required {}
                    }
                    button type="submit" { "Send message" }
                }
            }))
            (editor_tools)
        },
    )
}
