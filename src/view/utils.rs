use maud::{Markup, html};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::view::types::RenderOptions;

/// Bytes escaped when an upstream identifier becomes one path segment.
const ID_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Row click handler. Reads the row's own `data-href` so no data ends up in script text.
pub const ROW_CLICK_HANDLER: &str = "window.location.href=this.dataset.href";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Game,
    Team,
    Player,
}

impl DetailKind {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            DetailKind::Game => "/game",
            DetailKind::Team => "/team",
            DetailKind::Player => "/player",
        }
    }
}

/// Detail page link, or `None` when there is no identifier to key it by. The identifier is
/// percent-encoded as a single path segment.
#[must_use]
pub fn detail_href(kind: DetailKind, id: Option<&str>) -> Option<String> {
    let id = id?.trim();
    if id.is_empty() {
        return None;
    }
    Some(format!(
        "{}/{}",
        kind.prefix(),
        utf8_percent_encode(id, ID_SEGMENT)
    ))
}

/// Swaps in the placeholder once if the browser cannot decode the image.
#[must_use]
pub fn image_fallback_handler(placeholder: &str) -> String {
    format!("this.onerror=null;this.src='{placeholder}';")
}

#[must_use]
pub fn logo_img(src: Option<&str>, alt: &str, class: &str, opts: &RenderOptions) -> Markup {
    let src = src
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(opts.placeholder_logo.as_str());
    html! {
        img class=(class) src=(src) alt=(alt) loading="lazy"
            onerror=(image_fallback_handler(&opts.placeholder_logo));
    }
}

/// Table row that navigates to `href` when clicked; a plain row without one.
#[must_use]
pub fn linked_row(href: Option<&str>, cells: &Markup) -> Markup {
    html! {
        @if let Some(href) = href {
            tr class="clickable" data-href=(href) tabindex="0" onclick=(ROW_CLICK_HANDLER) {
                (cells)
            }
        } @else {
            tr { (cells) }
        }
    }
}

#[must_use]
pub fn loading_placeholder(what: &str) -> Markup {
    html! {
        div class="loading" aria-busy="true" { "Loading " (what) "…" }
    }
}

#[must_use]
pub fn empty_placeholder(message: &str) -> Markup {
    html! {
        p class="empty-state" { (message) }
    }
}

#[must_use]
pub fn error_placeholder(message: &str) -> Markup {
    html! {
        div class="error-state" role="alert" { (message) }
    }
}
