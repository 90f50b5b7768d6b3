//! Root application module.
//!
//! Wires the theme controller and the star badge loader to the live page.
//! Both components are independent; each bails out quietly when the
//! elements it needs are missing.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

use crate::components::page::{self, BrowserSignals, BrowserThemeDocument, ElementBadge};
use crate::config::StarsConfig;
use crate::config::dom::THEME_TOGGLE_ID;
use crate::core::{GitHubClient, StarsLoader, ThemeController, defer};
use crate::utils::{WebStorage, dom, log};

type PageTheme = ThemeController<WebStorage, BrowserThemeDocument>;
type PageStars = StarsLoader<WebStorage, GitHubClient, ElementBadge>;

/// Run both components against the current document.
pub fn start() {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    start_theme(&window, &document);
    page::render_footer_year(&document);
    start_stars(window, &document);
}

fn start_theme(window: &Window, document: &Document) {
    let controller: Rc<PageTheme> = Rc::new(ThemeController::new(
        WebStorage::local(),
        BrowserThemeDocument::locate(document),
        dom::prefers_dark(window),
    ));
    controller.init();

    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };

    let on_click = Closure::wrap(Box::new(move || {
        controller.toggle();
    }) as Box<dyn FnMut()>);

    if button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_err()
    {
        log::debug("could not bind theme toggle");
        return;
    }
    on_click.forget();
}

fn start_stars(window: Window, document: &Document) {
    let badges = page::repo_badges(document);
    if badges.is_empty() {
        return;
    }

    let config = StarsConfig::default();
    let loader: Rc<PageStars> = Rc::new(StarsLoader::new(
        WebStorage::session(),
        GitHubClient::from_config(&config),
        badges,
        config,
    ));
    loader.render_cached();

    let host = Rc::new(BrowserSignals::new(window, document.clone()));
    defer(host.policy(), &host, move || {
        spawn_local(async move {
            loader.run().await;
        });
    });
}
