//! In-browser checks for the DOM bindings.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use folio_web::components::page::{render_footer_year, repo_badges};
use folio_web::components::{BrowserSignals, BrowserThemeDocument, ElementBadge};
use folio_web::config::dom::{THEME_ICON_ID, YEAR_ID};
use folio_web::core::{HostSignals, RepoBadge, ThemeController, ThemeDocument, TriggerPolicy};
use folio_web::models::Theme;
use folio_web::utils::storage::KeyValueStore;
use folio_web::utils::{MemoryStorage, WebStorage, dom};
use futures::channel::oneshot;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_storage_round_trip() {
    let storage = WebStorage::session();
    assert!(storage.is_available());

    storage.set_item("folio-test", "1").unwrap();
    assert_eq!(storage.get_item("folio-test").unwrap().as_deref(), Some("1"));
}

#[wasm_bindgen_test]
fn element_badge_reads_attribute_and_writes_text() {
    let document = dom::document().unwrap();
    let element = document.create_element("span").unwrap();
    element.set_attribute("data-repo", "acme/widget").unwrap();

    let badge = ElementBadge::new(element.clone());
    assert_eq!(badge.repo().as_deref(), Some("acme/widget"));
    assert_eq!(badge.text(), "");

    badge.set_text("★ 42");
    assert_eq!(element.text_content().as_deref(), Some("★ 42"));
}

#[wasm_bindgen_test]
fn element_badge_ignores_empty_attribute() {
    let document = dom::document().unwrap();
    let element = document.create_element("span").unwrap();
    element.set_attribute("data-repo", "").unwrap();

    assert_eq!(ElementBadge::new(element).repo(), None);
}

#[wasm_bindgen_test]
fn theme_toggle_updates_root_class_and_icon() {
    let document = dom::document().unwrap();
    let icon = document.create_element("span").unwrap();
    icon.set_id(THEME_ICON_ID);
    document.body().unwrap().append_child(&icon).unwrap();

    let controller = ThemeController::new(
        MemoryStorage::new(),
        BrowserThemeDocument::locate(&document),
        Some(false),
    );
    controller.apply(Theme::Dark);
    assert!(controller.document().is_dark());
    assert!(icon.inner_html().starts_with("<svg"));

    assert_eq!(controller.toggle(), Theme::Light);
    assert!(!document.document_element().unwrap().class_list().contains("dark"));

    icon.remove();
}

fn live_signals() -> BrowserSignals {
    let window = dom::window().unwrap();
    let document = window.document().unwrap();
    BrowserSignals::new(window, document)
}

#[wasm_bindgen_test]
fn footer_year_is_written() {
    let document = dom::document().unwrap();
    let year = document.create_element("span").unwrap();
    year.set_id(YEAR_ID);
    document.body().unwrap().append_child(&year).unwrap();

    render_footer_year(&document);
    assert_eq!(year.text_content(), Some(dom::current_year().to_string()));

    year.remove();
}

#[wasm_bindgen_test]
fn repo_badges_collects_tagged_elements() {
    let document = dom::document().unwrap();
    let list = document.create_element("ul").unwrap();
    list.set_inner_html(
        r#"<li><span data-repo="acme/widget"></span></li>
           <li><span data-repo=""></span></li>
           <li><span>plain</span></li>"#,
    );
    document.body().unwrap().append_child(&list).unwrap();

    let repos: Vec<_> = repo_badges(&document).iter().map(|b| b.repo()).collect();
    assert!(repos.contains(&Some("acme/widget".to_string())));
    assert!(repos.contains(&None));
    assert_eq!(repos.len(), 2);

    list.remove();
}

#[wasm_bindgen_test]
fn signals_prefer_visibility_when_observer_exists() {
    assert_eq!(live_signals().policy(), TriggerPolicy::VisibleThenIdle);
}

#[wasm_bindgen_test]
fn when_loaded_runs_immediately_on_complete_document() {
    let document = Document::new().unwrap();
    assert_eq!(document.ready_state(), "complete");
    let signals = BrowserSignals::new(dom::window().unwrap(), document);

    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    signals.when_loaded(Box::new(move || flag.set(true)));
    assert!(ran.get());
}

#[wasm_bindgen_test]
fn when_visible_without_target_returns_false() {
    let signals = BrowserSignals::new(dom::window().unwrap(), Document::new().unwrap());
    assert!(!signals.when_visible(Box::new(|| {})));
}

#[wasm_bindgen_test]
fn when_visible_observes_main() {
    let document = dom::document().unwrap();
    let main = document.create_element("main").unwrap();
    document.body().unwrap().append_child(&main).unwrap();

    assert!(live_signals().when_visible(Box::new(|| {})));

    main.remove();
}

#[wasm_bindgen_test]
async fn when_idle_runs_task() {
    let (tx, rx) = oneshot::channel();
    live_signals().when_idle(Box::new(move || {
        let _ = tx.send(());
    }));
    assert_eq!(rx.await, Ok(()));
}

#[wasm_bindgen_test]
async fn when_idle_falls_back_to_timer_on_rejection() {
    let window = dom::window().unwrap();
    let key = JsValue::from_str("requestIdleCallback");
    let original = Reflect::get(&window, &key).unwrap();
    let rejecting = Function::new_no_args("throw new Error('rejected');");
    Reflect::set(&window, &key, &rejecting).unwrap();

    let (tx, rx) = oneshot::channel();
    live_signals().when_idle(Box::new(move || {
        let _ = tx.send(());
    }));
    Reflect::set(&window, &key, &original).unwrap();

    assert_eq!(rx.await, Ok(()));
}
