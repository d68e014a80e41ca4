#![cfg(target_arch = "wasm32")]

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn theme_preference_survives_storage_round_trip() {
    LocalStorage::set("sinout-theme", "dark").unwrap();
    let raw: String = LocalStorage::get("sinout-theme").unwrap();
    assert_eq!(raw, "dark");
    LocalStorage::delete("sinout-theme");
}

#[wasm_bindgen_test]
fn document_root_accepts_theme_attribute() {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .unwrap();
    root.set_attribute("data-theme", "light").unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
}
