#![allow(warnings)]
//! Packing List Frontend Entry Point

mod app;
mod components;
mod list;
mod models;
mod sort;
mod stats;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
