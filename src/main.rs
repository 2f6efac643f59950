#![allow(warnings)]
//! Trade UI Frontend Entry Point

mod models;
mod config;
mod format;
mod filter;
mod browser;
mod trade;
mod board;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
