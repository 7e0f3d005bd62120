#![allow(warnings)]
//! Rollout Checklist Frontend Entry Point

mod app;
mod checklist;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
