//! `vrwv demo` – cycle the configured demo URLs through a headless view.

use anyhow::Result;
use std::sync::Arc;
use vrwv_core::admission::AdmissionPolicy;
use vrwv_core::config::VrwvConfig;
use vrwv_core::playlist::Playlist;
use vrwv_core::surface::GrabHandle;
use vrwv_core::view::{ViewSettings, WebView};

pub fn run_demo(cfg: &VrwvConfig) -> Result<()> {
    let mut playlist = Playlist::new(cfg.demo_urls.clone());
    if playlist.is_empty() {
        println!("No demo URLs configured.");
        return Ok(());
    }

    let grab = GrabHandle::new();
    let mut view = WebView::new(
        ViewSettings::from_config(cfg),
        Arc::new(AdmissionPolicy::default()),
    );
    view.setup(&grab, None)?;
    let size = view.size();
    println!(
        "surface {}m x {}m, home {}",
        size.width, size.height, view.settings().default_url
    );

    let total = playlist.len();
    for _ in 0..total {
        let index = playlist.index();
        let url = playlist.current().unwrap_or_default().to_string();
        match view.submit(&url) {
            Ok(canonical) => println!("[{}/{}] loaded   {}", index + 1, total, canonical),
            Err(e) => println!("[{}/{}] rejected {} ({})", index + 1, total, url, e),
        }
        view.advance(view.settings().loading_hold);
        playlist.next();
    }

    println!(
        "showing {}",
        view.current_url().as_deref().unwrap_or("-")
    );
    view.destroy();
    Ok(())
}
