//! `vrwv sync <url>...` – host view broadcasts, client view applies.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use vrwv_core::admission::AdmissionPolicy;
use vrwv_core::config::VrwvConfig;
use vrwv_core::surface::GrabHandle;
use vrwv_core::sync::{run_host_loop, Role, UrlSync};
use vrwv_core::view::{ViewEvent, ViewSettings, WebView};

const BROADCAST_TIMEOUT: Duration = Duration::from_secs(5);

async fn deliver_next(
    out_rx: &mut mpsc::Receiver<String>,
    client_sync: &mut UrlSync,
    client: &WebView,
) -> Result<()> {
    let url = tokio::time::timeout(BROADCAST_TIMEOUT, out_rx.recv())
        .await
        .context("timed out waiting for host broadcast")?
        .context("sync loop ended early")?;
    let Some(url) = client_sync.receive(&url) else {
        return Ok(());
    };
    match client.submit(&url) {
        Ok(canonical) => println!("client loaded   {canonical}"),
        Err(e) => println!("client rejected {url} ({e})"),
    }
    Ok(())
}

pub async fn run_sync(cfg: &VrwvConfig, urls: &[String]) -> Result<()> {
    let policy = Arc::new(AdmissionPolicy::default());
    let settings = ViewSettings::from_config(cfg);
    let host_grab = GrabHandle::new();
    let client_grab = GrabHandle::new();

    let mut host = WebView::new(settings.clone(), Arc::clone(&policy));
    let mut client = WebView::new(settings, policy);
    host.setup(&host_grab, None)?;
    client.setup(&client_grab, None)?;

    let (src_tx, src_rx) = watch::channel(host.current_url().unwrap_or_default());
    let forward = host.events().subscribe(move |e: &ViewEvent| {
        if let ViewEvent::Loaded(url) = e {
            let _ = src_tx.send(url.clone());
        }
    });

    let interval = cfg.sync.interval();
    let (out_tx, mut out_rx) = mpsc::channel(16);
    let task = tokio::spawn(run_host_loop(
        UrlSync::new(Role::Host, interval),
        src_rx,
        out_tx,
    ));
    let mut client_sync = UrlSync::new(Role::Client, interval);

    let mut broadcast = host.current_url();
    println!("host   home     {}", broadcast.as_deref().unwrap_or("-"));
    deliver_next(&mut out_rx, &mut client_sync, &client).await?;

    for raw in urls {
        match host.submit(raw) {
            Ok(url) => {
                println!("host   loaded   {url}");
                if broadcast.as_deref() != Some(url.as_str()) {
                    broadcast = Some(url);
                    deliver_next(&mut out_rx, &mut client_sync, &client).await?;
                }
            }
            Err(e) => println!("host   rejected {raw} ({e})"),
        }
    }

    // Dropping the forwarder closes the source and ends the loop.
    drop(forward);
    task.await.context("sync loop panicked")?;

    host.destroy();
    client.destroy();
    Ok(())
}
