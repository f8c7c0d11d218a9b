use anyhow::Result;
use std::env;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use timepicker::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    // 2. Load the configuration, falling back to a twelve-hour format.
    let config = match env::args().nth(1) {
        Some(path) => PickerConfig::load(path)?,
        None => PickerConfig {
            format: "hh:mm:ss A".to_string(),
            minute_interval: 5,
            second_interval: 15,
            ..Default::default()
        },
    };

    // 3. Create the picker.
    let mut picker = TimePicker::new(config)?;
    info!(
        "Format {:?} resolves to hour={:?} minute={:?} second={:?} apm={:?}",
        picker.format(),
        picker.hour_type(),
        picker.minute_type(),
        picker.second_type(),
        picker.apm_type(),
    );

    // 4. Listen to the event stream and count changes.
    spawn_event_listener(&picker);
    let change_count = Arc::new(AtomicU32::new(0));
    let counter_clone = change_count.clone();
    let _listener_id = picker.on_change(move |_| {
        counter_clone.fetch_add(1, Ordering::Relaxed);
    });

    // 5. Walk through a typical interaction.
    for kind in ComponentKind::ALL {
        let values = picker.values(kind);
        if !values.is_empty() {
            info!("[{kind}] {} options: {}", values.len(), values.join(" "));
        }
    }

    picker.seed_now();
    info!("[SEEDED] {}", picker.display_time());

    picker.toggle_dropdown();
    if let Some(hour) = picker.hours().get(8).cloned() {
        picker.set_hours(&hour)?;
    }
    if let Some(minute) = picker.minutes().last().cloned() {
        picker.set_minutes(&minute)?;
    }
    info!("[SELECTED] {}", picker.display_time());
    picker.on_key(Key::Escape);

    picker.clear()?;
    info!("[CLEARED] {}", picker.display_time());

    // Give the listener task a moment to drain.
    tokio::task::yield_now().await;
    info!("{} changes observed.", change_count.load(Ordering::Relaxed));

    Ok(())
}

/// Spawns a task that logs every event the picker broadcasts.
fn spawn_event_listener(picker: &TimePicker) {
    let mut event_rx = picker.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = event_rx.recv().await {
            info!("[EVENT] => {:?}", event);
        }
    });
}
