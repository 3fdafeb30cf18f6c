pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "desktop")]
mod commands;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `RUST_LOG` overrides the default `info` level
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::ocr::{choose_file, convert, get_view_state, init_controller, open_output_file};

    init_logging();
    tracing::info!("tesseract-gui v{} starting", env!("CARGO_PKG_VERSION"));

    let controller = init_controller();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .manage(controller)
        .invoke_handler(tauri::generate_handler![
            get_view_state,
            choose_file,
            convert,
            open_output_file
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
