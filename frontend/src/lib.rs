pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: panic hook, runtime config, logger, then the app.
pub fn run() {
    console_error_panic_hook::set_once();

    leptos::spawn_local(async move {
        config::init().await;
        if console_log::init_with_level(config::log_level()).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }
        log::info!("Starting HRMS Lite frontend");
        router::mount_app();
    });
}
