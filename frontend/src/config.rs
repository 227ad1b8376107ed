use log::Level;

pub const SITE_NAME: &str = "BusinessRant";
pub const PRICE_LABEL: &str = "₦4500";

/// Where "Download The Rant Now" sends people. Set `RANT_PURCHASE_URL` at
/// build time (e.g. `RANT_PURCHASE_URL=https://... trunk build --release`).
pub fn get_purchase_url() -> &'static str {
    option_env!("RANT_PURCHASE_URL").unwrap_or("#")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
