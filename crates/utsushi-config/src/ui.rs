use serde::{Deserialize, Serialize};

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_window_width() -> u32 {
    700
}

fn default_window_height() -> u32 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Progress channel poll cadence for the UI timer.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}
