use std::env;

use serde::{Deserialize, Serialize};

use self::ocr::OcrConfig;
use self::ui::UiConfig;

pub mod ocr;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();

        // Override for machines where tesseract is not on the search path
        if let Ok(cmd) = env::var("UTSUSHI_TESSERACT_CMD") {
            if !cmd.is_empty() {
                config.ocr.command = Some(cmd.into());
            }
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocr: OcrConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
