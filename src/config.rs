//! Sheet locations read from the environment
//!
//! Each URL falls back to the sheet the pages were published against.

use std::collections::HashMap;

use envconfig::Envconfig;

use crate::error::{Result, SheetError};

/// Published sheet locations, overridable through the environment
#[derive(Envconfig, Debug, Clone)]
pub struct SheetConfig {
    #[envconfig(
        from = "CALENDAR_CSV_URL",
        default = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQwEvws-k4zNJGkK7H8KtUIbcpNCYjUKYcaDTl4td5VisYupSKMxtK1_tmbiH8gPA2NgVGwDfSVamAz/pub?output=csv"
    )]
    pub calendar_csv_url: String,

    #[envconfig(
        from = "INVENTORY_CSV_URL",
        default = "https://docs.google.com/spreadsheets/d/1P5ciYvu7D1KiJxGgAVgVHVYfoj_aicjiCVASuEm_SQw/export?format=csv&gid=0"
    )]
    pub inventory_csv_url: String,

    #[envconfig(
        from = "BOARD_CSV_URL",
        default = "https://docs.google.com/spreadsheets/d/1P5ciYvu7D1KiJxGgAVgVHVYfoj_aicjiCVASuEm_SQw/export?format=csv&gid=1812346023"
    )]
    pub board_csv_url: String,
}

impl SheetConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::init_from_env().map_err(|e| SheetError::Config(e.to_string()))
    }

    /// Load from an explicit variable map
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        Self::init_from_hashmap(vars).map_err(|e| SheetError::Config(e.to_string()))
    }
}
