// src/config/consts.rs

// Sources
pub const DATA_DIR: &str = "data";
pub const CRS_FILE: &str = "sampled_crs_list.csv";
pub const FINANCIAL_FILE: &str = "sampled_financial_reports.csv";

// Report types
pub const PRIMARY_TYPE: &str = "CRS";
pub const UNKNOWN_TYPE: &str = "Unknown";
pub const TYPE_BADGES: [&str; 4] = ["CRS", "AFR", "PAR", "CJ"];

// Field defaults
pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_AGENCY: &str = "Unknown";
pub const MISC_TOPIC: &str = "Misc";

// Multi-value delimiters
pub const TOPIC_DELIM: char = ';';
pub const TAG_DELIM: char = ';';

// Config
pub const CONFIG_FILE: &str = "report_browser.toml";
pub const ENV_PREFIX: &str = "REPORT_BROWSER_";

// Logging
pub const LOG_DIR: &str = ".report_browser";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_FILTER: &str = "info";
