use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;

use crate::formatting::BoxChars;

/// Default service endpoint for the leaderboard rows
pub const DEFAULT_ENDPOINT: &str = "/points";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Initial rows per page: "25", "50", "100" or "all"
    pub default_page_size: String,
    pub use_unicode: bool,
    pub api: ApiConfig,
    pub theme: ThemeConfig,
}

/// Connection settings for the scoring service
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Bearer token for the service; not sent with leaderboard requests
    pub bearer_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub highlight_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub leader_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
}

/// Resolved rendering settings handed to widgets and command output
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub selection_fg: Color,
    pub highlight_bg: Color,
    pub leader_fg: Color,
    pub error_fg: Color,
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            default_page_size: "25".to_string(),
            use_unicode: true,
            api: ApiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "https://binging.fly.dev".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            bearer_token: None,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            highlight_bg: Color::Rgb(90, 70, 0),
            leader_fg: Color::Rgb(255, 215, 0), // Gold
            error_fg: Color::Red,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

impl Config {
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            selection_fg: self.theme.selection_fg,
            highlight_bg: self.theme.highlight_bg,
            leader_fg: self.theme.leader_fg,
            error_fg: self.theme.error_fg,
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }
}

impl ApiConfig {
    /// Full URL of the leaderboard endpoint
    pub fn leaderboard_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }

    /// Whether a non-empty bearer token is configured
    pub fn is_token_configured(&self) -> bool {
        self.bearer_token
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        "gold" => return Some(Color::Rgb(255, 215, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#').filter(|h| h.is_ascii()) {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("ORANGE"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("gold"), Some(Color::Rgb(255, 215, 0)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.default_page_size, "25");
        assert_eq!(config.api.endpoint, "/points");
        assert!(!config.api.is_token_configured());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
log_level = "debug"
default_page_size = "all"
use_unicode = false

[api]
base_url = "http://localhost:8080/"
endpoint = "/lb/points"
bearer_token = "secret"

[theme]
highlight_bg = "#202020"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, "/dev/null");
        assert!(!config.use_unicode);
        assert_eq!(config.api.leaderboard_url(), "http://localhost:8080/lb/points");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.theme.highlight_bg, Color::Rgb(32, 32, 32));
        assert_eq!(config.theme.selection_fg, Color::Rgb(255, 165, 0));
        assert_eq!(config.display().box_chars, BoxChars::ascii());
    }

    #[test]
    fn test_token_configured() {
        let mut api = ApiConfig::default();
        assert!(!api.is_token_configured());
        api.bearer_token = Some("  ".to_string());
        assert!(!api.is_token_configured());
        api.bearer_token = Some("abc".to_string());
        assert!(api.is_token_configured());
    }

    #[test]
    fn test_invalid_color_in_toml_is_an_error() {
        let result: Result<Config, _> = toml::from_str("[theme]\nerror_fg = \"nope\"\n");
        assert!(result.is_err());
    }
}
