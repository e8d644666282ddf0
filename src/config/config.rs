use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use Unicode glyphs for status icons
    pub use_glyphs: bool,

    /// Show the id column in the contact table
    pub show_ids: bool,

    /// Icons for notifications (can be overridden)
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub success: String,
    pub error: String,
    pub info: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Start with the four sample contacts
    pub seed_sample_contacts: bool,

    /// Ask for y/n before deleting a contact in the TUI
    pub confirm_delete: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_glyphs: true,
            show_ids: false,
            icons: IconConfig::default(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            success: "✅".to_string(),
            error: "❌".to_string(),
            info: "ℹ️".to_string(),
        }
    }
}

impl IconConfig {
    /// ASCII alternatives for terminals without glyph support
    pub fn simple() -> Self {
        Self {
            success: "[OK]".to_string(),
            error: "[X]".to_string(),
            info: "[i]".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            seed_sample_contacts: true,
            confirm_delete: false,
        }
    }
}

impl Config {
    /// Load config from the default location, writing defaults if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            info!(target: "config", "Created default config at {}", config_path.display());
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        if !config.display.use_glyphs {
            config.display.icons = IconConfig::simple();
        }

        debug!(target: "config", "Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("phonebook").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# Phonebook Configuration File
# Location: ~/.config/phonebook/config.toml (Linux)
#           ~/Library/Application Support/phonebook/config.toml (macOS)
#           %APPDATA%\phonebook\config.toml (Windows)

[display]
# Use Unicode glyphs for status icons
# Set to false for ASCII-only mode (better compatibility)
use_glyphs = true

# Show the id column in the contact table
show_ids = false

# Notification icons
# These are automatically set to ASCII when use_glyphs = false
[display.icons]
success = "✅"
error = "❌"
info = "ℹ️"

[behavior]
# Start with the four sample contacts
seed_sample_contacts = true

# Ask for confirmation before deleting a contact
confirm_delete = false
"#
        .to_string()
    }

    /// Initialize config with a setup wizard
    pub fn init_wizard() -> Result<Self> {
        println!("Phonebook Configuration Setup");
        println!("=============================");

        print!("Does your terminal support Unicode icons? (y/n) [y]: ");
        std::io::Write::flush(&mut std::io::stdout())?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let use_glyphs = !input.trim().eq_ignore_ascii_case("n");

        let mut config = Config::default();
        config.display.use_glyphs = use_glyphs;
        if !use_glyphs {
            config.display.icons = IconConfig::simple();
        }

        print!("Start with sample contacts? (y/n) [y]: ");
        std::io::Write::flush(&mut std::io::stdout())?;
        input.clear();
        std::io::stdin().read_line(&mut input)?;
        config.behavior.seed_sample_contacts = !input.trim().eq_ignore_ascii_case("n");

        print!("Confirm before deleting contacts? (y/n) [n]: ");
        std::io::Write::flush(&mut std::io::stdout())?;
        input.clear();
        std::io::stdin().read_line(&mut input)?;
        config.behavior.confirm_delete = input.trim().eq_ignore_ascii_case("y");

        config.save()?;

        println!("\nConfiguration saved to: {:?}", Config::get_config_path()?);
        println!("You can edit this file directly to customize further.");

        Ok(config)
    }
}
