use crate::view::ViewOptions;
use crate::word_model::LoadOptions;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const RC_FILE_NAME: &str = ".palindromerc";
const DEFAULT_FEATURED: &str = "ekitike";

#[derive(Debug, Clone, PartialEq)]
pub struct RcConfig {
    pub tile_gap: usize,
    pub show_help: bool,
    pub color: bool,
    pub palindromes: Option<PathBuf>,
    pub emordnilaps: Option<PathBuf>,
    pub featured: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            tile_gap: 2,
            show_help: true,
            color: true,
            palindromes: None,
            emordnilaps: None,
            featured: Some(DEFAULT_FEATURED.to_string()),
            log_file: None,
        }
    }
}

impl RcConfig {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            tile_gap: self.tile_gap,
            show_help: self.show_help,
            color: self.color,
        }
    }

    pub fn load_options(&self, filter: Option<String>) -> LoadOptions {
        LoadOptions {
            palindromes: self.palindromes.clone(),
            emordnilaps: self.emordnilaps.clone(),
            featured: self.featured.clone(),
            filter,
        }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .palindromerc in:
    /// 1. Current directory
    /// 2. Home directory (~/.palindromerc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(RC_FILE_NAME);
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(RC_FILE_NAME);
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load and parse the RC file, falling back to defaults
    pub fn load_config() -> RcConfig {
        match Self::get_rc_path() {
            Some(rc_path) => Self::load_from(&rc_path),
            None => RcConfig::default(),
        }
    }

    pub fn load_from(path: &Path) -> RcConfig {
        let mut config = RcConfig::default();
        // An unreadable rc file is treated like a missing one
        if let Ok(content) = fs::read_to_string(path) {
            Self::parse_config_content(&content, &mut config);
        }
        config
    }

    fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    fn parse_config_line(line: &str, config: &mut RcConfig) {
        // Remove inline comments
        let line = if let Some(pos) = line.find('#') {
            &line[..pos]
        } else {
            line
        }
        .trim();

        // Handle "set" commands (vim-style)
        if let Some(stripped) = line.strip_prefix("set ") {
            match stripped.trim() {
                "help" => config.show_help = true,
                "nohelp" => config.show_help = false,
                "color" => config.color = true,
                "nocolor" => config.color = false,
                setting => {
                    if let Some(value) = setting.strip_prefix("gap=") {
                        Self::apply_gap(value, config);
                    }
                }
            }
        }
        // Handle direct key-value pairs
        else if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();

            match key {
                "gap" | "tile_gap" => Self::apply_gap(value, config),
                "help" | "show_help" => config.show_help = Self::parse_bool(value),
                "color" | "colour" => config.color = Self::parse_bool(value),
                "palindromes" => config.palindromes = Self::parse_path(value),
                "emordnilaps" => config.emordnilaps = Self::parse_path(value),
                "featured" => {
                    config.featured = if value.is_empty() {
                        None
                    } else {
                        Some(value.to_lowercase())
                    };
                }
                "log_file" | "logfile" => config.log_file = Self::parse_path(value),
                _ => {} // Unknown setting, ignore
            }
        }
    }

    fn apply_gap(value: &str, config: &mut RcConfig) {
        if let Ok(gap) = value.parse::<usize>() {
            if (1..=8).contains(&gap) {
                config.tile_gap = gap;
            }
        }
    }

    fn parse_bool(value: &str) -> bool {
        value == "true" || value == "1" || value == "yes"
    }

    fn parse_path(value: &str) -> Option<PathBuf> {
        if value.is_empty() {
            None
        } else {
            Some(PathBuf::from(value))
        }
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# palindrome-tiles configuration file (.palindromerc)
# Lines starting with # or " are comments

# Display settings
set gap=2              # Columns between tiles (1-8)
set help               # Show the key instructions (or set nohelp)
set color              # Color the tiles (or set nocolor)

# Word lists: JSON arrays of strings. Omit to use the built-in lists.
# palindromes=db/palindrome_words.json
# emordnilaps=db/emordnilap_words.json

# Word shown first in the palindrome list; leave empty to disable
featured=ekitike

# Write logs here while the viewer owns the screen
# log_file=/tmp/palindrome-tiles.log
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_vim_style_config() {
        let mut config = RcConfig::default();
        let content = r#"
            set gap=4
            set nohelp
            set nocolor
        "#;

        RcLoader::parse_config_content(content, &mut config);

        assert_eq!(config.tile_gap, 4);
        assert!(!config.show_help);
        assert!(!config.color);
    }

    #[test]
    fn test_parse_key_value_config() {
        let mut config = RcConfig::default();
        let content = r#"
            tile_gap=1
            show_help=no
            palindromes=/data/p.json
            emordnilaps = /data/e.json
            featured=Kayak
            log_file=/tmp/tiles.log
        "#;

        RcLoader::parse_config_content(content, &mut config);

        assert_eq!(config.tile_gap, 1);
        assert!(!config.show_help);
        assert_eq!(config.palindromes, Some(PathBuf::from("/data/p.json")));
        assert_eq!(config.emordnilaps, Some(PathBuf::from("/data/e.json")));
        assert_eq!(config.featured.as_deref(), Some("kayak"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tiles.log")));
    }

    #[test]
    fn test_parse_mixed_config_with_comments() {
        let mut config = RcConfig::default();
        let content = r#"
            # This is a comment
            set nohelp             # Hide instructions
            " This is also a comment

            gap=3                  # Custom gap
            # set nocolor          # This is commented out
            featured=
        "#;

        RcLoader::parse_config_content(content, &mut config);

        assert!(!config.show_help);
        assert!(config.color);
        assert_eq!(config.tile_gap, 3);
        assert_eq!(config.featured, None);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let mut config = RcConfig::default();
        let content = r#"
            set gap=0              # Invalid: too small
            set gap=20             # Invalid: too large
            tile_gap=invalid       # Invalid: not a number
            unknown_setting=value  # Unknown setting
            set bogus
        "#;

        RcLoader::parse_config_content(content, &mut config);

        assert_eq!(config, RcConfig::default());
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "set gap=5").unwrap();
        assert_eq!(RcLoader::load_from(file.path()).tile_gap, 5);

        let missing = RcLoader::load_from(Path::new("/nonexistent/.palindromerc"));
        assert_eq!(missing, RcConfig::default());
    }

    #[test]
    fn test_sample_rc_parses_to_defaults() {
        let mut config = RcConfig::default();
        RcLoader::parse_config_content(&RcLoader::generate_sample_rc(), &mut config);
        assert_eq!(config, RcConfig::default());
    }

    #[test]
    fn test_options_conversion() {
        let config = RcConfig {
            tile_gap: 3,
            color: false,
            ..RcConfig::default()
        };
        let view = config.view_options();
        assert_eq!(view.tile_gap, 3);
        assert!(!view.color);
        assert!(view.show_help);

        let load = config.load_options(Some("^r".to_string()));
        assert_eq!(load.featured.as_deref(), Some("ekitike"));
        assert_eq!(load.filter.as_deref(), Some("^r"));
        assert!(load.palindromes.is_none());
    }
}
