//! The persisted `"theme"` preference in `localStorage`, and how it combines
//! with the colors a page passes in.

use synapse_engine::{ColorScheme, FieldConfig, Theme};
use web_sys::{Storage, Window};

pub const THEME_KEY: &str = "theme";

fn storage(window: &Window) -> Option<Storage> {
    window.local_storage().ok().flatten()
}

/// The stored theme, if any and recognized.
pub fn stored_theme(window: &Window) -> Option<Theme> {
    let value = storage(window)?.get_item(THEME_KEY).ok().flatten()?;
    match value.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            log::warn!("ignoring stored theme: {}", e);
            None
        }
    }
}

pub fn store_theme(window: &Window, theme: Theme) {
    let Some(storage) = storage(window) else {
        return;
    };
    if let Err(e) = storage.set_item(THEME_KEY, theme.as_str()) {
        log::warn!("failed to persist theme: {:?}", e);
    }
}

/// Whether the config JSON names a color itself, even one equal to a preset.
pub fn supplies_colors(config_json: Option<&str>) -> bool {
    let Some(json) = config_json else {
        return false;
    };
    match serde_json::from_str::<serde_json::Value>(json) {
        Ok(serde_json::Value::Object(map)) => {
            map.contains_key("particleColor") || map.contains_key("lineColor")
        }
        _ => false,
    }
}

/// Starting scheme: explicit colors win, then the stored theme, then the
/// config's defaults.
pub fn initial_scheme(
    config: &FieldConfig,
    explicit_colors: bool,
    stored: Option<Theme>,
) -> ColorScheme {
    match stored {
        Some(theme) if !explicit_colors => theme.scheme(),
        _ => config.color_scheme(),
    }
}

/// Theme the toggle starts from: the stored one, else whichever preset the
/// starting scheme matches, else dark.
pub fn initial_theme(scheme: ColorScheme, stored: Option<Theme>) -> Theme {
    if scheme == ColorScheme::light() {
        return Theme::Light;
    }
    if scheme == ColorScheme::dark() {
        return Theme::Dark;
    }
    stored.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use synapse_engine::Rgba;

    const DARK_JSON: &str =
        r#"{"particleColor": "rgba(99, 102, 241, 0.8)", "lineColor": "rgba(99, 102, 241, 0.15)"}"#;

    #[test]
    fn detects_color_keys() {
        assert!(supplies_colors(Some(DARK_JSON)));
        assert!(supplies_colors(Some(r#"{"lineColor": "rgb(1, 2, 3)"}"#)));
        assert!(!supplies_colors(Some(r#"{"particleCount": 10}"#)));
        assert!(!supplies_colors(Some("not json")));
        assert!(!supplies_colors(None));
    }

    #[test]
    fn explicit_dark_colors_beat_stored_light() {
        let config = FieldConfig::from_json(DARK_JSON).unwrap();
        let explicit = supplies_colors(Some(DARK_JSON));
        let scheme = initial_scheme(&config, explicit, Some(Theme::Light));
        assert_eq!(scheme, ColorScheme::dark());
        assert_eq!(initial_theme(scheme, Some(Theme::Light)), Theme::Dark);
    }

    #[test]
    fn stored_light_applies_without_explicit_colors() {
        let config = FieldConfig::default();
        let scheme = initial_scheme(&config, false, Some(Theme::Light));
        assert_eq!(scheme, ColorScheme::light());
        assert_eq!(initial_theme(scheme, Some(Theme::Light)), Theme::Light);
    }

    #[test]
    fn nothing_stored_keeps_config_colors() {
        let custom = ColorScheme::new(Rgba::new(1, 2, 3, 1.0), Rgba::new(4, 5, 6, 0.5));
        let config = FieldConfig::default().with_color_scheme(custom);
        assert_eq!(initial_scheme(&config, true, None), custom);
        assert_eq!(initial_scheme(&FieldConfig::default(), false, None), ColorScheme::dark());
        assert_eq!(initial_theme(custom, None), Theme::Dark);
    }
}
