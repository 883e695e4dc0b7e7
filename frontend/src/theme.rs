//! Light/dark preference, persisted in localStorage under the `theme` key
//! and reflected as a `dark-mode` class on `document.body`.

const THEME_STORAGE_KEY: &str = "theme";
const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_storage_value(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Read the persisted preference. Missing storage or a missing key
    /// falls back to light.
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

        match stored.as_deref() {
            Some(value) => Theme::from_storage_value(value),
            None => Theme::Light,
        }
    }

    /// Persist the preference and switch the page's visual mode. Storage
    /// failures are ignored.
    pub fn apply(self) {
        if let Some(storage) =
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        {
            let _ = storage.set_item(THEME_STORAGE_KEY, self.storage_value());
        }

        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            let _ = body
                .class_list()
                .toggle_with_force(DARK_MODE_CLASS, self == Theme::Dark);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_twice_round_trips() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
    }

    #[test]
    fn storage_values_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_storage_value(theme.storage_value()), theme);
        }
    }

    #[test]
    fn unknown_storage_value_defaults_to_light() {
        assert_eq!(Theme::from_storage_value("solarized"), Theme::Light);
    }
}
