use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::models::locale::Locale;

/// Handle returned by `use_locale` hook
#[derive(Clone, PartialEq)]
pub struct LocaleHandle {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

/// Custom hook for locale management with localStorage persistence
#[hook]
pub fn use_locale() -> LocaleHandle {
    // Stored preference first, then the browser language, then English
    let locale = use_state(|| {
        load_locale_preference()
            .or_else(detect_browser_locale)
            .unwrap_or_default()
    });

    // Effect: Persist locale to localStorage on change
    {
        let locale_value = *locale;
        use_effect_with(locale_value, move |locale| {
            save_locale_preference(*locale);
            || ()
        });
    }

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |new_locale| locale.set(new_locale))
    };

    LocaleHandle {
        locale: *locale,
        set_locale,
    }
}

/// Load locale preference from localStorage
fn load_locale_preference() -> Option<Locale> {
    gloo_storage::LocalStorage::get(Config::LOCALE_STORAGE_KEY).ok()
}

/// Map `navigator.language` onto a supported locale
fn detect_browser_locale() -> Option<Locale> {
    let language = web_sys::window()?.navigator().language()?;
    match language.parse() {
        Ok(locale) => Some(locale),
        Err(e) => {
            gloo::console::debug!(&format!("{e}, falling back to default"));
            None
        }
    }
}

/// Save locale preference to localStorage
fn save_locale_preference(locale: Locale) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::LOCALE_STORAGE_KEY, locale) {
        web_sys::console::warn_1(&format!("Failed to save locale: {e:?}").into());
    }
}
