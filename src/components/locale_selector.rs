use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::locale::Locale;

#[derive(Properties, PartialEq)]
pub struct LocaleSelectorProps {
    pub locale: Locale,
    pub on_change: Callback<Locale>,
}

/// Language selector dropdown component
#[function_component(LocaleSelector)]
pub fn locale_selector(props: &LocaleSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(locale) = target.value().parse::<Locale>() {
                callback.emit(locale);
            }
        })
    };

    html! {
        <select
            class="locale-selector"
            onchange={on_change}
            aria-label="Language"
            title="Language"
        >
            {
                Locale::all().iter().map(|l| {
                    let selected = *l == props.locale;
                    html! {
                        <option value={l.code()} {selected}>{l.name()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
