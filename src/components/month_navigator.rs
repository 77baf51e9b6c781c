use chrono::NaiveDate;
use yew::prelude::*;

use crate::models::locale::Locale;
use crate::models::period::PeriodSelector;

#[derive(Properties, PartialEq)]
pub struct MonthNavigatorProps {
    pub period: PeriodSelector,
    pub today: NaiveDate,
    #[prop_or_default]
    pub locale: Locale,
    pub on_change: Callback<PeriodSelector>,
}

/// Previous / next month arrows around the period label, plus a jump back to today.
///
/// The selector is owned by the parent; every transition goes through `on_change`.
#[function_component(MonthNavigator)]
pub fn month_navigator(props: &MonthNavigatorProps) -> Html {
    let period = props.period;
    let today = props.today;
    let locale = props.locale;
    let can_advance = period.can_advance(today);

    let on_previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(period.previous(today)))
    };

    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| match period.next(today) {
            Ok(next) => on_change.emit(next),
            Err(e) => gloo::console::warn!(&format!("Ignoring navigation: {e}")),
        })
    };

    let on_today = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(period.go_to_today()))
    };

    let previous_label = locale.previous_month_label();
    let next_label = locale.next_month_label();

    html! {
        <div class="month-navigator">
            <button
                class="month-nav-button"
                onclick={on_previous}
                aria-label={previous_label}
                title={previous_label}
            >
                {"‹"}
            </button>
            <span class="month-nav-label">{period.label(locale)}</span>
            <button
                class="month-nav-button"
                onclick={on_next}
                disabled={!can_advance}
                aria-label={next_label}
                title={next_label}
            >
                {"›"}
            </button>
            if !period.is_today() {
                <button class="month-nav-today" onclick={on_today}>
                    {locale.today_label()}
                </button>
            }
        </div>
    }
}
