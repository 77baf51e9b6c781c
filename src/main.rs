use std::rc::Rc;
use treatment_dashboard::components::{LocaleSelector, MonthNavigator, ReadingsTable};
use treatment_dashboard::config::Config;
use treatment_dashboard::hooks::{use_filtered_records, use_locale, use_now};
use treatment_dashboard::models::period::PeriodSelector;
use treatment_dashboard::models::record::Record;
use yew::prelude::*;

/// Readings bundled with the app in place of a backend query
fn load_sample_readings() -> Vec<Record> {
    match serde_json::from_str(include_str!("sample_readings.json")) {
        Ok(records) => records,
        Err(e) => {
            gloo::console::error!(&format!("Failed to parse sample readings: {e}"));
            Vec::new()
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let now = use_now(Config::CLOCK_TICK_MS);
    let locale = use_locale();
    let period = use_state(PeriodSelector::default);
    let readings: Rc<Vec<Record>> = use_memo((), |_| load_sample_readings());

    let date_field = AttrValue::from(Config::DEFAULT_DATE_FIELD);
    let filtered = use_filtered_records(readings, date_field.clone(), *period, now);

    let on_period_change = {
        let period = period.clone();
        Callback::from(move |next| period.set(next))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Reforming Water Treatment"}</h1>
                <LocaleSelector locale={locale.locale} on_change={locale.set_locale.clone()} />
            </header>

            <main class="app-main">
                <section class="period-section">
                    <MonthNavigator
                        period={*period}
                        today={now.date_naive()}
                        locale={locale.locale}
                        on_change={on_period_change}
                    />
                </section>

                <section class="data-section">
                    <ReadingsTable records={filtered} {date_field} locale={locale.locale} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
