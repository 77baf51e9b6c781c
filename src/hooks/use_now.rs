use chrono::{DateTime, Local};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::clock::{Clock, SystemClock};

/// Current local time, re-read every `tick_ms` so day boundaries roll over.
#[hook]
pub fn use_now(tick_ms: u32) -> DateTime<Local> {
    let now = use_state(|| SystemClock.now());

    {
        let now = now.clone();
        use_effect_with(tick_ms, move |tick_ms| {
            let interval = Interval::new(*tick_ms, move || now.set(SystemClock.now()));
            move || drop(interval)
        });
    }

    *now
}
