use serde_json::Value;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::locale::Locale;
use crate::models::record::Record;

/// Column order: the date field first, then every other field in first-seen order.
pub fn table_columns(records: &[Record], date_field: &str) -> Vec<String> {
    let mut columns = vec![date_field.to_string()];
    for key in records.iter().flat_map(|record| record.keys()) {
        if !columns.iter().any(|c| c == key) {
            columns.push(key.clone());
        }
    }
    columns
}

/// Text shown for a single cell.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "—".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ReadingsTableProps {
    pub records: Rc<Vec<Record>>,
    pub date_field: AttrValue,
    #[prop_or_default]
    pub locale: Locale,
}

#[function_component(ReadingsTable)]
pub fn readings_table(props: &ReadingsTableProps) -> Html {
    if props.records.is_empty() {
        return html! {
            <div class="readings-empty">
                <p>{props.locale.empty_period_label()}</p>
            </div>
        };
    }

    let columns = table_columns(&props.records, &props.date_field);

    html! {
        <table class="readings-table">
            <thead>
                <tr>
                    { for columns.iter().map(|c| html! { <th>{c.clone()}</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    props.records.iter().map(|record| html! {
                        <tr>
                            { for columns.iter().map(|c| html! { <td>{cell_text(record.get(c))}</td> }) }
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
