//! Colour-coded weekly timetable: one row per half-hour slot, one column
//! per available day.

use leptos::prelude::*;
use planner::Timetable;
use planner::palette;

#[component]
pub fn TimetableGrid(timetable: Timetable, colours: Vec<(String, [u8; 3])>) -> impl IntoView {
    let header_style = format!("background-color: {}", palette::hex(palette::HEADER));

    let day_headers = timetable
        .days
        .iter()
        .map(|day| view! { <th style=header_style.clone()>{day.as_str()}</th> })
        .collect_view();

    let rows = timetable
        .slots
        .iter()
        .zip(&timetable.cells)
        .map(|(time, cells)| {
            let cells = cells
                .iter()
                .map(|cell| {
                    let label = cell.clone().unwrap_or_default();
                    let style = format!("background-color: {}", palette::hex(palette::lookup(&colours, &label)));
                    view! { <td style=style>{label}</td> }
                })
                .collect_view();
            view! {
                <tr>
                    <th scope="row" style=header_style.clone()>{time.to_string()}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="timetable">
            <thead>
                <tr>
                    <th style=header_style.clone()>"Time"</th>
                    {day_headers}
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
