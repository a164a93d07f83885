use chrono::{Datelike, NaiveDate};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::services::date_utils::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    pub selected_date: Option<NaiveDate>,
    /// Called with the picked day, or `None` when the date is cleared
    pub on_date_change: Callback<Option<NaiveDate>>,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let show_calendar = use_state(|| false);
    let calendar_ref = use_node_ref();
    let today_date = today();

    let display_text = match props.selected_date {
        Some(date) if date == today_date => "Today".to_string(),
        Some(date) => format_date_for_display(date),
        None => "No date".to_string(),
    };

    // Month shown in the dropdown, starting at the selected date's month
    let initial = props.selected_date.unwrap_or(today_date);
    let calendar_month = use_state(|| (initial.year(), initial.month()));

    let toggle_calendar = {
        let show_calendar = show_calendar.clone();
        let calendar_month = calendar_month.clone();
        let selected_date = props.selected_date;
        Callback::from(move |_: MouseEvent| {
            if !*show_calendar {
                let shown = selected_date.unwrap_or_else(today);
                calendar_month.set((shown.year(), shown.month()));
            }
            show_calendar.set(!*show_calendar);
        })
    };

    let emit_and_close = {
        let on_date_change = props.on_date_change.clone();
        let show_calendar = show_calendar.clone();
        Callback::from(move |date: Option<NaiveDate>| {
            on_date_change.emit(date);
            show_calendar.set(false);
        })
    };

    let on_today_click = {
        let emit_and_close = emit_and_close.clone();
        Callback::from(move |_: MouseEvent| emit_and_close.emit(Some(today())))
    };

    let on_clear_click = {
        let emit_and_close = emit_and_close.clone();
        Callback::from(move |_: MouseEvent| emit_and_close.emit(None))
    };

    // Close the dropdown on clicks outside the picker
    {
        let show_calendar = show_calendar.clone();
        let calendar_ref = calendar_ref.clone();
        use_effect_with(*show_calendar, move |is_open| {
            let listener = match (*is_open, window()) {
                (true, Some(window)) => Some(EventListener::new(&window, "click", move |e| {
                    let Some(element) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                        return;
                    };
                    if let Some(calendar_element) = calendar_ref.cast::<Element>() {
                        if !calendar_element.contains(Some(&element)) {
                            show_calendar.set(false);
                        }
                    }
                })),
                _ => None,
            };

            move || drop(listener)
        });
    }

    let on_prev_month = {
        let calendar_month = calendar_month.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *calendar_month;
            calendar_month.set(previous_month(year, month));
        })
    };

    let on_next_month = {
        let calendar_month = calendar_month.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *calendar_month;
            calendar_month.set(next_month(year, month));
        })
    };

    let (year, month) = *calendar_month;
    let calendar_days = generate_calendar_days(year, month);

    html! {
        <div class="date-picker" ref={calendar_ref.clone()}>
            <div class="date-picker-input">
                <button
                    type="button"
                    class="date-display-button"
                    onclick={toggle_calendar}
                >
                    <span class="date-text">{display_text}</span>
                    <span class="calendar-icon">{"📅"}</span>
                </button>

                if *show_calendar {
                    <div class="calendar-dropdown">
                        <div class="calendar-header">
                            <button type="button" class="nav-button" onclick={on_prev_month}>{"‹"}</button>
                            <span class="month-year">{format!("{} {}", month_name(month), year)}</span>
                            <button type="button" class="nav-button" onclick={on_next_month}>{"›"}</button>
                        </div>

                        <div class="calendar-grid">
                            <div class="weekday-header">
                                <span>{"Sun"}</span>
                                <span>{"Mon"}</span>
                                <span>{"Tue"}</span>
                                <span>{"Wed"}</span>
                                <span>{"Thu"}</span>
                                <span>{"Fri"}</span>
                                <span>{"Sat"}</span>
                            </div>

                            <div class="calendar-days">
                                {for calendar_days.iter().map(|day| {
                                    let emit_and_close = emit_and_close.clone();
                                    let date = day.date;
                                    html! {
                                        <button
                                            type="button"
                                            class={classes!(
                                                "calendar-day",
                                                if day.is_current_month { "current-month" } else { "other-month" },
                                                (props.selected_date == Some(date)).then_some("selected"),
                                                (date == today_date).then_some("today")
                                            )}
                                            onclick={Callback::from(move |_: MouseEvent| emit_and_close.emit(Some(date)))}
                                        >
                                            {date.day()}
                                        </button>
                                    }
                                })}
                            </div>
                        </div>

                        <div class="calendar-footer">
                            <button type="button" class="today-button" onclick={on_today_click}>
                                {"Today"}
                            </button>
                            <button type="button" class="clear-button" onclick={on_clear_click}>
                                {"Clear"}
                            </button>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}
