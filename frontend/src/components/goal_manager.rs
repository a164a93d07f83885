//! Editable card for one savings goal.
//!
//! Every change becomes a [`GoalEdit`] applied by a [`GoalEditor`]; the
//! resulting [`GoalUpdate`] goes to the goals store and to the goal writer.

use chrono::NaiveDate;
use shared::sync::{GoalEdit, GoalEditor, GoalUpdate, IconPicker, WriteStatus};
use shared::Goal;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::date_picker::DatePicker;
use crate::components::emoji_picker::EmojiPicker;
use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::hooks::use_goal_writer::use_goal_writer;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::store::{GoalsAction, GoalsContext};

#[derive(Properties, PartialEq)]
pub struct GoalManagerProps {
    pub goal: Goal,
    pub api_client: ApiClient,
    #[prop_or(DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u32,
}

/// Identity plus every field of a goal. Amounts compare by bit pattern so a
/// NaN amount is equal to itself.
type GoalKey = (String, String, NaiveDate, u64, Option<String>);

fn goal_key(goal: &Goal) -> GoalKey {
    (
        goal.id.clone(),
        goal.name.clone(),
        goal.target_date,
        goal.target_amount.to_bits(),
        goal.icon.clone(),
    )
}

/// Hand one update to the goals store and to the remote writer
fn publish(update: GoalUpdate, dispatch: impl FnOnce(GoalsAction), submit: impl FnOnce(GoalUpdate)) {
    dispatch(GoalsAction::Updated(update.goal.clone()));
    submit(update);
}

/// Text shown in the amount input for a stored amount
fn amount_input_text(amount: f64) -> String {
    if amount.is_finite() {
        amount.to_string()
    } else {
        String::new()
    }
}

#[function_component(GoalManager)]
pub fn goal_manager(props: &GoalManagerProps) -> Html {
    let goals = use_context::<GoalsContext>()
        .expect("GoalManager must be rendered inside a GoalsContext provider");
    let writer = use_goal_writer(&props.api_client, props.debounce_ms);
    let editor = {
        let goal = props.goal.clone();
        let store_copy = goals.get(&goal.id).cloned();
        use_mut_ref(move || GoalEditor::new(goal, store_copy.as_ref()))
    };
    let amount_text = use_state(|| amount_input_text(props.goal.target_amount));
    let force_update = use_force_update();

    // Reset local state when the incoming goal differs from the one being edited
    {
        let editor = editor.clone();
        let goals = goals.clone();
        let amount_text = amount_text.clone();
        let force_update = force_update.clone();
        let goal = props.goal.clone();
        use_effect_with(goal_key(&props.goal), move |key| {
            if goal_key(editor.borrow().base()) != *key {
                Logger::debug_with_component("goal-manager", &format!("Resetting editor for {}", goal.id));
                editor.borrow_mut().reset(goal.clone(), goals.get(&goal.id));
                amount_text.set(amount_input_text(goal.target_amount));
                force_update.force_update();
            }
            || ()
        });
    }

    // Show renames that reach the store for this goal
    {
        let editor = editor.clone();
        let force_update = force_update.clone();
        let stored_name = goals.get(&props.goal.id).map(|goal| goal.name.clone());
        use_effect_with((props.goal.id.clone(), stored_name), move |(_, stored_name)| {
            if let Some(name) = stored_name {
                let changed = editor.borrow_mut().follow_stored_name(name);
                if changed {
                    force_update.force_update();
                }
            }
            || ()
        });
    }

    let on_update = {
        let goals = goals.clone();
        let writer = writer.clone();
        Callback::from(move |update: GoalUpdate| {
            publish(update, |action| goals.dispatch(action), |update| writer.submit(update));
        })
    };

    let apply_edit = {
        let editor = editor.clone();
        let force_update = force_update.clone();
        Callback::from(move |edit: GoalEdit| {
            let update = editor.borrow_mut().apply(edit);
            // A cleared date changes nothing
            if let Some(update) = update {
                on_update.emit(update);
                force_update.force_update();
            }
        })
    };

    let on_name_input = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply_edit.emit(GoalEdit::Name(input.value()));
        })
    };

    let on_amount_input = {
        let apply_edit = apply_edit.clone();
        let amount_text = amount_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            apply_edit.emit(GoalEdit::amount_from_input(&value));
            amount_text.set(value);
        })
    };

    let on_field_blur = {
        let writer = writer.clone();
        let goal_id = props.goal.id.clone();
        Callback::from(move |_: FocusEvent| writer.flush(&goal_id))
    };

    let on_date_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |date: Option<NaiveDate>| apply_edit.emit(GoalEdit::TargetDate(date)))
    };

    let on_open_picker = {
        let editor = editor.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            editor.borrow_mut().open_picker();
            force_update.force_update();
        })
    };

    // Any click that reaches the container landed outside the picker
    let on_container_click = {
        let editor = editor.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: MouseEvent| {
            let is_open = editor.borrow().picker() == IconPicker::Open;
            if is_open {
                editor.borrow_mut().close_picker();
                force_update.force_update();
            }
        })
    };

    let on_picker_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_pick_icon = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |(native, e): (String, MouseEvent)| {
            e.stop_propagation();
            apply_edit.emit(GoalEdit::Icon(native));
        })
    };

    let on_retry = {
        let writer = writer.clone();
        let goal_id = props.goal.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            writer.retry(&goal_id);
        })
    };

    let current = editor.borrow().current();
    let picker_open = editor.borrow().picker() == IconPicker::Open;
    let save_status = writer.status(&props.goal.id);

    html! {
        <div class="goal-manager" onclick={on_container_click}>
            <div class="goal-icon-row">
                if let Some(icon) = current.icon.clone() {
                    <button type="button" class="transparent-button goal-icon" onclick={on_open_picker}>
                        {icon}
                    </button>
                } else {
                    <button type="button" class="transparent-button add-icon-button" onclick={on_open_picker}>
                        <span class="add-icon-glyph">{"☺"}</span>
                        <span class="add-icon-text">{"Add icon"}</span>
                    </button>
                }

                if picker_open {
                    <div class="emoji-picker-container" onclick={on_picker_click}>
                        <EmojiPicker on_pick={on_pick_icon} />
                    </div>
                }
            </div>

            <input
                type="text"
                class="goal-name-input"
                placeholder="What are you saving for?"
                value={current.name.clone()}
                oninput={on_name_input}
                onblur={on_field_blur.clone()}
            />

            <div class="goal-fields">
                <div class="goal-field">
                    <span class="goal-field-label">{"📅 Target date"}</span>
                    <DatePicker
                        selected_date={Some(current.target_date)}
                        on_date_change={on_date_change}
                    />
                </div>

                <div class="goal-field">
                    <span class="goal-field-label">{"💲 Target amount"}</span>
                    <input
                        type="number"
                        class="goal-amount-input"
                        min="0"
                        step="any"
                        value={(*amount_text).clone()}
                        oninput={on_amount_input}
                        onblur={on_field_blur}
                    />
                </div>
            </div>

            <div class="goal-save-status">
                {match save_status {
                    WriteStatus::Idle => html! {},
                    WriteStatus::Saving => html! { <span class="save-status saving">{"Saving..."}</span> },
                    WriteStatus::Failed(error) => html! {
                        <span class="save-status error">
                            {format!("Couldn't save: {}", error)}
                            <button type="button" class="retry-button" onclick={on_retry}>{"Retry"}</button>
                        </span>
                    },
                }}
            </div>
        </div>
    }
}
