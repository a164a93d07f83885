use shared::Goal;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GoalListProps {
    pub goals: Vec<Goal>,
    pub selected_id: Option<String>,
    pub on_select: Callback<Goal>,
    pub on_create: Callback<()>,
    #[prop_or_default]
    pub creating: bool,
}

/// Label for a goal in the list; goals whose name was cleared still get one
pub fn display_name(goal: &Goal) -> String {
    let name = goal.name.trim();
    if name.is_empty() {
        "Untitled goal".to_string()
    } else {
        name.to_string()
    }
}

#[function_component(GoalList)]
pub fn goal_list(props: &GoalListProps) -> Html {
    let on_create = {
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| on_create.emit(()))
    };

    html! {
        <nav class="goal-list">
            <ul>
                {for props.goals.iter().map(|goal| {
                    let is_selected = props.selected_id.as_deref() == Some(goal.id.as_str());
                    let on_select = {
                        let on_select = props.on_select.clone();
                        let goal = goal.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(goal.clone()))
                    };
                    html! {
                        <li key={goal.id.clone()}>
                            <button
                                type="button"
                                class={classes!("goal-list-item", is_selected.then_some("selected"))}
                                onclick={on_select}
                            >
                                <span class="goal-list-icon">{goal.icon.clone().unwrap_or_else(|| "🎯".to_string())}</span>
                                <span class="goal-list-name">{display_name(goal)}</span>
                            </button>
                        </li>
                    }
                })}
            </ul>

            <button type="button" class="new-goal-button" onclick={on_create} disabled={props.creating}>
                {if props.creating { "Creating..." } else { "+ New goal" }}
            </button>
        </nav>
    }
}
