use shared::{CreateGoalRequest, Goal};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;
mod store;

use components::goal_list::GoalList;
use components::goal_manager::GoalManager;
use config::AppConfig;
use services::api::ApiClient;
use services::date_utils::{one_year_after, today};
use services::logging::Logger;
use store::{GoalsAction, GoalsContext, GoalsState};

/// Request for the goal created by the "New goal" button
fn new_goal_request() -> CreateGoalRequest {
    CreateGoalRequest {
        name: "New goal".to_string(),
        target_date: one_year_after(today()),
        target_amount: 0.0,
        icon: None,
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::new(&config)
    });
    let goals = use_reducer(GoalsState::default);
    // Snapshot of the goal as it was when it was selected
    let selected_goal = use_state(|| Option::<Goal>::None);
    let creating = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    // Load goals on mount
    {
        let api_client = (*api_client).clone();
        let goals = goals.clone();
        let selected_goal = selected_goal.clone();
        let error_message = error_message.clone();
        use_effect_with((), move |_| {
            Logger::info_with_component("app", "Loading goals");
            spawn_local(async move {
                match api_client.list_goals().await {
                    Ok(list) => {
                        Logger::info_with_component("app", &format!("Loaded {} goals", list.len()));
                        if let Some(first) = list.first() {
                            selected_goal.set(Some(first.clone()));
                        }
                        goals.dispatch(GoalsAction::Loaded(list));
                    }
                    Err(e) => {
                        Logger::error_with_component("app", &format!("Failed to load goals: {}", e));
                        error_message.set(Some(format!("Failed to load goals: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    let on_select = {
        let goals = goals.clone();
        let selected_goal = selected_goal.clone();
        Callback::from(move |goal: Goal| {
            let snapshot = match goals.get(&goal.id) {
                Some(stored) => stored.clone(),
                None => {
                    Logger::warn_with_component(
                        "app",
                        &format!("Selected goal {} is not in the store, using the list copy", goal.id),
                    );
                    goal
                }
            };
            selected_goal.set(Some(snapshot));
        })
    };

    let on_create = {
        let api_client = (*api_client).clone();
        let goals = goals.clone();
        let selected_goal = selected_goal.clone();
        let creating = creating.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let goals = goals.clone();
            let selected_goal = selected_goal.clone();
            let creating = creating.clone();
            let error_message = error_message.clone();

            creating.set(true);
            spawn_local(async move {
                match api_client.create_goal(new_goal_request()).await {
                    Ok(goal) => {
                        Logger::info_with_component("app", &format!("Created goal {}", goal.id));
                        error_message.set(None);
                        goals.dispatch(GoalsAction::Created(goal.clone()));
                        selected_goal.set(Some(goal));
                    }
                    Err(e) => {
                        Logger::error_with_component("app", &format!("Failed to create goal: {}", e));
                        error_message.set(Some(format!("Failed to create goal: {}", e)));
                    }
                }
                creating.set(false);
            });
        })
    };

    let selected_id = selected_goal.as_ref().map(|goal| goal.id.clone());

    html! {
        <ContextProvider<GoalsContext> context={goals.clone()}>
            <div class="app">
                <header class="app-header">
                    <h1>{"Savings goals"}</h1>
                </header>

                if let Some(error) = (*error_message).clone() {
                    <div class="form-message error">{error}</div>
                }

                <main class="app-main">
                    <aside class="app-sidebar">
                        <GoalList
                            goals={goals.goals()}
                            selected_id={selected_id}
                            on_select={on_select}
                            on_create={on_create}
                            creating={*creating}
                        />
                    </aside>

                    <section class="app-editor">
                        if let Some(goal) = (*selected_goal).clone() {
                            <GoalManager
                                goal={goal}
                                api_client={(*api_client).clone()}
                                debounce_ms={config.debounce_ms}
                            />
                        } else if goals.loaded && goals.is_empty() {
                            <p class="empty-state">{"No goals yet. Create one to start saving!"}</p>
                        } else if !goals.loaded {
                            <p class="empty-state">{"Loading goals..."}</p>
                        } else {
                            <p class="empty-state">{"Pick a goal to edit it."}</p>
                        }
                    </section>
                </main>
            </div>
        </ContextProvider<GoalsContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
