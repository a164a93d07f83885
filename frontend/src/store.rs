//! Client-side goals store, shared with every component through a
//! `ContextProvider<GoalsContext>`.

use std::collections::BTreeMap;
use std::rc::Rc;

use shared::Goal;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalsState {
    goals: BTreeMap<String, Goal>,
    /// Display order, oldest first
    order: Vec<String>,
    pub loaded: bool,
}

pub enum GoalsAction {
    /// Replace the whole collection with a fresh listing
    Loaded(Vec<Goal>),
    /// Replace a known goal by ID; unknown IDs are ignored
    Updated(Goal),
    Created(Goal),
}

pub type GoalsContext = UseReducerHandle<GoalsState>;

impl Reducible for GoalsState {
    type Action = GoalsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GoalsAction::Loaded(goals) => {
                let mut state = GoalsState {
                    loaded: true,
                    ..GoalsState::default()
                };
                for goal in goals {
                    state.insert(goal);
                }
                Rc::new(state)
            }
            GoalsAction::Updated(goal) => {
                if !self.goals.contains_key(&goal.id) {
                    return self;
                }
                let mut state = (*self).clone();
                state.goals.insert(goal.id.clone(), goal);
                Rc::new(state)
            }
            GoalsAction::Created(goal) => {
                let mut state = (*self).clone();
                state.insert(goal);
                Rc::new(state)
            }
        }
    }
}

impl GoalsState {
    fn insert(&mut self, goal: Goal) {
        if !self.goals.contains_key(&goal.id) {
            self.order.push(goal.id.clone());
        }
        self.goals.insert(goal.id.clone(), goal);
    }

    pub fn get(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.get(goal_id)
    }

    /// Goals in display order
    pub fn goals(&self) -> Vec<Goal> {
        self.order
            .iter()
            .filter_map(|id| self.goals.get(id))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn goal(id: &str, name: &str) -> Goal {
        Goal {
            id: id.to_string(),
            name: name.to_string(),
            target_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            target_amount: 250.0,
            icon: None,
        }
    }

    fn loaded(goals: Vec<Goal>) -> Rc<GoalsState> {
        Rc::new(GoalsState::default()).reduce(GoalsAction::Loaded(goals))
    }

    #[wasm_bindgen_test]
    fn test_loaded_keeps_listing_order() {
        let state = loaded(vec![goal("goal::b", "Bike"), goal("goal::a", "Arcade")]);

        assert!(state.loaded);
        let names: Vec<String> = state.goals().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Bike", "Arcade"]);
    }

    #[wasm_bindgen_test]
    fn test_updated_replaces_by_id() {
        let state = loaded(vec![goal("goal::a", "Bike")]);

        let mut renamed = goal("goal::a", "Road bike");
        renamed.icon = Some("🚲".to_string());
        let state = state.reduce(GoalsAction::Updated(renamed.clone()));

        assert_eq!(state.get("goal::a"), Some(&renamed));
        assert_eq!(state.goals().len(), 1);
    }

    #[wasm_bindgen_test]
    fn test_updated_ignores_unknown_id() {
        let state = loaded(vec![goal("goal::a", "Bike")]);
        let state = state.reduce(GoalsAction::Updated(goal("goal::ghost", "Ghost")));

        assert!(state.get("goal::ghost").is_none());
        assert_eq!(state.goals().len(), 1);
    }

    #[wasm_bindgen_test]
    fn test_created_appends() {
        let state = loaded(vec![goal("goal::a", "Bike")]);
        let state = state.reduce(GoalsAction::Created(goal("goal::b", "New goal")));
        // Creating an existing ID replaces it in place
        let state = state.reduce(GoalsAction::Created(goal("goal::a", "Scooter")));

        let names: Vec<String> = state.goals().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Scooter", "New goal"]);
    }

    #[wasm_bindgen_test]
    fn test_nan_amount_is_stored() {
        let state = loaded(vec![goal("goal::a", "Bike")]);
        let mut odd = goal("goal::a", "Bike");
        odd.target_amount = f64::NAN;

        let state = state.reduce(GoalsAction::Updated(odd));

        assert!(state.get("goal::a").unwrap().target_amount.is_nan());
    }
}
