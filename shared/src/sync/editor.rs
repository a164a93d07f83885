use chrono::NaiveDate;

use crate::Goal;

/// Visibility of the floating icon picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPicker {
    #[default]
    Closed,
    Open,
}

/// How soon an edit should reach the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Send as soon as the per-goal queue allows
    Immediate,
    /// Coalesce with following edits until the input settles or loses focus
    Debounced,
}

/// Local, not yet confirmed values for the editable goal fields.
///
/// `None` means "no local value": the incoming goal's value applies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalDraft {
    pub name: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub target_amount: Option<f64>,
    pub icon: Option<String>,
}

impl GoalDraft {
    /// Seed a draft from the incoming goal. The icon comes from the store
    /// copy when there is one, since the store may be fresher than props.
    pub fn from_goal(goal: &Goal, store_copy: Option<&Goal>) -> Self {
        let icon = match store_copy {
            Some(stored) => stored.icon.clone(),
            None => goal.icon.clone(),
        };

        Self {
            name: Some(goal.name.clone()),
            target_date: Some(goal.target_date),
            target_amount: Some(goal.target_amount),
            icon,
        }
    }

    /// Build a full goal record from the draft, falling back to `base` for
    /// every field the draft does not hold.
    pub fn merged(&self, base: &Goal) -> Goal {
        Goal {
            id: base.id.clone(),
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            target_date: self.target_date.unwrap_or(base.target_date),
            target_amount: self.target_amount.unwrap_or(base.target_amount),
            icon: self.icon.clone().or_else(|| base.icon.clone()),
        }
    }
}

/// A single user edit of one goal field
#[derive(Debug, Clone, PartialEq)]
pub enum GoalEdit {
    Name(String),
    TargetAmount(f64),
    /// `None` comes from a cleared date picker
    TargetDate(Option<NaiveDate>),
    Icon(String),
}

impl GoalEdit {
    /// Build an amount edit from raw input text. Input without a numeric
    /// prefix becomes NaN rather than being rejected.
    pub fn amount_from_input(input: &str) -> Self {
        GoalEdit::TargetAmount(parse_amount(input))
    }

    /// Keystroke fields are debounced; picker selections go out at once.
    pub fn write_policy(&self) -> WritePolicy {
        match self {
            GoalEdit::Name(_) | GoalEdit::TargetAmount(_) => WritePolicy::Debounced,
            GoalEdit::TargetDate(_) | GoalEdit::Icon(_) => WritePolicy::Immediate,
        }
    }
}

/// Merged record produced by one edit, consumed by both the store and the
/// remote writer
#[derive(Debug, Clone, PartialEq)]
pub struct GoalUpdate {
    pub goal: Goal,
    pub policy: WritePolicy,
}

/// Edit state for one goal view
#[derive(Debug, Clone, PartialEq)]
pub struct GoalEditor {
    base: Goal,
    draft: GoalDraft,
    picker: IconPicker,
}

impl GoalEditor {
    pub fn new(goal: Goal, store_copy: Option<&Goal>) -> Self {
        let draft = GoalDraft::from_goal(&goal, store_copy);
        Self {
            base: goal,
            draft,
            picker: IconPicker::Closed,
        }
    }

    /// Replace the incoming goal, discarding any local edits. The picker
    /// only closes when a different goal is loaded.
    pub fn reset(&mut self, goal: Goal, store_copy: Option<&Goal>) {
        if goal.id != self.base.id {
            self.picker = IconPicker::Closed;
        }
        self.draft = GoalDraft::from_goal(&goal, store_copy);
        self.base = goal;
    }

    /// Apply an edit to the draft and return the record to publish, or
    /// `None` when the edit changes nothing (a cleared date).
    pub fn apply(&mut self, edit: GoalEdit) -> Option<GoalUpdate> {
        let policy = edit.write_policy();

        match edit {
            GoalEdit::Name(name) => self.draft.name = Some(name),
            GoalEdit::TargetAmount(amount) => self.draft.target_amount = Some(amount),
            GoalEdit::TargetDate(None) => return None,
            GoalEdit::TargetDate(Some(date)) => self.draft.target_date = Some(date),
            GoalEdit::Icon(icon) => {
                self.picker = IconPicker::Closed;
                self.draft.icon = Some(icon);
            }
        }

        Some(GoalUpdate {
            goal: self.current(),
            policy,
        })
    }

    /// Show the name the goals store holds for this goal. Returns whether
    /// the shown name changed. Nothing is published.
    pub fn follow_stored_name(&mut self, name: &str) -> bool {
        if self.current().name == name {
            return false;
        }
        self.draft.name = Some(name.to_string());
        true
    }

    pub fn open_picker(&mut self) {
        self.picker = IconPicker::Open;
    }

    pub fn close_picker(&mut self) {
        self.picker = IconPicker::Closed;
    }

    pub fn picker(&self) -> IconPicker {
        self.picker
    }

    /// The goal as currently shown: draft values over the incoming goal
    pub fn current(&self) -> Goal {
        self.draft.merged(&self.base)
    }

    pub fn base(&self) -> &Goal {
        &self.base
    }
}

/// Parse a number the way an HTML form's `parseFloat` does: leading
/// whitespace is skipped and the longest numeric prefix is used. Input
/// without a numeric prefix yields NaN.
pub fn parse_amount(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bike_goal() -> Goal {
        Goal {
            id: "goal::bike".to_string(),
            name: "New bike".to_string(),
            target_date: date(2026, 6, 1),
            target_amount: 250.0,
            icon: Some("🚲".to_string()),
        }
    }

    #[test]
    fn test_name_edit_keeps_latest_known_values() {
        let mut editor = GoalEditor::new(bike_goal(), None);
        editor.apply(GoalEdit::TargetAmount(300.0)).unwrap();

        let update = editor.apply(GoalEdit::Name("Road bike".to_string())).unwrap();

        assert_eq!(editor.draft.name.as_deref(), Some("Road bike"));
        assert_eq!(update.goal.name, "Road bike");
        assert_eq!(update.goal.target_amount, 300.0);
        assert_eq!(update.goal.target_date, date(2026, 6, 1));
        assert_eq!(update.goal.icon.as_deref(), Some("🚲"));
        assert_eq!(update.policy, WritePolicy::Debounced);
    }

    #[test]
    fn test_date_and_icon_edits_are_immediate() {
        let mut editor = GoalEditor::new(bike_goal(), None);

        let update = editor.apply(GoalEdit::TargetDate(Some(date(2027, 1, 15)))).unwrap();
        assert_eq!(update.goal.target_date, date(2027, 1, 15));
        assert_eq!(update.policy, WritePolicy::Immediate);

        let update = editor.apply(GoalEdit::Icon("🛴".to_string())).unwrap();
        assert_eq!(update.goal.icon.as_deref(), Some("🛴"));
        assert_eq!(update.goal.target_date, date(2027, 1, 15));
        assert_eq!(update.policy, WritePolicy::Immediate);
    }

    #[test]
    fn test_cleared_date_is_a_no_op() {
        let mut editor = GoalEditor::new(bike_goal(), None);
        let before = editor.clone();

        assert!(editor.apply(GoalEdit::TargetDate(None)).is_none());
        assert_eq!(editor, before);
    }

    #[test]
    fn test_non_numeric_amount_is_forwarded_as_nan() {
        let mut editor = GoalEditor::new(bike_goal(), None);

        let update = editor.apply(GoalEdit::amount_from_input("lots")).unwrap();

        assert!(update.goal.target_amount.is_nan());
        assert!(editor.draft.target_amount.unwrap().is_nan());
    }

    #[test]
    fn test_negative_amount_is_not_rejected() {
        let mut editor = GoalEditor::new(bike_goal(), None);
        let update = editor.apply(GoalEdit::amount_from_input("-20")).unwrap();
        assert_eq!(update.goal.target_amount, -20.0);
    }

    #[test]
    fn test_icon_pick_falls_back_to_props_for_unset_fields() {
        let mut editor = GoalEditor::new(bike_goal(), None);
        // Simulate a view whose local fields were never populated
        editor.draft = GoalDraft::default();
        editor.open_picker();

        let update = editor.apply(GoalEdit::Icon("🎸".to_string())).unwrap();

        assert_eq!(editor.picker(), IconPicker::Closed);
        assert_eq!(update.goal.name, "New bike");
        assert_eq!(update.goal.target_date, date(2026, 6, 1));
        assert_eq!(update.goal.target_amount, 250.0);
        assert_eq!(update.goal.icon.as_deref(), Some("🎸"));
    }

    #[test]
    fn test_reset_discards_unsaved_edits() {
        let mut editor = GoalEditor::new(bike_goal(), None);
        editor.apply(GoalEdit::Name("Unsaved".to_string())).unwrap();

        let mut incoming = bike_goal();
        incoming.target_amount = 275.0;
        editor.reset(incoming.clone(), None);

        assert_eq!(editor.current(), incoming);
        assert_eq!(&editor.draft, &GoalDraft::from_goal(&incoming, None));
    }

    #[test]
    fn test_reset_takes_icon_from_store_copy() {
        let mut stored = bike_goal();
        stored.icon = Some("🏆".to_string());

        let editor = GoalEditor::new(bike_goal(), Some(&stored));

        assert_eq!(editor.draft.icon.as_deref(), Some("🏆"));
        assert_eq!(editor.draft.name.as_deref(), Some("New bike"));
    }

    #[test]
    fn test_closing_picker_does_not_touch_fields() {
        let mut editor = GoalEditor::new(bike_goal(), None);
        editor.open_picker();
        assert_eq!(editor.picker(), IconPicker::Open);

        let before = editor.current();
        editor.close_picker();

        assert_eq!(editor.picker(), IconPicker::Closed);
        assert_eq!(editor.current(), before);
    }

    #[test]
    fn test_picker_closes_only_when_goal_changes() {
        let mut editor = GoalEditor::new(bike_goal(), None);
        editor.open_picker();

        let mut renamed = bike_goal();
        renamed.name = "Renamed elsewhere".to_string();
        editor.reset(renamed, None);
        assert_eq!(editor.picker(), IconPicker::Open);

        let mut other = bike_goal();
        other.id = "goal::car".to_string();
        editor.reset(other, None);
        assert_eq!(editor.picker(), IconPicker::Closed);
    }

    #[test]
    fn test_follow_stored_name() {
        let mut editor = GoalEditor::new(bike_goal(), None);
        editor.apply(GoalEdit::TargetAmount(300.0));

        // Echo of our own edit
        assert!(!editor.follow_stored_name("New bike"));

        assert!(editor.follow_stored_name("Renamed in store"));
        let current = editor.current();
        assert_eq!(current.name, "Renamed in store");
        assert_eq!(current.target_amount, 300.0);
        assert_eq!(editor.base().name, "New bike");
    }

    #[test]
    fn test_parse_amount_matches_parse_float() {
        assert_eq!(parse_amount("42"), 42.0);
        assert_eq!(parse_amount("  12.5"), 12.5);
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("3."), 3.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("-7.25"), -7.25);
        assert_eq!(parse_amount("+8"), 8.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("2e"), 2.0);
        assert_eq!(parse_amount("Infinity"), f64::INFINITY);
        assert_eq!(parse_amount("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_amount("").is_nan());
        assert!(parse_amount(".").is_nan());
        assert!(parse_amount("-").is_nan());
        assert!(parse_amount("abc").is_nan());
    }
}
