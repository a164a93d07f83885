pub mod date_picker;
pub mod emoji_picker;
pub mod goal_list;
pub mod goal_manager;
