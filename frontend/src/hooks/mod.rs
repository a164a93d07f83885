pub mod use_goal_writer;
