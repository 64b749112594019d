pub mod command;
pub mod meal_kind;
pub mod pause_record;
pub mod resume_point;
pub mod template;
