mod health;
mod list;
mod player;
mod render;

pub(crate) use health::run_health;
pub(crate) use list::{run_list, run_options};
pub(crate) use player::{run_add, run_edit, run_remove, run_show};
