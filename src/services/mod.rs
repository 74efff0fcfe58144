pub mod checkin;
pub mod play_report;
pub mod task_list;

pub use checkin::*;
pub use play_report::*;
pub use task_list::*;
