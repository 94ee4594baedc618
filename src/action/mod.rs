//! Action module - What happens to the chosen result

pub mod dispatch;
pub mod handoff;

pub use dispatch::{containing_dir, editor_command, folder_command, DispatchContext, Dispatcher};
pub use handoff::HandoffFile;
