// Custom Dioxus hooks
pub mod use_shell;
pub mod use_connectivity;
pub mod use_view_slot;

pub use use_shell::{use_shell, ShellHandle};
pub use use_connectivity::{use_connectivity, ConnectivityHandle};
pub use use_view_slot::{use_view_slot, ViewSlot};
