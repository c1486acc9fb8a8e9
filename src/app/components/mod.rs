pub mod button;
pub mod card;
pub mod connectivity_badge;
pub mod install_slot;

pub use button::IconButton;
pub use card::Card;
pub use connectivity_badge::{connectivity_icon, connectivity_label, ConnectivityBadge};
pub use install_slot::InstallSlot;
