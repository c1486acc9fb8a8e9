pub mod header;
pub mod panel;
pub mod footer;

pub use header::Header;
pub use panel::Panel;
pub use footer::Footer;
