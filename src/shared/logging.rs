//! Structured logging helpers for the PWA Shop shell
//!
//! Keeps field names uniform across navigation, panel, connectivity and
//! view-state events. Uses tracing structured fields.

use crate::domain::models::ViewId;

/// Operation tags attached to every shell log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    Panel,
    Connectivity,
    ViewState,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::Panel => "panel",
            LogOperation::Connectivity => "connectivity",
            LogOperation::ViewState => "view_state",
        }
    }
}

/// Log a view selection coming from the panel
pub fn log_view_selected(from: ViewId, to: ViewId) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        from = from.as_str(),
        to = to.as_str(),
        "View selected"
    );
}

/// Log a panel visibility change
pub fn log_panel_visibility(open: bool) {
    tracing::debug!(
        operation = LogOperation::Panel.as_str(),
        panel_open = open,
        "Panel visibility changed"
    );
}

/// Log a connectivity signal received from the platform
pub fn log_connectivity_change(online: bool) {
    if online {
        tracing::info!(
            operation = LogOperation::Connectivity.as_str(),
            online = true,
            "Connection restored"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::Connectivity.as_str(),
            online = false,
            "Connection lost"
        );
    }
}

/// Log acquisition or release of the connectivity subscription
pub fn log_subscription(acquired: bool, online: bool) {
    tracing::debug!(
        operation = LogOperation::Connectivity.as_str(),
        acquired = acquired,
        online = online,
        "Connectivity subscription {}",
        if acquired { "acquired" } else { "released" }
    );
}

/// Log allocation or release of a view-local state slot
pub fn log_view_state(view: ViewId, allocated: bool) {
    tracing::trace!(
        operation = LogOperation::ViewState.as_str(),
        view = view.as_str(),
        allocated = allocated,
        "View state slot {}",
        if allocated { "allocated" } else { "released" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Panel.as_str(), "panel");
        assert_eq!(LogOperation::Connectivity.as_str(), "connectivity");
        assert_eq!(LogOperation::ViewState.as_str(), "view_state");
    }
}
