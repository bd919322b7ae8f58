use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    Transport,
    Rejected { status: u16, detail: String },
    Decode,
    Input(String),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::Transport => write!(f, "Could not reach the catalog API"),
            DashboardError::Rejected { status, detail } => {
                write!(f, "Request failed ({status}): {detail}")
            }
            DashboardError::Decode => write!(f, "Unexpected response from the catalog API"),
            DashboardError::Input(message) => write!(f, "{message}"),
        }
    }
}

impl Context for DashboardError {}
