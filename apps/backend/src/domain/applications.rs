//! Application state machine: `pending` moves once to `accepted` or
//! `rejected`, and both of those are terminal.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// The only targets an employer may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub const fn target(&self) -> ApplicationStatus {
        match self {
            Decision::Accept => ApplicationStatus::Accepted,
            Decision::Reject => ApplicationStatus::Rejected,
        }
    }
}

impl FromStr for Decision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Decision::Accept),
            "rejected" => Ok(Decision::Reject),
            other => Err(DomainError::validation(
                ValidationKind::InvalidStatus,
                format!("status must be 'accepted' or 'rejected', got '{other}'"),
            )),
        }
    }
}

/// Apply a decision to the current status.
///
/// Any decision on a terminal application fails with a conflict, including
/// repeating the same decision.
pub fn decide(
    current: ApplicationStatus,
    decision: Decision,
) -> Result<ApplicationStatus, DomainError> {
    if current.is_terminal() {
        return Err(finalized(current));
    }
    Ok(decision.target())
}

pub(crate) fn finalized(current: ApplicationStatus) -> DomainError {
    DomainError::conflict(
        ConflictKind::ApplicationFinalized,
        format!("Application has already been {}", current.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_moves_to_either_terminal_state() {
        assert_eq!(
            decide(ApplicationStatus::Pending, Decision::Accept).unwrap(),
            ApplicationStatus::Accepted
        );
        assert_eq!(
            decide(ApplicationStatus::Pending, Decision::Reject).unwrap(),
            ApplicationStatus::Rejected
        );
    }

    #[test]
    fn terminal_states_refuse_every_decision() {
        for current in [ApplicationStatus::Accepted, ApplicationStatus::Rejected] {
            for decision in [Decision::Accept, Decision::Reject] {
                let err = decide(current, decision).unwrap_err();
                assert!(matches!(
                    err,
                    DomainError::Conflict(ConflictKind::ApplicationFinalized, _)
                ));
            }
        }
    }

    #[test]
    fn decision_parsing_rejects_pending_and_junk() {
        assert_eq!("accepted".parse::<Decision>().unwrap(), Decision::Accept);
        assert_eq!("rejected".parse::<Decision>().unwrap(), Decision::Reject);
        for bad in ["pending", "ACCEPTED", "", "withdrawn"] {
            assert!(matches!(
                bad.parse::<Decision>(),
                Err(DomainError::Validation(ValidationKind::InvalidStatus, _))
            ));
        }
    }
}
