use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub candidate_id: i64,
    pub status: String,
    pub cover_letter: Option<String>,
    pub resume_path: Option<String>,
    pub portfolio_url: Option<String>,
    pub notes: Option<String>,
    pub recruiter_notes: Option<String>,
    pub salary_expectation: Option<Decimal>,
    pub availability_date: Option<NaiveDate>,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hiring pipeline states. Stage moves go strictly forward; `hired` is only
/// reachable from `offer`; `rejected` and `withdrawn` are reachable from any
/// non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Screening,
    PhoneInterview,
    TechnicalInterview,
    FinalInterview,
    Offer,
    Rejected,
    Hired,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::PhoneInterview => "phone_interview",
            Self::TechnicalInterview => "technical_interview",
            Self::FinalInterview => "final_interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Hired => "hired",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Hired | Self::Rejected | Self::Withdrawn)
    }

    /// Position in the forward pipeline; terminal states have none.
    fn stage(&self) -> Option<u8> {
        match self {
            Self::Applied => Some(0),
            Self::Screening => Some(1),
            Self::PhoneInterview => Some(2),
            Self::TechnicalInterview => Some(3),
            Self::FinalInterview => Some(4),
            Self::Offer => Some(5),
            _ => None,
        }
    }

    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            Self::Rejected | Self::Withdrawn => true,
            Self::Hired => *self == Self::Offer,
            _ => match (self.stage(), next.stage()) {
                (Some(from), Some(to)) => to > from,
                _ => false,
            },
        }
    }

    /// CSS badge class the dashboard attaches to each application row.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Applied | Self::Offer | Self::Hired => "status-active",
            Self::Screening
            | Self::PhoneInterview
            | Self::TechnicalInterview
            | Self::FinalInterview => "status-pending",
            Self::Rejected => "status-rejected",
            Self::Withdrawn => "status-draft",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(Self::Applied),
            "screening" => Ok(Self::Screening),
            "phone_interview" => Ok(Self::PhoneInterview),
            "technical_interview" => Ok(Self::TechnicalInterview),
            "final_interview" => Ok(Self::FinalInterview),
            "offer" => Ok(Self::Offer),
            "rejected" => Ok(Self::Rejected),
            "hired" => Ok(Self::Hired),
            "withdrawn" => Ok(Self::Withdrawn),
            other => Err(format!("Unknown application status: {}", other)),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ApplicationStatus::*;
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for s in [
            "applied",
            "screening",
            "phone_interview",
            "technical_interview",
            "final_interview",
            "offer",
            "rejected",
            "hired",
            "withdrawn",
        ] {
            assert_eq!(s.parse::<ApplicationStatus>().unwrap().as_str(), s);
        }
        assert!("interview".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn forward_stage_moves_are_allowed() {
        assert!(Applied.can_transition_to(Screening));
        assert!(Applied.can_transition_to(FinalInterview));
        assert!(Screening.can_transition_to(Offer));
        assert!(PhoneInterview.can_transition_to(TechnicalInterview));
    }

    #[test]
    fn backward_stage_moves_are_rejected() {
        assert!(!Screening.can_transition_to(Applied));
        assert!(!Offer.can_transition_to(PhoneInterview));
        assert!(!FinalInterview.can_transition_to(FinalInterview));
    }

    #[test]
    fn hired_only_from_offer() {
        assert!(Offer.can_transition_to(Hired));
        assert!(!Applied.can_transition_to(Hired));
        assert!(!FinalInterview.can_transition_to(Hired));
    }

    #[test]
    fn rejection_and_withdrawal_from_any_open_state() {
        for open in [
            Applied,
            Screening,
            PhoneInterview,
            TechnicalInterview,
            FinalInterview,
            Offer,
        ] {
            assert!(open.can_transition_to(Rejected));
            assert!(open.can_transition_to(Withdrawn));
        }
    }

    #[test]
    fn terminal_states_are_frozen() {
        for terminal in [Hired, Rejected, Withdrawn] {
            assert!(terminal.is_terminal());
            for next in [Applied, Screening, Offer, Hired, Rejected, Withdrawn] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn badge_classes() {
        assert_eq!(Applied.badge(), "status-active");
        assert_eq!(Screening.badge(), "status-pending");
        assert_eq!(TechnicalInterview.badge(), "status-pending");
        assert_eq!(Hired.badge(), "status-active");
        assert_eq!(Rejected.badge(), "status-rejected");
        assert_eq!(Withdrawn.badge(), "status-draft");
    }
}
