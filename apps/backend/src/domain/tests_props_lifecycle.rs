//! Property tests for job and application lifecycle rules (pure domain, no DB).

use proptest::prelude::*;
use time::{Duration, OffsetDateTime};

use crate::domain::applications::{decide, ApplicationStatus, Decision};
use crate::domain::jobs::{eligibility, expiry_from, Ineligibility, JobStatus, JobWindow};

fn any_instant() -> impl Strategy<Value = OffsetDateTime> {
    // 2000-01-01 .. 2100-01-01
    (946_684_800i64..4_102_444_800i64)
        .prop_map(|secs| OffsetDateTime::from_unix_timestamp(secs).unwrap())
}

fn any_status() -> impl Strategy<Value = JobStatus> {
    prop_oneof![Just(JobStatus::Open), Just(JobStatus::Closed)]
}

fn any_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![Just(Decision::Accept), Just(Decision::Reject)]
}

proptest! {
    /// Valid windows land exactly `days` days after creation.
    #[test]
    fn prop_expiry_is_creation_plus_days(now in any_instant(), days in 1i64..=7) {
        let expires_at = expiry_from(now, days).unwrap();
        prop_assert_eq!(expires_at - now, Duration::days(days));
    }

    /// Out-of-range windows never produce an expiry.
    #[test]
    fn prop_expiry_rejects_outside_range(now in any_instant(), days in prop_oneof![-100i64..1, 8i64..1000]) {
        prop_assert!(expiry_from(now, days).is_err());
    }

    /// Eligible iff active, open and unexpired; otherwise the reason
    /// matches the first failing rule.
    #[test]
    fn prop_eligibility_discriminant(
        now in any_instant(),
        offset_secs in -864_000i64..864_000,
        status in any_status(),
        is_active in any::<bool>(),
    ) {
        let job = JobWindow { status, is_active, expires_at: now + Duration::seconds(offset_secs) };
        let result = eligibility(Some(&job), now);

        let expected = if !is_active || status != JobStatus::Open {
            Err(Ineligibility::Closed)
        } else if offset_secs <= 0 {
            Err(Ineligibility::Expired)
        } else {
            Ok(())
        };
        prop_assert_eq!(result, expected);
    }

    /// Once accepted or rejected, no decision goes through.
    #[test]
    fn prop_terminal_is_sticky(first in any_decision(), second in any_decision()) {
        let after_first = decide(ApplicationStatus::Pending, first).unwrap();
        prop_assert!(after_first.is_terminal());
        prop_assert!(decide(after_first, second).is_err());
    }
}
