use crate::catalog::Variant;
use crate::profile::UserProfile;
use crate::schema::{Feasibility, FeasibilityStatus};

pub const MAX_BLOCKERS: usize = 3;

const MIN_HOURS_PER_WEEK: u32 = 5;
const MIN_CAPITAL_EUR: u32 = 100;
const REQUIRED_ASSET: &str = "laptop";

/// Derive readiness for one (profile, variant) pair.
///
/// Blockers keep their evaluation order; truncation drops the later ones.
pub fn evaluate_feasibility(profile: &UserProfile, variant: &Variant) -> Feasibility {
    let checks = [
        (
            profile.hours_per_week < MIN_HOURS_PER_WEEK,
            "Low weekly hours",
        ),
        (profile.capital_eur < MIN_CAPITAL_EUR, "Low starting capital"),
        (profile.language_cefr.is_beginner(), "Low local language"),
        (!profile.has_asset(REQUIRED_ASSET), "No laptop available"),
    ];
    let mut blockers: Vec<String> = checks
        .iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, reason)| reason.to_string())
        .collect();
    let status = if blockers.is_empty() {
        FeasibilityStatus::Ready
    } else {
        FeasibilityStatus::Blocked
    };
    blockers.truncate(MAX_BLOCKERS);
    Feasibility {
        status,
        blockers,
        prep_weeks: variant.startable_weeks_or_default().max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_variants;
    use crate::schema::LanguageLevel;

    fn ready_profile() -> UserProfile {
        UserProfile {
            hours_per_week: 10,
            capital_eur: 200,
            language_cefr: LanguageLevel::B2,
            ..UserProfile::default()
        }
    }

    #[test]
    fn ready_when_no_blockers() {
        let variant = &builtin_variants()[0];
        let feasibility = evaluate_feasibility(&ready_profile(), variant);
        assert_eq!(feasibility.status, FeasibilityStatus::Ready);
        assert!(feasibility.blockers.is_empty());
        assert_eq!(feasibility.prep_weeks, 1);
    }

    #[test]
    fn all_blockers_truncate_to_first_three_in_order() {
        let profile = UserProfile {
            hours_per_week: 2,
            capital_eur: 50,
            language_cefr: LanguageLevel::A1,
            assets: Vec::new(),
            ..UserProfile::default()
        };
        let feasibility = evaluate_feasibility(&profile, &builtin_variants()[0]);
        assert_eq!(feasibility.status, FeasibilityStatus::Blocked);
        assert_eq!(
            feasibility.blockers,
            vec![
                "Low weekly hours".to_string(),
                "Low starting capital".to_string(),
                "Low local language".to_string(),
            ]
        );
    }

    #[test]
    fn missing_laptop_alone_blocks() {
        let profile = UserProfile {
            assets: vec!["car".to_string()],
            ..ready_profile()
        };
        let feasibility = evaluate_feasibility(&profile, &builtin_variants()[1]);
        assert_eq!(feasibility.status, FeasibilityStatus::Blocked);
        assert_eq!(feasibility.blockers, vec!["No laptop available".to_string()]);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let profile = UserProfile {
            hours_per_week: 5,
            capital_eur: 100,
            ..ready_profile()
        };
        let feasibility = evaluate_feasibility(&profile, &builtin_variants()[0]);
        assert_eq!(feasibility.status, FeasibilityStatus::Ready);
    }

    #[test]
    fn prep_weeks_defaults_and_floors() {
        let mut variant = builtin_variants()[0].clone();
        variant.startable_weeks = None;
        assert_eq!(evaluate_feasibility(&ready_profile(), &variant).prep_weeks, 2);
        variant.startable_weeks = Some(0);
        assert_eq!(evaluate_feasibility(&ready_profile(), &variant).prep_weeks, 1);
    }
}
