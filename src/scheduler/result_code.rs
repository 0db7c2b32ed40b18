//! The scheduler's result taxonomy.
//!
//! Every access candidate ends up with exactly one [`ResultCode`]. Lower
//! codes are more informative than higher ones: a write only overwrites an
//! existing code if the new code is lower (see [`ResultCode::record`]).

/// Outcome code for one scored access, following the convention that a
/// smaller numeric value carries more specific information than a larger
/// one (`NO_DATA` is the least informative and sorts last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResultCode {
    Scheduled = 0,
    AlreadyScheduled = 1,
    NotDue = 20,
    ExceededPayloadDutyCycle = 30,
    SolverInfeasibleSolution = 190,
    FailedQuality = 200,
    FailedGeometry = 210,
    FailedSunGeometry = 220,
    NoAccess = 299,
    NoData = 999,
}

impl ResultCode {
    pub fn code(self) -> u32 {
        self as u32
    }

    /// The taxonomy's stable uppercase name, as written in a report's
    /// `result_str` column.
    pub fn name(self) -> &'static str {
        match self {
            ResultCode::Scheduled => "SCHEDULED",
            ResultCode::AlreadyScheduled => "ALREADY_SCHEDULED",
            ResultCode::NotDue => "NOT_DUE",
            ResultCode::ExceededPayloadDutyCycle => "EXCEEDED_PAYLOAD_DUTY_CYCLE",
            ResultCode::SolverInfeasibleSolution => "SOLVER_INFEASIBLE_SOLUTION",
            ResultCode::FailedQuality => "FAILED_QUALITY",
            ResultCode::FailedGeometry => "FAILED_GEOMETRY",
            ResultCode::FailedSunGeometry => "FAILED_SUN_GEOMETRY",
            ResultCode::NoAccess => "NO_ACCESS",
            ResultCode::NoData => "NO_DATA",
        }
    }

    /// Returns whichever of `self`/`other` is more informative (the lower
    /// numeric code). Use this instead of a bare assignment when a slot may
    /// already carry a result, so a later, less-specific outcome never
    /// clobbers an earlier, more-specific one.
    pub fn record(self, other: ResultCode) -> ResultCode {
        if other.code() < self.code() {
            other
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_code_wins_record() {
        assert_eq!(
            ResultCode::NoData.record(ResultCode::Scheduled),
            ResultCode::Scheduled
        );
        assert_eq!(
            ResultCode::Scheduled.record(ResultCode::NoData),
            ResultCode::Scheduled
        );
    }

    #[test]
    fn equal_code_keeps_existing() {
        assert_eq!(
            ResultCode::NotDue.record(ResultCode::NotDue),
            ResultCode::NotDue
        );
    }

    #[test]
    fn names_match_taxonomy() {
        assert_eq!(ResultCode::Scheduled.name(), "SCHEDULED");
        assert_eq!(ResultCode::ExceededPayloadDutyCycle.name(), "EXCEEDED_PAYLOAD_DUTY_CYCLE");
        assert_eq!(ResultCode::NoData.name(), "NO_DATA");
    }

    #[test]
    fn codes_match_taxonomy() {
        assert_eq!(ResultCode::Scheduled.code(), 0);
        assert_eq!(ResultCode::AlreadyScheduled.code(), 1);
        assert_eq!(ResultCode::NotDue.code(), 20);
        assert_eq!(ResultCode::ExceededPayloadDutyCycle.code(), 30);
        assert_eq!(ResultCode::SolverInfeasibleSolution.code(), 190);
        assert_eq!(ResultCode::FailedQuality.code(), 200);
        assert_eq!(ResultCode::FailedGeometry.code(), 210);
        assert_eq!(ResultCode::FailedSunGeometry.code(), 220);
        assert_eq!(ResultCode::NoAccess.code(), 299);
        assert_eq!(ResultCode::NoData.code(), 999);
    }
}
