wire_enum! {
    ///
    /// Status
    ///
    /// Last known outcome of a test case.
    ///
    Status {
        default NotRun => "not_run",
        Passed => "passed",
        Failed => "failed",
    }
}

wire_enum! {
    ///
    /// CaseKind
    ///
    /// Diagnostic area a test case exercises. Serialized as `type`.
    ///
    CaseKind {
        default Identification => "identification",
        Wlan => "wlan",
        Dtc => "dtc",
        Session => "session",
        Security => "security",
        Write => "write",
        Routine => "routine",
        Sensor => "sensor",
        Reset => "reset",
        Communication => "communication",
        Control => "control",
    }
}

///
/// RunOutcome
///
/// Result recorded by a manual run action.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunOutcome {
    Pass,
    Fail,
}

impl RunOutcome {
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::Pass => Status::Passed,
            Self::Fail => Status::Failed,
        }
    }
}

impl std::str::FromStr for RunOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" | "passed" => Ok(Self::Pass),
            "fail" | "failed" => Ok(Self::Fail),
            other => Err(format!("unknown run outcome '{other}' (expected pass or fail)")),
        }
    }
}
