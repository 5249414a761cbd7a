#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

/// The two-step login machine.
///
/// The pending username exists only as the `AwaitingOtp` payload, so a
/// verify submission can never pick up an identity that did not come from
/// a successful credential step on this page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginFlow {
    /// No login attempt in flight.
    #[default]
    Idle,
    /// Credentials accepted; an OTP was e-mailed for this username.
    AwaitingOtp { username: String },
    /// The code was accepted. Terminal; the page navigates away.
    Verified,
}

impl LoginFlow {
    /// Enter the OTP step for a freshly accepted username.
    pub fn begin(username: &str) -> Self {
        Self::AwaitingOtp {
            username: username.to_owned(),
        }
    }

    /// The username awaiting verification, if any.
    pub fn pending_username(&self) -> Option<&str> {
        match self {
            Self::AwaitingOtp { username } => Some(username),
            Self::Idle | Self::Verified => None,
        }
    }

    pub fn is_awaiting_otp(&self) -> bool {
        matches!(self, Self::AwaitingOtp { .. })
    }
}
