//! Auth Modal State
//!
//! Placeholder login / signup overlay. Nothing is validated or stored.

pub const SUBMIT_ACKNOWLEDGMENT: &str = "Authentication would be implemented in a full version. \
For this prototype, you are now \"logged in\".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Log In",
            AuthMode::Signup => "Sign Up",
        }
    }
}

/// Overlay visibility and which field set is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthModal {
    mode: Option<AuthMode>,
}

impl AuthModal {
    pub fn open(&mut self, mode: AuthMode) {
        self.mode = Some(mode);
    }

    pub fn close(&mut self) {
        self.mode = None;
    }

    /// Accept the form and close the overlay. Always succeeds.
    pub fn submit(&mut self) -> &'static str {
        if let Some(mode) = self.mode {
            log::info!("placeholder {:?} submitted", mode);
        }
        self.close();
        SUBMIT_ACKNOWLEDGMENT
    }

    pub fn mode(&self) -> Option<AuthMode> {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }
}
