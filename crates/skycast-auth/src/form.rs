/// Which flow the form is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
        }
    }

    /// Prompt offering the other mode
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account?", "Sign Up"),
            Self::SignUp => ("Already have an account?", "Login"),
        }
    }

    /// Message shown when a field is left empty
    pub fn missing_fields_message(&self) -> &'static str {
        match self {
            Self::Login => "Please enter your email and password.",
            Self::SignUp => "Please enter a valid email and password.",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Login => Self::SignUp,
            Self::SignUp => Self::Login,
        }
    }
}

/// Input field with focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Email,
    Password,
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Proceed to the dashboard as this user
    Authenticated { email: String, mode: AuthMode },
    /// Stay on the form; the message is also stored in `error`
    Rejected(&'static str),
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub focus: Field,
    pub error: Option<&'static str>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Password as it is drawn on screen
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    /// Submit the form. Any non-empty pair of fields is accepted.
    pub fn submit(&mut self) -> AuthOutcome {
        if self.email.is_empty() || self.password.is_empty() {
            let message = self.mode.missing_fields_message();
            self.error = Some(message);
            return AuthOutcome::Rejected(message);
        }

        match self.mode {
            AuthMode::Login => tracing::info!("Logged in as {}", self.email),
            AuthMode::SignUp => tracing::info!("Signed up as {}", self.email),
        }

        self.error = None;
        AuthOutcome::Authenticated {
            email: self.email.clone(),
            mode: self.mode,
        }
    }
}
