#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: String,
}

impl SignUpForActivity {
    pub fn new(activity_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity_name: activity_name.into(),
            email: email.into(),
        }
    }

    pub fn confirmation(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity_name)
    }
}
