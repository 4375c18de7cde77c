/// Ordered, duplicate-free list of participant emails.
///
/// Insertion order is preserved. Emails are compared as exact strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|participant| participant == email)
    }

    /// Appends `email` unless it is already present. Returns whether the roster changed.
    pub fn insert(&mut self, email: impl Into<String>) -> bool {
        let email = email.into();
        if self.contains(&email) {
            return false;
        }
        self.0.push(email);
        true
    }

    /// Removes `email` if present. Returns whether the roster changed.
    pub fn remove(&mut self, email: &str) -> bool {
        match self.0.iter().position(|participant| participant == email) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl FromIterator<String> for Roster {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for email in iter {
            roster.insert(email);
        }
        roster
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
