use std::fmt::Display;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    #[default]
    Ordinary,
    Designer,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            UserRole::Ordinary => "ordinary",
            UserRole::Designer => "designer",
        };
        write!(f, "{}", role)
    }
}

impl UserRole {
    pub fn from_str(value: &str) -> Self {
        match value {
            "designer" => UserRole::Designer,
            _ => UserRole::Ordinary,
        }
    }
}
