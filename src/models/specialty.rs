use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    Cardiology,
    Gastroenterology,
    Neurology,
    Orthopedics,
    General,
}

impl Specialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiology => "cardiology",
            Specialty::Gastroenterology => "gastroenterology",
            Specialty::Neurology => "neurology",
            Specialty::Orthopedics => "orthopedics",
            Specialty::General => "general",
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
