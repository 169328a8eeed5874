use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
}

pub const SERVICE_CATALOG: &[Service] = &[
    Service {
        id: "1",
        name: "Cardiology",
        duration: "45 mins",
    },
    Service {
        id: "2",
        name: "Gastroenterology",
        duration: "45 mins",
    },
    Service {
        id: "3",
        name: "Neurology",
        duration: "45 mins",
    },
    Service {
        id: "4",
        name: "Orthopedics",
        duration: "45 mins",
    },
    Service {
        id: "5",
        name: "General Consultation",
        duration: "30 mins",
    },
];
