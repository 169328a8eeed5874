use crate::models::{Specialty, Turn};
use crate::services::classifier::wants_booking;

pub const FIRST_MESSAGE_CONTEXT: &str = "(first message in conversation)";

const CONTEXT_TURNS: usize = 3;

const BOOKING_STEPS: [&str; 3] = [
    "Choose preferred appointment time",
    "Confirm specialist preference",
    "Receive appointment confirmation",
];

const DETAIL_STEPS: [&str; 3] = [
    "Provide more details if needed",
    "Proceed to book appointment",
    "Receive appointment confirmation",
];

/// A generated answer plus the checklist it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Set by the template that produced `text`; selects the checklist.
    pub booking_intent: bool,
    pub next_steps: Vec<String>,
}

struct Template {
    text: &'static str,
    booking_intent: bool,
}

const NAME: &str = "{name}";

const CARDIOLOGY_BOOKING: Template = Template {
    text: "Thank you {name}. I understand you want to book a cardiology appointment. We have experienced cardiologists available. Would you prefer a morning, afternoon, or evening appointment? Also, do you have any specific dates in mind?",
    booking_intent: true,
};
const CARDIOLOGY_INFO: Template = Template {
    text: "Thank you {name}. I understand you're experiencing heart-related issues. This requires a cardiologist's evaluation. I can help you schedule an appointment with our cardiology specialist. When would be the best time for you to visit?",
    booking_intent: true,
};
const GASTRO_BOOKING: Template = Template {
    text: "Thank you {name}. I'll help you book an appointment with our gastroenterologist. We have available slots next week. Would you prefer morning or afternoon? Any particular days that work best for you?",
    booking_intent: true,
};
const GASTRO_INFO: Template = Template {
    text: "Thank you {name}. Digestive issues require proper evaluation by a specialist. I recommend scheduling a consultation with our gastroenterologist. They can provide a comprehensive assessment and treatment plan. Would you like to book an appointment?",
    booking_intent: true,
};
const NEUROLOGY_BOOKING: Template = Template {
    text: "Thank you {name}. Our neurologists have several availability slots. Would you prefer this week or next week? What time of day works best for you?",
    booking_intent: false,
};
const NEUROLOGY_INFO: Template = Template {
    text: "Thank you {name}. Neurological concerns should be evaluated by a specialist. I can connect you with our experienced neurologist. They can help diagnose and treat your condition. Shall we schedule an appointment?",
    booking_intent: true,
};
const ORTHOPEDICS_BOOKING: Template = Template {
    text: "Thank you {name}. Our orthopedic specialists are available for appointments. We have slots available Tuesday through Saturday. Which day suits you best?",
    booking_intent: true,
};
const ORTHOPEDICS_INFO: Template = Template {
    text: "Thank you {name}. Bone and joint issues require professional orthopedic care. I can help you schedule an evaluation with our orthopedic specialist. They'll assess your condition and recommend treatment. Would you like to proceed with booking?",
    booking_intent: false,
};
const GENERAL_NUDGE: Template = Template {
    text: "Thank you {name}. Based on what you've shared, I recommend booking a general consultation. Our doctors can assess your condition and refer you to a specialist if needed. Are you interested in scheduling an appointment this week?",
    booking_intent: true,
};
const GREETING: Template = Template {
    text: "Hello {name}! Thank you for contacting us. I'm here to help you with your medical needs. Could you tell me more about what brings you in today?",
    booking_intent: false,
};

/// Picks a template for the caller and fills in their name.
///
/// `history` is the session as it stood before this call; nothing here
/// appends to it.
pub fn generate(
    patient_name: &str,
    description: Option<&str>,
    specialty: Specialty,
    history: &[Turn],
) -> Reply {
    let name = match patient_name.trim() {
        "" => "there",
        trimmed => trimmed,
    };

    let template = match (specialty, wants_booking(description)) {
        (Specialty::Cardiology, true) => &CARDIOLOGY_BOOKING,
        (Specialty::Cardiology, false) => &CARDIOLOGY_INFO,
        (Specialty::Gastroenterology, true) => &GASTRO_BOOKING,
        (Specialty::Gastroenterology, false) => &GASTRO_INFO,
        (Specialty::Neurology, true) => &NEUROLOGY_BOOKING,
        (Specialty::Neurology, false) => &NEUROLOGY_INFO,
        (Specialty::Orthopedics, true) => &ORTHOPEDICS_BOOKING,
        (Specialty::Orthopedics, false) => &ORTHOPEDICS_INFO,
        (Specialty::General, _) if history.len() > 1 => &GENERAL_NUDGE,
        (Specialty::General, _) => &GREETING,
    };

    Reply {
        text: template.text.replace(NAME, name),
        booking_intent: template.booking_intent,
        next_steps: next_steps(template.booking_intent),
    }
}

pub fn next_steps(booking_intent: bool) -> Vec<String> {
    let steps = if booking_intent {
        BOOKING_STEPS
    } else {
        DETAIL_STEPS
    };
    steps.iter().map(|s| s.to_string()).collect()
}

/// Renders the last few completed turns for the agent's benefit.
pub fn build_context(history: &[Turn]) -> String {
    if history.len() <= 1 {
        return FIRST_MESSAGE_CONTEXT.to_string();
    }

    let start = history.len().saturating_sub(CONTEXT_TURNS);
    let mut context = String::from("Previous messages in this conversation:\n");
    for turn in &history[start..] {
        context.push_str(&format!(
            "- Patient: {}\n- Agent: {}\n",
            turn.user.as_deref().unwrap_or(""),
            turn.agent
        ));
    }
    context
}
