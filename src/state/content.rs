//! Built-in event content shown on the client screens.

use serde::Serialize;
use utoipa::ToSchema;

use crate::state::{
    groups::Group,
    quiz::{Question, QuizOption},
    ranking::ScoreEntry,
};

/// Networking challenge surfaced shortly after the dashboard opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub points: u64,
    pub time_limit: String,
}

/// A round scheduled later in the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UpcomingRound {
    pub name: String,
    pub starts_in: String,
}

/// The round the participant is seated in next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventRound {
    pub name: String,
    pub seats_taken: u32,
    pub seats: u32,
    pub attendees: Vec<String>,
}

/// Badge on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Achievement {
    pub name: String,
    pub icon: String,
    pub earned: bool,
}

pub fn icebreaker_questions() -> Vec<Question> {
    vec![
        question(
            "Your ideal weekend project involves:",
            &[
                ("⚙️", "Prototyping a new app idea"),
                ("👥", "Organizing a hackathon"),
                ("💻", "Learning a new programming language"),
                ("📊", "Creating a business plan"),
            ],
        ),
        question(
            "What brings you to this event?",
            &[
                ("🤝", "Find mentors and advisors"),
                ("💡", "Share my startup idea"),
                ("🔗", "Network with like-minded people"),
                ("📚", "Learn from industry experts"),
            ],
        ),
        question(
            "Choose your superpower:",
            &[
                ("💡", "Ideas - I'm the visionary"),
                ("👥", "People - I connect and inspire"),
                ("🔨", "Building - I make things happen"),
                ("📈", "Strategy - I plan and execute"),
            ],
        ),
    ]
}

pub fn network_challenge() -> Challenge {
    Challenge {
        title: "Network Challenge!".into(),
        description: "Talk to 3 designers in 20 minutes and discover their favorite design tools!"
            .into(),
        points: 50,
        time_limit: "20 mins".into(),
    }
}

pub fn next_round() -> EventRound {
    EventRound {
        name: "AI Innovators".into(),
        seats_taken: 4,
        seats: 6,
        attendees: ["S", "M", "A", "J", "C", "Y"].map(String::from).to_vec(),
    }
}

pub fn upcoming_rounds() -> Vec<UpcomingRound> {
    [("No-Code Builders", "45 mins"), ("Crypto Enthusiast", "2 hours")]
        .into_iter()
        .map(|(name, starts_in)| UpcomingRound {
            name: name.into(),
            starts_in: starts_in.into(),
        })
        .collect()
}

/// Everyone else on this week's board. The signed-in participant is added
/// from their stored profile.
pub fn weekly_standings() -> Vec<ScoreEntry> {
    [
        ("Qelvin N.", 6900),
        ("Rick C.", 4200),
        ("Sarah M.", 2880),
        ("Mike R.", 2720),
        ("Marwin G.", 2690),
        ("Christian B.", 2100),
        ("Vince A.", 1950),
        ("Carl B.", 1800),
        ("John D.", 1650),
    ]
    .into_iter()
    .map(|(identity, points)| ScoreEntry::new(identity, points))
    .collect()
}

pub fn event_groups() -> Vec<Group> {
    vec![
        Group {
            name: "DONGMINATION".into(),
            members: "30+ Rams Online".into(),
            avatars: ["D", "O", "N", "G"].map(String::from).to_vec(),
            active: true,
        },
        Group {
            name: "AI Innovators".into(),
            members: "4/6 Rams".into(),
            avatars: ["A", "I"].map(String::from).to_vec(),
            active: false,
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    [
        ("First Connection", "🤝", true),
        ("Chat Master", "💬", true),
        ("Challenge Crusher", "⚡", false),
        ("Networking Ninja", "🥷", false),
    ]
    .into_iter()
    .map(|(name, icon, earned)| Achievement {
        name: name.into(),
        icon: icon.into(),
        earned,
    })
    .collect()
}

pub fn interests() -> Vec<String> {
    [
        "AI & Machine Learning",
        "Startup Ecosystem",
        "No-Code Tools",
        "Design Thinking",
    ]
    .map(String::from)
    .to_vec()
}

fn question(prompt: &str, options: &[(&str, &str)]) -> Question {
    Question {
        prompt: prompt.into(),
        options: options
            .iter()
            .map(|(icon, label)| QuizOption {
                icon: (*icon).into(),
                label: (*label).into(),
            })
            .collect(),
    }
}
