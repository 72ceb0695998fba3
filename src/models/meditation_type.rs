/// A known meditation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeditationType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Hex colour used for the type across the UI.
    pub color: &'static str,
}

pub const MEDITATION_TYPES: &[MeditationType] = &[
    MeditationType {
        id: "mindfulness",
        name: "Mindfulness",
        description: "Focus on the present moment with non-judgmental awareness",
        color: "#6E9ECF",
    },
    MeditationType {
        id: "breathing",
        name: "Breathing",
        description: "Calm the mind through focused breathing techniques",
        color: "#A192C8",
    },
    MeditationType {
        id: "focus",
        name: "Focus",
        description: "Sharpen concentration and mental clarity",
        color: "#F0A19B",
    },
    MeditationType {
        id: "loving-kindness",
        name: "Loving Kindness",
        description: "Cultivate compassion for yourself and others",
        color: "#E97777",
    },
    MeditationType {
        id: "body-scan",
        name: "Body Scan",
        description: "Progressive relaxation by focusing on each part of the body",
        color: "#7FB77E",
    },
    MeditationType {
        id: "gratitude",
        name: "Gratitude",
        description: "Develop appreciation for the positive aspects of life",
        color: "#FFB562",
    },
];

impl MeditationType {
    pub fn by_id(id: &str) -> Option<&'static MeditationType> {
        MEDITATION_TYPES.iter().find(|t| t.id == id)
    }

    /// Display name for a tag; unknown tags are shown as-is.
    pub fn display_name(id: &str) -> String {
        match Self::by_id(id) {
            Some(t) => t.name.to_string(),
            None if id.trim().is_empty() => "Unknown".to_string(),
            None => id.to_string(),
        }
    }
}
