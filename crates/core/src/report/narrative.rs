//! Category-keyed narrative text.
//!
//! One [`ElementNarrative`] per element, stored in [`ElementCategory::ALL`] order; the composer
//! selects a row and never branches on the category itself.

use crate::element::ElementCategory;

/// Fixed commentary for one element category.
#[derive(Debug, Clone, Copy)]
pub struct ElementNarrative {
    pub traits: &'static str,
    pub career: &'static str,
    pub relationships: &'static str,
    /// Organs traditionally associated with the element.
    pub organs: &'static str,
    pub health_risk: &'static str,
}

static NARRATIVES: [ElementNarrative; 5] = [
    // Wood
    ElementNarrative {
        traits: "Wood energy is creative and forward-looking. You tend to start things with \
                 enthusiasm, grow steadily, and dislike being boxed in.",
        career: "Work that rewards planning and growth suits you: education, design, \
                 research, or building something new from the ground up.",
        relationships: "You are generous and encouraging with people close to you, but can \
                        become impatient when others resist change.",
        organs: "liver, gallbladder and muscles",
        health_risk: "Wood is sensitive to stress. Watch liver function, muscle tension and \
                      irritability when workloads pile up.",
    },
    // Fire
    ElementNarrative {
        traits: "Fire energy is passionate and outgoing. You bring warmth to a room and act \
                 quickly on your convictions.",
        career: "Roles with visibility and contact suit you: sales, performance, public \
                 relations, or leading a team through a launch.",
        relationships: "You connect easily and love openly, though your enthusiasm can burn \
                        hot and cool quickly if not paced.",
        organs: "heart, small intestine and blood circulation",
        health_risk: "Fire calls for attention to the cardiovascular system. Keep an eye on \
                      blood pressure, palpitations and overheating.",
    },
    // Earth
    ElementNarrative {
        traits: "Earth energy is steady and balanced. You are dependable, practical and \
                 good at keeping groups grounded.",
        career: "Work that values trust and stability suits you: administration, finance, \
                 healthcare, or real estate.",
        relationships: "You are loyal and caring, a reliable partner, but may hold on to \
                        worries instead of sharing them.",
        organs: "stomach, spleen and digestive tract",
        health_risk: "Earth is strongly affected by digestion. Irregular meals and \
                      overthinking show up first as stomach trouble.",
    },
    // Metal
    ElementNarrative {
        traits: "Metal energy is rational and analytical. You value principles, precision \
                 and clear decisions.",
        career: "Structured, exacting work suits you: law, engineering, auditing, or \
                 quality control.",
        relationships: "You are principled and protective, though you can come across as \
                        reserved until trust is established.",
        organs: "lungs, large intestine and immune system",
        health_risk: "Metal should mind the lungs and immunity. Dry air, respiratory \
                      infections and skin conditions deserve attention.",
    },
    // Water
    ElementNarrative {
        traits: "Water energy is introspective and intuitive. You adapt well, think deeply \
                 and notice what others miss.",
        career: "Work that rewards insight suits you: research, writing, counselling, or \
                 strategy.",
        relationships: "You are perceptive and supportive, but need time alone and may \
                        keep your feelings to yourself.",
        organs: "kidneys, bladder and brain",
        health_risk: "Water is sensitive in kidney function and mental health. Watch \
                      hydration, fatigue and sleep quality.",
    },
];

/// Narrative row for a category.
pub fn narrative_for(category: ElementCategory) -> &'static ElementNarrative {
    &NARRATIVES[category as usize]
}
