//! The standard 78-card Rider-Waite catalogue.

use crate::card::{CardDef, Rank, Suit};

/// Major arcana in order 0-21: (title, upright, reversed).
const TRUMPS: [(&str, &str, &str); 22] = [
    (
        "The Fool",
        "Beginnings, innocence, journey, spontaneity, a free spirit",
        "Holding back, recklessness, risk-taking, naivety",
    ),
    (
        "The Magician",
        "Intention, focus, will power, skill, purpose, creativity, resourcefulness",
        "Manipulation, poor planning, untapped talents, trickery",
    ),
    (
        "The High Priestess",
        "Intuition, higher powers, wisdom, secrets, subconscious mind",
        "Secrets, disconnected from intuition, withdrawal, silence",
    ),
    (
        "The Empress",
        "Fertility, mother, lover, nature, protection, abundance",
        "Creative block, dependence on others, smothering, emptiness",
    ),
    (
        "The Emperor",
        "Authority, father-figure, leadership, structure, logic, power",
        "Domination, excessive control, rigidity, lack of discipline",
    ),
    (
        "The Hierophant",
        "Organizations, religion, group identification, social rules, tradition, school",
        "Personal beliefs, freedom, challenging the status quo, rebellion",
    ),
    (
        "The Lovers",
        "Relationships, love, communication, union, harmony, choices",
        "Self-love, disharmony, imbalance, misalignment of values",
    ),
    (
        "The Chariot",
        "Direction, control, will power, victory, ambition, travel",
        "Lack of control, opposition, lack of direction, aggression",
    ),
    (
        "Strength",
        "Fortitude, inner strength, love, patience, compassion",
        "Self-doubt, weakness, insecurity, raw emotion",
    ),
    (
        "The Hermit",
        "Solitude, soul-searching, introspection, being alone, inner guidance",
        "Isolation, loneliness, withdrawal, being anti-social",
    ),
    (
        "Wheel of Fortune",
        "Fate, good luck, karma, life cycles, destiny, changes, the big picture",
        "Bad luck, resistance to change, breaking cycles, upheaval",
    ),
    (
        "Justice",
        "Justice, fairness, truth, law, logic, balance",
        "Unfairness, lack of accountability, dishonesty, bias",
    ),
    (
        "The Hanged Man",
        "Sacrifice, restriction, letting go, evaluation, new perspective",
        "Delays, resistance, stalling, indecision",
    ),
    (
        "Death",
        "Transformation, ending, beginning, transition",
        "Resistance to change, inability to move on, stagnation",
    ),
    (
        "Temperance",
        "Balance, moderation, mix, patience, adjusting",
        "Imbalance, excess, lack of long-term vision, clashing",
    ),
    (
        "The Devil",
        "Shackles, fear, self-restriction, addiction, lust, the dark side of self",
        "Release, breaking free, reclaiming power, detachment",
    ),
    (
        "The Tower",
        "Destruction, false securities, upheaval, sudden change, a wake-up call",
        "Avoiding disaster, fear of change, delaying the inevitable",
    ),
    (
        "The Star",
        "Hope, guidance, relief, inspiration, harmony",
        "Despair, lack of faith, discouragement, disconnection",
    ),
    (
        "The Moon",
        "Illusions, intuition, the unknown, fear, subconscious",
        "Release of fear, repressed emotion, confusion clearing",
    ),
    (
        "The Sun",
        "Illumination, clarity, fun, warmth, success, vitality",
        "Temporary sadness, lack of success, overly optimistic",
    ),
    (
        "Judgement",
        "Awakening, rebirth, inner calling, new perspective",
        "Self-doubt, refusal of the call, harsh self-judgement",
    ),
    (
        "The World",
        "Enlightenment, completion, travel, perfect unity, accomplishment",
        "Incompletion, lack of closure, shortcuts, delays",
    ),
];

/// Minor arcana meanings, Ace through King: (upright, reversed).
const WANDS: [(&str, &str); 14] = [
    (
        "Inspiration, new opportunities, growth, potential",
        "Delays, lack of motivation, false starts",
    ),
    (
        "Future planning, progress, decisions, discovery",
        "Fear of the unknown, lack of planning, playing it safe",
    ),
    (
        "Expansion, foresight, overseas opportunities",
        "Obstacles, frustration, unexpected delays",
    ),
    (
        "Celebration, harmony, homecoming, community",
        "Lack of support, transition, conflict at home",
    ),
    (
        "Conflict, disagreements, competition, tension",
        "Avoiding conflict, inner conflict, peace after struggle",
    ),
    (
        "Public recognition, victory, progress, self-confidence",
        "Egotism, fall from grace, lack of recognition",
    ),
    (
        "Challenge, competition, perseverance, protection",
        "Exhaustion, giving up, being overwhelmed",
    ),
    (
        "Speed, action, swift change, movement",
        "Delays, frustration, holding off, resisting change",
    ),
    (
        "Resilience, persistence, boundaries, a test of faith",
        "Paranoia, defensiveness, near collapse",
    ),
    (
        "Burden, responsibility, hard work, stress",
        "Letting go of burdens, delegation, release",
    ),
    (
        "Enthusiasm, exploration, discovery, free spirit",
        "Lack of direction, procrastination, creative blocks",
    ),
    (
        "Energy, passion, adventure, impulsiveness",
        "Haste, scattered energy, delays, frustration",
    ),
    (
        "Courage, confidence, determination, vibrancy",
        "Self-doubt, jealousy, insecurity, selfishness",
    ),
    (
        "Leadership, vision, entrepreneurship, honour",
        "Impulsiveness, overbearing, unachievable expectations",
    ),
];

const CUPS: [(&str, &str); 14] = [
    (
        "New feelings, spirituality, intuition, love",
        "Emotional loss, blocked creativity, emptiness",
    ),
    (
        "Unity, partnership, connection, mutual attraction",
        "Broken communication, imbalance, tension",
    ),
    (
        "Friendship, community, celebration, happiness",
        "Overindulgence, gossip, isolation",
    ),
    (
        "Apathy, contemplation, disconnectedness, re-evaluation",
        "Sudden awareness, choosing happiness, acceptance",
    ),
    (
        "Loss, grief, regret, disappointment",
        "Acceptance, moving on, finding peace",
    ),
    (
        "Familiarity, happy memories, innocence, nostalgia",
        "Living in the past, naivety, unrealistic memories",
    ),
    (
        "Searching for purpose, choices, daydreaming, illusion",
        "Lack of purpose, confusion, diversion",
    ),
    (
        "Walking away, disillusionment, leaving behind",
        "Avoidance, fear of change, fear of loss",
    ),
    (
        "Satisfaction, emotional stability, luxury, wishes fulfilled",
        "Greed, dissatisfaction, materialism",
    ),
    (
        "Inner happiness, fulfilment, dreams coming true",
        "Shattered dreams, broken family, domestic conflict",
    ),
    (
        "Happy surprise, dreamer, sensitivity, creative beginnings",
        "Emotional immaturity, insecurity, disappointment",
    ),
    (
        "Following the heart, idealism, romance, charm",
        "Moodiness, disappointment, unrealistic expectations",
    ),
    (
        "Compassion, calm, comfort, emotional security",
        "Martyrdom, insecurity, dependence",
    ),
    (
        "Compassion, control, balance, diplomacy",
        "Coldness, moodiness, bad advice, manipulation",
    ),
];

const SWORDS: [(&str, &str); 14] = [
    (
        "Breakthrough, clarity, sharp mind, truth",
        "Confusion, brutality, chaos, miscommunication",
    ),
    (
        "Difficult choices, indecision, stalemate",
        "Lesser of two evils, no right choice, confusion",
    ),
    (
        "Heartbreak, suffering, grief, sorrow",
        "Recovery, forgiveness, moving on",
    ),
    (
        "Rest, restoration, contemplation, recuperation",
        "Restlessness, burnout, stress",
    ),
    (
        "Unbridled ambition, win at all costs, sneakiness",
        "Lingering resentment, desire to reconcile, forgiveness",
    ),
    (
        "Transition, leaving behind, moving on",
        "Emotional baggage, unresolved issues, resisting transition",
    ),
    (
        "Deception, trickery, tactics and strategy",
        "Coming clean, rethinking approach, conscience",
    ),
    (
        "Imprisonment, entrapment, self-victimisation",
        "Self-acceptance, new perspective, freedom",
    ),
    (
        "Anxiety, hopelessness, trauma, nightmares",
        "Hope, reaching out, despair lifting",
    ),
    (
        "Failure, collapse, defeat, painful endings",
        "Recovery, regeneration, resisting an inevitable end",
    ),
    (
        "Curiosity, restlessness, mental energy, new ideas",
        "Deception, manipulation, all talk and no action",
    ),
    (
        "Action, impulsiveness, defending beliefs, haste",
        "No direction, disregard for consequences, unpredictability",
    ),
    (
        "Complexity, perceptiveness, clear-mindedness, independence",
        "Cold-heartedness, cruelty, bitterness",
    ),
    (
        "Head over heart, discipline, truth, authority",
        "Manipulation, cruelty, weakness, abuse of power",
    ),
];

const PENTACLES: [(&str, &str); 14] = [
    (
        "Opportunity, prosperity, new venture, manifestation",
        "Lost opportunity, missed chance, bad investment",
    ),
    (
        "Balancing decisions, priorities, adapting to change",
        "Loss of balance, disorganisation, overwhelm",
    ),
    (
        "Teamwork, collaboration, building, shared goals",
        "Lack of teamwork, disregard for skills, disorganised",
    ),
    (
        "Conservation, frugality, security, control",
        "Greed, stinginess, possessiveness",
    ),
    (
        "Need, poverty, insecurity, isolation",
        "Recovery, charity, improvement",
    ),
    (
        "Charity, generosity, sharing, giving and receiving",
        "Strings attached, stinginess, power and domination",
    ),
    (
        "Hard work, perseverance, diligence, long-term view",
        "Work without reward, impatience, distraction",
    ),
    (
        "Apprenticeship, passion, high standards, mastery",
        "Lack of passion, uninspired, no motivation",
    ),
    (
        "Fruits of labour, rewards, luxury, self-sufficiency",
        "Reckless spending, living beyond means, false success",
    ),
    (
        "Legacy, culmination, inheritance, family wealth",
        "Fleeting success, lack of stability, loss of legacy",
    ),
    (
        "Ambition, desire, diligence, a new venture",
        "Lack of commitment, greediness, laziness",
    ),
    (
        "Efficiency, hard work, responsibility, routine",
        "Laziness, obsessiveness, work without reward",
    ),
    (
        "Practicality, creature comforts, financial security",
        "Self-care neglected, imbalance between work and home",
    ),
    (
        "Abundance, prosperity, security, discipline",
        "Greed, indulgence, sensuality, stubbornness",
    ),
];

const MINOR_RANKS: [Rank; 14] = [
    Rank::Ace,
    Rank::Number(2),
    Rank::Number(3),
    Rank::Number(4),
    Rank::Number(5),
    Rank::Number(6),
    Rank::Number(7),
    Rank::Number(8),
    Rank::Number(9),
    Rank::Number(10),
    Rank::Page,
    Rank::Knight,
    Rank::Queen,
    Rank::King,
];

/// Build all 78 definitions in catalogue order: trumps, then wands, cups,
/// swords and pentacles from Ace to King.
pub fn rider_waite() -> Vec<CardDef> {
    let mut defs = Vec::with_capacity(78);

    for (number, (title, upright, reversed)) in (0u8..).zip(TRUMPS) {
        defs.push(CardDef::new(
            title,
            Rank::Major(number),
            Suit::Trump,
            upright,
            reversed,
        ));
    }

    let minors = [
        (Suit::Wands, "Wands", &WANDS),
        (Suit::Cups, "Cups", &CUPS),
        (Suit::Swords, "Swords", &SWORDS),
        (Suit::Pentacles, "Pentacles", &PENTACLES),
    ];
    for (suit, suit_name, meanings) in minors {
        for (rank, (upright, reversed)) in MINOR_RANKS.iter().zip(meanings.iter()) {
            defs.push(CardDef::new(
                format!("{rank} of {suit_name}"),
                *rank,
                suit,
                *upright,
                *reversed,
            ));
        }
    }

    defs
}
