// ✨ Cosmic Car Match - Birthday → zodiac sign → recommended Toyota
// 12 fixed profiles, first-match scan in sign-calendar order

use crate::error::{GalaxyError, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Year used to validate (month, day) when no birth year is given.
/// A leap year, so February 29 is accepted.
const REFERENCE_YEAR: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZodiacProfile {
    pub sign: &'static str,
    pub date_range_label: &'static str,
    pub element: Element,
    pub traits: &'static [&'static str],
    pub recommended_model: &'static str,
    pub explanation: &'static str,
    pub emoji: &'static str,
    pub theme_color: &'static str,
    /// First day of the sign, inclusive (month, day)
    pub start: (u32, u32),
    /// Last day of the sign, inclusive (month, day)
    pub end: (u32, u32),
}

impl ZodiacProfile {
    /// True when (month, day) falls inside this sign's inclusive range
    pub fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.0 && day >= self.start.1) || (month == self.end.0 && day <= self.end.1)
    }
}

pub static ZODIAC: [ZodiacProfile; 12] = [
    ZodiacProfile {
        sign: "Aries",
        date_range_label: "March 21 - April 19",
        element: Element::Fire,
        traits: &["Bold", "Ambitious", "Confident"],
        recommended_model: "Toyota GR Supra",
        explanation: "Your adventurous spirit and love for excitement make the powerful GR Supra your perfect match. Bold and fast, just like you!",
        emoji: "♈",
        theme_color: "from-red-500 to-orange-500",
        start: (3, 21),
        end: (4, 19),
    },
    ZodiacProfile {
        sign: "Taurus",
        date_range_label: "April 20 - May 20",
        element: Element::Earth,
        traits: &["Reliable", "Patient", "Practical"],
        recommended_model: "Toyota Camry",
        explanation: "Dependable and comfortable, the Camry matches your appreciation for quality and reliability. A timeless choice for a timeless sign.",
        emoji: "♉",
        theme_color: "from-green-500 to-emerald-500",
        start: (4, 20),
        end: (5, 20),
    },
    ZodiacProfile {
        sign: "Gemini",
        date_range_label: "May 21 - June 20",
        element: Element::Air,
        traits: &["Versatile", "Curious", "Adaptable"],
        recommended_model: "Toyota Prius",
        explanation: "Your dual nature loves the Prius's hybrid versatility. Innovative and efficient, perfect for your dynamic lifestyle.",
        emoji: "♊",
        theme_color: "from-yellow-500 to-amber-500",
        start: (5, 21),
        end: (6, 20),
    },
    ZodiacProfile {
        sign: "Cancer",
        date_range_label: "June 21 - July 22",
        element: Element::Water,
        traits: &["Nurturing", "Protective", "Loyal"],
        recommended_model: "Toyota Highlander",
        explanation: "Family-focused and protective, the spacious Highlander keeps your loved ones safe and comfortable on every journey.",
        emoji: "♋",
        theme_color: "from-blue-400 to-cyan-400",
        start: (6, 21),
        end: (7, 22),
    },
    ZodiacProfile {
        sign: "Leo",
        date_range_label: "July 23 - August 22",
        element: Element::Fire,
        traits: &["Confident", "Generous", "Leader"],
        recommended_model: "Toyota Tundra",
        explanation: "Bold and commanding presence! The Tundra's power and style match your regal personality and leadership qualities.",
        emoji: "♌",
        theme_color: "from-orange-500 to-yellow-500",
        start: (7, 23),
        end: (8, 22),
    },
    ZodiacProfile {
        sign: "Virgo",
        date_range_label: "August 23 - September 22",
        element: Element::Earth,
        traits: &["Analytical", "Practical", "Organized"],
        recommended_model: "Toyota Corolla",
        explanation: "Efficient and meticulously designed, the Corolla's practicality and attention to detail mirror your perfectionist nature.",
        emoji: "♍",
        theme_color: "from-teal-500 to-green-500",
        start: (8, 23),
        end: (9, 22),
    },
    ZodiacProfile {
        sign: "Libra",
        date_range_label: "September 23 - October 22",
        element: Element::Air,
        traits: &["Balanced", "Harmonious", "Diplomatic"],
        recommended_model: "Toyota Avalon",
        explanation: "Elegant and refined, the Avalon offers the perfect balance of luxury and practicality that speaks to your aesthetic sense.",
        emoji: "♎",
        theme_color: "from-pink-500 to-rose-500",
        start: (9, 23),
        end: (10, 22),
    },
    ZodiacProfile {
        sign: "Scorpio",
        date_range_label: "October 23 - November 21",
        element: Element::Water,
        traits: &["Intense", "Passionate", "Mysterious"],
        recommended_model: "Toyota 4Runner",
        explanation: "Powerful and enigmatic, the 4Runner's rugged capability matches your intense and adventurous spirit.",
        emoji: "♏",
        theme_color: "from-purple-500 to-pink-500",
        start: (10, 23),
        end: (11, 21),
    },
    ZodiacProfile {
        sign: "Sagittarius",
        date_range_label: "November 22 - December 21",
        element: Element::Fire,
        traits: &["Adventurous", "Optimistic", "Free-spirited"],
        recommended_model: "Toyota Tacoma",
        explanation: "Ready for any adventure! The Tacoma's go-anywhere attitude perfectly complements your wanderlust and love of freedom.",
        emoji: "♐",
        theme_color: "from-indigo-500 to-purple-500",
        start: (11, 22),
        end: (12, 21),
    },
    ZodiacProfile {
        sign: "Capricorn",
        date_range_label: "December 22 - January 19",
        element: Element::Earth,
        traits: &["Ambitious", "Disciplined", "Responsible"],
        recommended_model: "Toyota Sequoia",
        explanation: "Strong and dependable, the Sequoia reflects your steadfast determination and ability to handle any responsibility.",
        emoji: "♑",
        theme_color: "from-slate-500 to-gray-500",
        start: (12, 22),
        end: (1, 19),
    },
    ZodiacProfile {
        sign: "Aquarius",
        date_range_label: "January 20 - February 18",
        element: Element::Air,
        traits: &["Innovative", "Independent", "Humanitarian"],
        recommended_model: "Toyota bZ4X",
        explanation: "Forward-thinking and eco-conscious, the electric bZ4X aligns with your innovative vision for a better future.",
        emoji: "♒",
        theme_color: "from-cyan-500 to-blue-500",
        start: (1, 20),
        end: (2, 18),
    },
    ZodiacProfile {
        sign: "Pisces",
        date_range_label: "February 19 - March 20",
        element: Element::Water,
        traits: &["Intuitive", "Compassionate", "Artistic"],
        recommended_model: "Toyota RAV4",
        explanation: "Adaptable and intuitive, the RAV4's versatility matches your fluid nature and ability to navigate life's currents.",
        emoji: "♓",
        theme_color: "from-blue-500 to-indigo-500",
        start: (2, 19),
        end: (3, 20),
    },
];

/// Profile for a birthday given as (month, day)
///
/// Rejects combinations that are not a calendar date in a leap year.
pub fn zodiac_for_date(month: u32, day: u32) -> Result<&'static ZodiacProfile> {
    if !(1..=12).contains(&month) {
        return Err(GalaxyError::invalid("month", format!("must be 1-12, got {}", month)));
    }
    if NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).is_none() {
        return Err(GalaxyError::invalid(
            "day",
            format!("{} is not a valid day of month {}", day, month),
        ));
    }

    Ok(scan(month, day))
}

/// Profile for a full calendar date
pub fn zodiac_for(date: NaiveDate) -> &'static ZodiacProfile {
    scan(date.month(), date.day())
}

// Pisces is the fallback: anything no earlier sign claims belongs to it
fn scan(month: u32, day: u32) -> &'static ZodiacProfile {
    let (ordered, fallback) = ZODIAC.split_at(ZODIAC.len() - 1);
    ordered
        .iter()
        .find(|p| p.contains(month, day))
        .unwrap_or(&fallback[0])
}

// ============================================================================
// TESTS
// ============================================================================
