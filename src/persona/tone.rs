//! Sample sentence showing how the current tone dimensions sound

use super::dimension::Dimension;
use super::profile::Profile;

const FORMAL: &str = "We apologize, but we are experiencing a problem.";
const NEUTRAL: &str = "We're sorry, but we're experiencing a problem on our end.";
const CASUAL: &str = "Oops! We're experiencing a problem on our end.";
const CASUAL_WARM: &str = "Oops! We're sorry, but we're experiencing a problem on our end.";
const IRREVERENT: &str = "What did you do!? You broke it! (Just kidding. We're experiencing a problem on our end.)";

struct Tone {
    formal_casual: u8,
    serious_funny: u8,
    respectful_irreverent: u8,
    matter_enthusiastic: u8,
}

impl Tone {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            formal_casual: profile.dimension(Dimension::FormalCasual),
            serious_funny: profile.dimension(Dimension::SeriousFunny),
            respectful_irreverent: profile.dimension(Dimension::RespectfulIrreverent),
            matter_enthusiastic: profile.dimension(Dimension::MatterEnthusiastic),
        }
    }
}

/// Render the "something went wrong" message in the profile's tone of voice
pub fn preview_message(profile: &Profile) -> String {
    let t = Tone::from_profile(profile);

    // Reference points first, then a composed message for everything in between
    if t.formal_casual < 25 && t.serious_funny < 25 && t.respectful_irreverent < 25 && t.matter_enthusiastic < 25 {
        return FORMAL.to_string();
    }
    if (25..60).contains(&t.formal_casual)
        && t.serious_funny < 25
        && t.respectful_irreverent < 25
        && t.matter_enthusiastic < 25
    {
        return NEUTRAL.to_string();
    }
    if t.formal_casual >= 60
        && t.serious_funny < 25
        && t.respectful_irreverent < 25
        && (25..60).contains(&t.matter_enthusiastic)
    {
        return CASUAL_WARM.to_string();
    }
    if t.formal_casual >= 60 && t.serious_funny >= 25 && t.respectful_irreverent >= 60 && t.matter_enthusiastic >= 60 {
        return IRREVERENT.to_string();
    }

    let mut message = if t.formal_casual < 30 {
        FORMAL.to_string()
    } else if t.formal_casual < 60 {
        NEUTRAL.to_string()
    } else {
        CASUAL.to_string()
    };

    if t.serious_funny > 40 && t.formal_casual > 60 {
        message = format!("What did you do!? You broke it! (Just kidding. {})", message.to_lowercase());
    }

    if t.matter_enthusiastic > 50 {
        message = message.replace("experiencing a problem", "experiencing a problem, but we're on it!");
    }

    if t.respectful_irreverent > 70 && t.formal_casual > 60 {
        message = IRREVERENT.to_string();
    }

    message
}
