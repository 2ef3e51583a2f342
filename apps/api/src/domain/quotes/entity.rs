use serde::Serialize;
use ts_rs::TS;

pub const HADITH_QUOTES: [&str; 10] = [
    "The best of you are those who are best to their families. - Sahih Bukhari",
    "Speak good or remain silent. - Sunan al-Tirmidhi",
    "None of you truly believes until he loves for his brother what he loves for himself. - Sahih Bukhari",
    "The strong person is not the one who can wrestle someone else down. The strong person is the one who can control himself when he is angry. - Sahih al-Bukhari",
    "The most beloved of deeds to Allah are those that are most consistent, even if they are small. - Sahih Bukhari",
    "Do not be people without minds of your own, saying that if others treat you well you will treat them well and that if they do wrong you will do wrong. But (instead) accustom yourselves to do good if people do good and not to do wrong if they do evil. - Sunan al-Tirmidhi",
    "Kindness is a mark of faith, and whoever has no kindness has no faith. - Sahih Muslim",
    "Whoever does not show mercy to our young ones and respect to our elders is not one of us. - Sunan al-Tirmidhi",
    "The best of people are those who are most beneficial to people. - Sunan al-Tirmidhi",
    "Do not belittle any good deed, even meeting your brother with a cheerful face. - Sahih Muslim",
];

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct QuoteOfTheMoment {
    pub quote: String,
    pub index: usize,
    pub rotates_in_seconds: u64,
}

/// Quote shown at `unix_seconds` when the banner rotates every `rotation_seconds`.
///
/// Every client sees the same quote during a rotation slot.
pub fn quote_at(unix_seconds: i64, rotation_seconds: u64) -> QuoteOfTheMoment {
    let rotation = rotation_seconds.max(1);
    let seconds = unix_seconds.max(0) as u64;
    let slot = seconds / rotation;
    let index = (slot % HADITH_QUOTES.len() as u64) as usize;
    QuoteOfTheMoment {
        quote: HADITH_QUOTES[index].to_string(),
        index,
        rotates_in_seconds: rotation - seconds % rotation,
    }
}
