//! Known team names and their ESPN team ids.
//!
//! ESPN ids are opaque; there is no way to derive them from a name, so the
//! checker only knows the teams listed here.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Lower-cased team name → ESPN team id, in the order shown by the help text.
pub static TEAMS: &[(&str, &str)] = &[
    ("navy", "2426"),
    ("air force", "2005"),
    ("army", "349"),
    ("michigan", "130"),
    ("ohio state", "194"),
    ("alabama", "333"),
    ("georgia", "61"),
    ("clemson", "228"),
    ("notre dame", "87"),
    ("usc", "30"),
    ("texas", "251"),
    ("oklahoma", "201"),
    ("penn state", "213"),
    ("florida", "57"),
    ("lsu", "99"),
    ("oregon", "2483"),
    ("washington", "264"),
    ("miami", "2390"),
    ("florida state", "52"),
    ("tennessee", "2633"),
    ("auburn", "2"),
    ("wisconsin", "275"),
    ("texas a&m", "245"),
    ("stanford", "24"),
    ("ucla", "26"),
    ("texas tech", "2641"),
    ("ole miss", "145"),
    ("mississippi state", "344"),
    ("arkansas", "8"),
    ("kentucky", "96"),
    ("south carolina", "2579"),
    ("vanderbilt", "238"),
    ("missouri", "142"),
    ("kansas", "2305"),
    ("kansas state", "2306"),
    ("iowa state", "66"),
    ("baylor", "239"),
    ("tcu", "2628"),
    ("oklahoma state", "197"),
    ("west virginia", "277"),
    ("utah", "254"),
    ("colorado", "38"),
    ("arizona", "12"),
    ("arizona state", "9"),
    ("cal", "25"),
    ("boston college", "103"),
    ("syracuse", "183"),
    ("pitt", "221"),
    ("virginia", "258"),
    ("virginia tech", "259"),
    ("nc state", "152"),
    ("north carolina", "153"),
    ("duke", "150"),
    ("wake forest", "154"),
    ("louisville", "97"),
    ("houston", "248"),
    ("ucf", "2116"),
    ("cincinnati", "2132"),
    ("byu", "252"),
    ("smu", "2567"),
    ("memphis", "235"),
    ("tulane", "2655"),
    ("iowa", "2294"),
    ("nebraska", "158"),
    ("minnesota", "135"),
    ("illinois", "356"),
    ("purdue", "2509"),
    ("indiana", "84"),
    ("northwestern", "77"),
    ("maryland", "120"),
    ("rutgers", "164"),
    ("michigan state", "127"),
    ("oregon state", "204"),
    ("washington state", "265"),
    ("georgia tech", "59"),
    ("boise state", "68"),
    ("appalachian state", "2026"),
];

static INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TEAMS.iter().copied().collect());

/// ESPN id for a team name. Case-insensitive, exact match only.
pub fn resolve(name: &str) -> Option<&'static str> {
    INDEX.get(name.trim().to_lowercase().as_str()).copied()
}

pub fn known_names() -> impl Iterator<Item = &'static str> {
    TEAMS.iter().map(|(name, _)| *name)
}

pub fn len() -> usize {
    TEAMS.len()
}

/// The first `n` names in table order.
pub fn sample(n: usize) -> Vec<&'static str> {
    known_names().take(n).collect()
}

/// Display form of a table key: a letter is upper-cased when it follows a
/// non-letter, lower-cased otherwise ("texas a&m" → "Texas A&M").
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
