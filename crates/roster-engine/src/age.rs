use chrono::{Datelike, NaiveDate};
use roster_types::AgeBracket;

/// Age in whole years on `today`.
///
/// Calendar-year difference, decremented when the birthday has not been
/// reached yet this year. `today` is an explicit parameter so every caller
/// up the stack stays reproducible.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Bracket lookup over the fixed half-open intervals.
pub fn bracket_for(age: i32) -> AgeBracket {
    if age < 18 {
        AgeBracket::Under18
    } else if age < 30 {
        AgeBracket::From18To29
    } else if age < 50 {
        AgeBracket::From30To49
    } else if age < 65 {
        AgeBracket::From50To64
    } else {
        AgeBracket::Over65
    }
}

/// Bracket of a member born on `birth_date`, as of `today`.
pub fn bracket_on(birth_date: NaiveDate, today: NaiveDate) -> AgeBracket {
    bracket_for(age_on(birth_date, today))
}
