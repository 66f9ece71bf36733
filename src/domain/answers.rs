use std::fmt;
use std::str::FromStr;

/// One of the two scored halves of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// The `level` form field value.
    pub fn level(&self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    fn index(&self) -> usize {
        self.level() as usize - 1
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => f.write_str("Part One"),
            Part::Two => f.write_str("Part Two"),
        }
    }
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            other => Err(format!("Invalid part: {}. Use 1 or 2", other)),
        }
    }
}

/// Answers already accepted by the site, `None` meaning unsolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers([Option<String>; 2]);

impl Answers {
    pub fn new(one: Option<String>, two: Option<String>) -> Self {
        Self([one, two])
    }

    /// Build from answers in page order; extras are ignored.
    pub fn from_found<I: IntoIterator<Item = String>>(found: I) -> Self {
        let mut found = found.into_iter();
        Self([found.next(), found.next()])
    }

    pub fn get(&self, part: Part) -> Option<&str> {
        self.0[part.index()].as_deref()
    }

    pub fn first_unsolved(&self) -> Option<Part> {
        [Part::One, Part::Two]
            .into_iter()
            .find(|part| self.get(*part).is_none())
    }
}
