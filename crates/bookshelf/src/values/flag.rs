/// A boolean-like query value coerced to a number.
///
/// Query strings carry `reading=1` or `finished=0` style flags. The value is
/// coerced to `0`/`1` and compared against the record's boolean field; any
/// other value (including non-numeric text) matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    Zero,
    One,
    /// A number other than 0 or 1, or something that is not a number at all.
    Other,
}

impl FlagValue {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "true" => return Self::One,
            "false" | "" => return Self::Zero,
            _ => {}
        }
        match raw.parse::<f64>() {
            Ok(n) if n == 1.0 => Self::One,
            Ok(n) if n == 0.0 => Self::Zero,
            _ => Self::Other,
        }
    }

    /// Whether a record flag coerced to 0/1 equals this value.
    pub fn matches(self, flag: bool) -> bool {
        match self {
            Self::One => flag,
            Self::Zero => !flag,
            Self::Other => false,
        }
    }
}
