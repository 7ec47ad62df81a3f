use super::*;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub phones: Vec<PhoneNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: PhoneType,
}

/// Kind of a phone number as entered at the prompt.
///
/// Codes outside the known range are kept verbatim in `Unrecognized` so a
/// record can be saved and loaded again without losing what the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneType {
    #[default]
    Mobile,
    Home,
    Work,
    Unrecognized(i32),
}

impl PhoneType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => PhoneType::Mobile,
            1 => PhoneType::Home,
            2 => PhoneType::Work,
            other => PhoneType::Unrecognized(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            PhoneType::Mobile => 0,
            PhoneType::Home => 1,
            PhoneType::Work => 2,
            PhoneType::Unrecognized(code) => *code,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PhoneType::Unrecognized(_))
    }

    /// Parses a phone type answer. Any integer that fits the 32-bit wire
    /// enum is accepted; `context` prefixes the error message.
    pub fn parse(input: &str, context: &str) -> Result<Self, AppError> {
        let code = input
            .trim()
            .parse::<i64>()
            .map_err(|e| AppError::parse_int(context, e))?;

        let code = i32::try_from(code).map_err(|_| {
            AppError::Validation(format!(
                "{context}: phone type {code} is outside the 32-bit range"
            ))
        })?;
        Ok(PhoneType::from_code(code))
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneType::Mobile => write!(f, "Mobile"),
            PhoneType::Home => write!(f, "Home"),
            PhoneType::Work => write!(f, "Work"),
            PhoneType::Unrecognized(code) => write!(f, "Unrecognized({})", code),
        }
    }
}

impl Serialize for PhoneType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PhoneNumber {
    pub fn new(number: String, kind: PhoneType) -> Self {
        PhoneNumber { number, kind }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} type {}", self.number, self.kind)
    }
}

impl Person {
    /// A freshly created person always starts with exactly one phone.
    pub fn new(name: String, email: String, phone: PhoneNumber) -> Self {
        Person {
            name,
            email,
            phones: vec![phone],
        }
    }

    pub fn primary_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    pub fn primary_phone_mut(&mut self) -> Option<&mut PhoneNumber> {
        self.phones.first_mut()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | email: {} | phones: ", self.name, self.email)?;

        if self.phones.is_empty() {
            return write!(f, "none");
        }

        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
