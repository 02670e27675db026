use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Program {
    FingerMaths,
    Phonics,
    Handwriting,
}

impl Program {
    /// Display order of programs everywhere they are listed.
    pub const ALL: [Program; 3] = [Program::FingerMaths, Program::Phonics, Program::Handwriting];

    pub fn label(self) -> &'static str {
        match self {
            Program::FingerMaths => "Finger Maths",
            Program::Phonics => "Phonics",
            Program::Handwriting => "Handwriting",
        }
    }

    /// Accepts `finger-maths`, `fingerMaths`, `finger_maths` or `Finger Maths`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "fingermaths" => Ok(Program::FingerMaths),
            "phonics" => Ok(Program::Phonics),
            "handwriting" => Ok(Program::Handwriting),
            _ => Err(CoreError::InvalidProgram(raw.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Programs {
    pub finger_maths: bool,
    pub phonics: bool,
    pub handwriting: bool,
}

impl Programs {
    pub fn contains(&self, program: Program) -> bool {
        match program {
            Program::FingerMaths => self.finger_maths,
            Program::Phonics => self.phonics,
            Program::Handwriting => self.handwriting,
        }
    }

    pub fn insert(&mut self, program: Program) {
        match program {
            Program::FingerMaths => self.finger_maths = true,
            Program::Phonics => self.phonics = true,
            Program::Handwriting => self.handwriting = true,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Program> + '_ {
        Program::ALL
            .into_iter()
            .filter(move |program| self.contains(*program))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }
}

impl FromIterator<Program> for Programs {
    fn from_iter<I: IntoIterator<Item = Program>>(iter: I) -> Self {
        let mut programs = Programs::default();
        for program in iter {
            programs.insert(program);
        }
        programs
    }
}

#[cfg(test)]
mod tests {
    use super::{Program, Programs};

    #[test]
    fn parse_accepts_common_spellings() {
        for raw in ["finger-maths", "fingerMaths", "finger_maths", "Finger Maths"] {
            assert_eq!(Program::parse(raw).unwrap(), Program::FingerMaths);
        }
        assert_eq!(Program::parse("PHONICS").unwrap(), Program::Phonics);
        assert!(Program::parse("chess").is_err());
    }

    #[test]
    fn enabled_follows_display_order() {
        let programs: Programs = [Program::Handwriting, Program::FingerMaths]
            .into_iter()
            .collect();
        let enabled: Vec<_> = programs.enabled().collect();
        assert_eq!(enabled, vec![Program::FingerMaths, Program::Handwriting]);
        assert!(!programs.is_empty());
        assert!(Programs::default().is_empty());
    }
}
