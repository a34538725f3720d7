use std::fmt::Display;
use std::str::FromStr;

use derive_more::{Display as DisplayDerive, Error};
use serde::{Deserialize, Serialize};

/// Strand of an alignment hit relative to the reference sequence.
///
/// Aligners report `+` when the siRNA sense sequence matches the reference as-is and `-` when
/// its reverse complement does.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum Strand {
    /// The forward strand, also known as the positive strand or Watson strand.
    #[default]
    #[serde(rename = "+")]
    Forward = 1,
    /// The reverse strand, also known as the negative strand or Crick strand.
    #[serde(rename = "-")]
    Reverse = -1,
}

#[derive(Clone, PartialEq, Eq, Debug, DisplayDerive, Error)]
#[display("unknown strand symbol {symbol:?}, expected '+' or '-'")]
pub struct UnknownStrand {
    pub symbol: String,
}

impl Strand {
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward)
    }

    /// Get the symbolic representation of the strand.
    pub fn symbol(&self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Strand {
    type Error = UnknownStrand;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Self::Forward),
            '-' => Ok(Self::Reverse),
            _ => Err(UnknownStrand {
                symbol: value.to_string(),
            }),
        }
    }
}

impl FromStr for Strand {
    type Err = UnknownStrand;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(UnknownStrand {
                symbol: value.to_string(),
            }),
        }
    }
}
