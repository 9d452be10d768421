use std::fmt::{Display, Formatter};
use std::str::FromStr;

use mongodb::bson::{to_bson, Bson};
use rocket::request::FromParam;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six fixed elected positions contested in the election cycle.
///
/// Serialized as the ballot field keys (`head_boy`, ..., `sports_sec_girl`);
/// displayed as the labels voters see in the choice set.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    HeadBoy,
    HeadGirl,
    CulSecBoy,
    CulSecGirl,
    SportsSecBoy,
    SportsSecGirl,
}

impl Position {
    /// Every position, in the fixed reporting order.
    pub const ALL: [Position; 6] = [
        Position::HeadBoy,
        Position::HeadGirl,
        Position::CulSecBoy,
        Position::CulSecGirl,
        Position::SportsSecBoy,
        Position::SportsSecGirl,
    ];

    /// Stable field key, also the stored form.
    pub fn key(self) -> &'static str {
        match self {
            Position::HeadBoy => "head_boy",
            Position::HeadGirl => "head_girl",
            Position::CulSecBoy => "cul_sec_boy",
            Position::CulSecGirl => "cul_sec_girl",
            Position::SportsSecBoy => "sports_sec_boy",
            Position::SportsSecGirl => "sports_sec_girl",
        }
    }

    /// Human-readable label, as presented in ballot forms.
    pub fn label(self) -> &'static str {
        match self {
            Position::HeadBoy => "Head Boy",
            Position::HeadGirl => "Head Girl",
            Position::CulSecBoy => "Cultural Secretary - Boy",
            Position::CulSecGirl => "Cultural Secretary - Girl",
            Position::SportsSecBoy => "Sports Secretary - Boy",
            Position::SportsSecGirl => "Sports Secretary - Girl",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either spelling: the field key or the display label.
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| s == position.key() || s == position.label())
            .ok_or_else(|| Error::InvalidPosition(s.to_string()))
    }
}

impl<'a> FromParam<'a> for Position {
    type Error = Error;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse()
    }
}

impl From<Position> for Bson {
    fn from(position: Position) -> Self {
        to_bson(&position).expect("Serialisation is infallible")
    }
}
