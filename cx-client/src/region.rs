use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::errors::CoralogixError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Region {
    EU1,
    EU2,
    US1,
    US2,
    AP1,
    AP2,
    AP3,
}

impl Region {
    pub fn domain(&self) -> &'static str {
        match self {
            Region::EU1 => "coralogix.com",
            Region::EU2 => "eu2.coralogix.com",
            Region::US1 => "coralogix.us",
            Region::US2 => "cx498.coralogix.com",
            Region::AP1 => "coralogix.in",
            Region::AP2 => "coralogixsg.com",
            Region::AP3 => "ap3.coralogix.com",
        }
    }

    pub fn api_url(&self) -> anyhow::Result<Url> {
        Ok(Url::parse(&format!("https://api.{}/", self.domain()))?)
    }
}

impl FromStr for Region {
    type Err = CoralogixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EU1" => Ok(Region::EU1),
            "EU2" => Ok(Region::EU2),
            "US1" => Ok(Region::US1),
            "US2" => Ok(Region::US2),
            "AP1" => Ok(Region::AP1),
            "AP2" => Ok(Region::AP2),
            "AP3" => Ok(Region::AP3),
            _ => Err(CoralogixError::UnknownRegion(s.into())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
