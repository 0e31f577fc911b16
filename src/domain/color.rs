use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Green,
    Red,
}

impl Color {
    pub fn to_hex(self) -> &'static str {
        match self {
            Color::Blue => "#0000ff",
            Color::Green => "#00ff00",
            Color::Red => "#ff0000",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
        };
        write!(f, "{}", name)
    }
}
