// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Versioned persistence for [`Rectangle`].
//!
//! A rectangle is written as a struct with fields `version`, `x`, `y`,
//! `width`, `height`. Readers accept a missing `version` as version 1 and
//! reject versions newer than [`Rectangle::SERIAL_VERSION`].

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::Rectangle;

impl Rectangle {
    /// Layout version written alongside the fields.
    ///
    /// Bump this whenever a field is added or the field order changes.
    pub const SERIAL_VERSION: u32 = 1;
}

const fn first_version() -> u32 {
    1
}

#[derive(Serialize, Deserialize)]
#[serde(rename = "Rectangle")]
struct Repr {
    #[serde(default = "first_version")]
    version: u32,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Serialize for Rectangle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Repr {
            version: Self::SERIAL_VERSION,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rectangle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = Repr::deserialize(deserializer)?;
        if repr.version > Self::SERIAL_VERSION {
            return Err(de::Error::custom(format_args!(
                "unsupported Rectangle version {} (newest known is {})",
                repr.version,
                Self::SERIAL_VERSION
            )));
        }
        Ok(Self::new(repr.x, repr.y, repr.width, repr.height))
    }
}

#[cfg(test)]
mod tests {
    use crate::Rectangle;
    use alloc::string::ToString;

    #[test]
    fn json_round_trip() {
        let r = Rectangle::new(1.5, -2.0, 30.0, 0.0);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"version":1,"x":1.5,"y":-2.0,"width":30.0,"height":0.0}"#
        );
        let back: Rectangle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn missing_version_is_first_version() {
        let r: Rectangle =
            serde_json::from_str(r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#).unwrap();
        assert_eq!(r, Rectangle::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn newer_version_is_rejected() {
        let err = serde_json::from_str::<Rectangle>(
            r#"{"version":2,"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#,
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("unsupported Rectangle version 2"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        assert!(serde_json::from_str::<Rectangle>(r#"{"version":1,"x":1.0,"y":2.0}"#).is_err());
    }
}
