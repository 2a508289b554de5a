//! Serialization and deserialization for tile types

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::rules::MAX_PIP;
use super::tiles_types::{Ends, Tile, TileId};

// TileId serde (compact "low-high" string like "3-5")
impl Serialize for TileId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<TileId>()
            .map_err(|e| D::Error::custom(format!("Invalid tile id {s:?}: {e}")))
    }
}

// Tile serde: {"id":"3-5","a":5,"b":3}. The id is always canonical; a/b keep orientation.
impl Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut st = serializer.serialize_struct("Tile", 3)?;
        st.serialize_field("id", &self.id())?;
        st.serialize_field("a", &self.a())?;
        st.serialize_field("b", &self.b())?;
        st.end()
    }
}

#[derive(Deserialize)]
struct RawTile {
    #[serde(default)]
    id: Option<TileId>,
    a: u8,
    b: u8,
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTile::deserialize(deserializer)?;
        let tile = Tile::new(raw.a, raw.b).map_err(D::Error::custom)?;
        if let Some(id) = raw.id {
            if id != tile.id() {
                return Err(D::Error::custom(format!(
                    "Tile id {id} does not match faces {tile}"
                )));
            }
        }
        Ok(tile)
    }
}

/// `layoutEnds` wire shape: `[left, right]`, or `[null, null]` for an empty layout.
pub mod layout_ends {
    use super::*;

    pub fn serialize<S>(ends: &Option<Ends>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let pair: [Option<u8>; 2] = match ends {
            Some(e) => [Some(e.left), Some(e.right)],
            None => [None, None],
        };
        pair.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Ends>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match <[Option<u8>; 2]>::deserialize(deserializer)? {
            [None, None] => Ok(None),
            [Some(left), Some(right)] if left <= MAX_PIP && right <= MAX_PIP => {
                Ok(Some(Ends { left, right }))
            }
            [Some(left), Some(right)] => Err(D::Error::custom(format!(
                "layoutEnds out of range: [{left}, {right}]"
            ))),
            _ => Err(D::Error::custom(
                "layoutEnds must have both ends set or both unset",
            )),
        }
    }
}
