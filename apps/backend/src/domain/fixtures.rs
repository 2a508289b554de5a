use super::tiles_types::Tile;

/// Parses hardcoded tile tokens used by fixtures, demo scripts and tests.
pub struct TileFixtures;

impl TileFixtures {
    /// Parse tokens such as `["6|6", "3-5"]`. Only for literals known to be
    /// valid; an invalid token is a programming error in the fixture.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Tile> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Tile>().expect("hardcoded valid tile token")
            })
            .collect()
    }

    pub fn one(token: &str) -> Tile {
        #[allow(clippy::expect_used)]
        token.parse::<Tile>().expect("hardcoded valid tile token")
    }
}
