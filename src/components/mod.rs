mod component_tile;

pub use component_tile::ComponentTile;
