//! Generation and session parameters.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub map_width: usize,
    pub map_height: usize,
    pub max_rooms: u32,
    pub room_min_size: usize,
    pub room_max_size: usize,
    pub max_monsters_per_room: u32,
    pub max_items_per_room: u32,
    pub fov_radius: i32,
    pub player_inventory_capacity: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            map_width: 80,
            map_height: 43,
            max_rooms: 30,
            room_min_size: 6,
            room_max_size: 10,
            max_monsters_per_room: 2,
            max_items_per_room: 2,
            fov_radius: 8,
            player_inventory_capacity: 26,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Rooms narrower than three cells have no interior for the center point.
    RoomTooSmall { room_min_size: usize },
    EmptyRoomSizeRange { room_min_size: usize, room_max_size: usize },
    MapTooSmall { map_width: usize, map_height: usize, room_max_size: usize },
    NegativeFovRadius(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoomTooSmall { room_min_size } => {
                write!(f, "room_min_size must be at least 3, got {room_min_size}")
            }
            Self::EmptyRoomSizeRange { room_min_size, room_max_size } => write!(
                f,
                "room_max_size ({room_max_size}) must exceed room_min_size ({room_min_size})"
            ),
            Self::MapTooSmall { map_width, map_height, room_max_size } => write!(
                f,
                "a {map_width}x{map_height} map cannot hold rooms of size {room_max_size}"
            ),
            Self::NegativeFovRadius(radius) => write!(f, "fov_radius must be >= 0, got {radius}"),
        }
    }
}

impl Error for ConfigError {}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_min_size < 3 {
            return Err(ConfigError::RoomTooSmall { room_min_size: self.room_min_size });
        }
        if self.room_max_size <= self.room_min_size {
            return Err(ConfigError::EmptyRoomSizeRange {
                room_min_size: self.room_min_size,
                room_max_size: self.room_max_size,
            });
        }
        if self.map_width < self.room_max_size + 2 || self.map_height < self.room_max_size + 2 {
            return Err(ConfigError::MapTooSmall {
                map_width: self.map_width,
                map_height: self.map_height,
                room_max_size: self.room_max_size,
            });
        }
        if self.fov_radius < 0 {
            return Err(ConfigError::NegativeFovRadius(self.fov_radius));
        }
        Ok(())
    }
}
