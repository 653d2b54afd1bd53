//! Procedural dungeon generation: rooms, corridors and spawn placement.

pub mod model;

mod corridor;
mod generator;
mod layout;
mod spawns;

use rand_chacha::rand_core::Rng;

use crate::config::{ConfigError, DungeonConfig};

pub use corridor::{BresenhamLine, tunnel_between};
pub use generator::DungeonGenerator;
pub use model::{GeneratedDungeon, ItemSpawn, MonsterSpawn};

pub fn generate_dungeon<R: Rng + ?Sized>(
    config: &DungeonConfig,
    rng: &mut R,
) -> Result<GeneratedDungeon, ConfigError> {
    Ok(DungeonGenerator::new(config.clone())?.generate(rng))
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::{DungeonGenerator, generate_dungeon};
    use crate::config::DungeonConfig;

    #[test]
    fn generate_dungeon_matches_generator_output() {
        let config = DungeonConfig::default();
        let from_helper =
            generate_dungeon(&config, &mut ChaCha8Rng::seed_from_u64(123)).expect("valid config");
        let from_generator = DungeonGenerator::new(config)
            .expect("valid config")
            .generate(&mut ChaCha8Rng::seed_from_u64(123));

        assert_eq!(from_helper.canonical_bytes(), from_generator.canonical_bytes());
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let config = DungeonConfig { room_min_size: 1, ..DungeonConfig::default() };
        assert!(generate_dungeon(&config, &mut ChaCha8Rng::seed_from_u64(1)).is_err());
    }
}
