//! Entity model - plain records built on a shared physical body

pub mod body;
pub mod enemy;
pub mod input;
pub mod player;

pub use body::Body;
pub use enemy::{Enemy, ENEMY_HP_REFERENCE, ENEMY_SIZE, ENEMY_START_HP};
pub use input::MovementInput;
pub use player::{PlayerEntity, PLAYER_SIZE, PLAYER_SPEED};
