pub mod actor;
pub mod common;
pub mod skill;
pub mod sprite;
pub mod status;

pub use actor::{Actor, Actors, RankingEntry};
pub use common::{ActorId, Color, Coordinate, Direction, FrameCounter};
pub use skill::{Skill, SkillKind};
pub use sprite::{Graphic, Sprite};
pub use status::{FlagCounters, Status, StatusFlag};
