//! Role-bound skills.
//!
//! Runners carry [`Skill::invisible`], the chaser carries [`Skill::dash`].
//! `activate` runs every frame the skill key is held and `deactivate` every
//! frame it is not, so both are idempotent: the skill remembers whether its
//! status change is currently applied and only touches the status on an edge.

use super::status::{Status, StatusFlag};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SkillKind {
    Invisible,
    Dash,
}

/// Skill strategy bound to one actor's status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    kind: SkillKind,
    engaged: bool,
}

impl Skill {
    pub const fn invisible() -> Self {
        Self {
            kind: SkillKind::Invisible,
            engaged: false,
        }
    }

    pub const fn dash() -> Self {
        Self {
            kind: SkillKind::Dash,
            engaged: false,
        }
    }

    pub fn kind(&self) -> SkillKind {
        self.kind
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn activate(&mut self, status: &mut Status) {
        if self.engaged {
            return;
        }
        match self.kind {
            SkillKind::Invisible => status.set(StatusFlag::Invisible),
            SkillKind::Dash => status.running(),
        }
        self.engaged = true;
    }

    pub fn deactivate(&mut self, status: &mut Status) {
        if !self.engaged {
            return;
        }
        match self.kind {
            SkillKind::Invisible => status.release(StatusFlag::Invisible),
            SkillKind::Dash => status.walking(),
        }
        self.engaged = false;
    }
}
