//! Player-controlled actors and the fixed roster that owns them.

use std::fmt;

use arrayvec::ArrayVec;

use super::common::{ActorId, Color, Coordinate};
use super::skill::Skill;
use super::sprite::Sprite;
use super::status::Status;
use crate::config::GameConfig;
use crate::render::Canvas;

/// One player's entity. Position lives in the actor map, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    id: ActorId,
    status: Status,
    sprite: Sprite,
    skill: Skill,
}

impl Actor {
    pub const CHASER_GLYPH: char = '&';
    pub const RUNNER_GLYPH: char = '@';
    pub const PLAYER_COLORS: [Color; GameConfig::MAX_PLAYERS] =
        [Color::Red, Color::Aqua, Color::Yellow, Color::Lime];

    pub fn new(id: ActorId, config: &GameConfig) -> Self {
        let color = Self::PLAYER_COLORS[id.index() % GameConfig::MAX_PLAYERS];
        Self {
            id,
            status: Status::new(config),
            sprite: Sprite::new(Self::RUNNER_GLYPH, color),
            skill: Skill::invisible(),
        }
    }

    /// Restores a fresh runner with full life that has not joined yet.
    pub fn reset(&mut self, config: &GameConfig) {
        self.status = Status::new(config);
        self.skill = Skill::invisible();
        self.sprite.reset_color();
        self.be_runner();
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    pub fn skill(&self) -> &Skill {
        &self.skill
    }

    pub fn life(&self) -> u32 {
        self.status.life()
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    pub fn be_playing(&mut self) {
        self.status.be_playing();
    }

    pub fn is_dead(&self) -> bool {
        self.status.is_dead()
    }

    pub fn is_waiting(&self) -> bool {
        self.status.is_waiting()
    }

    pub fn is_chaser(&self) -> bool {
        self.status.is_chaser()
    }

    pub fn is_runner(&self) -> bool {
        self.status.is_runner()
    }

    pub fn be_chaser(&mut self) {
        self.sprite.change_glyph(Self::CHASER_GLYPH);
        self.status.be_chaser();
        self.change_skill(Skill::dash());
    }

    pub fn be_runner(&mut self) {
        self.sprite.change_glyph(Self::RUNNER_GLYPH);
        self.status.be_runner();
        self.change_skill(Skill::invisible());
    }

    pub fn damage(&mut self, value: u32) {
        self.status.damage(value);
    }

    pub fn use_skill(&mut self) {
        self.skill.activate(&mut self.status);
    }

    pub fn unuse_skill(&mut self) {
        self.skill.deactivate(&mut self.status);
    }

    /// The outgoing skill is deactivated before the replacement is bound, so
    /// whatever it applied to the status is undone first.
    fn change_skill(&mut self, skill: Skill) {
        self.skill.deactivate(&mut self.status);
        self.skill = skill;
    }

    pub fn render(&self, canvas: &mut dyn Canvas, at: Coordinate) {
        if self.status.is_hidden() {
            return;
        }
        canvas.draw(at, self.sprite.graphic());
    }

    pub fn render_status(&self, canvas: &mut dyn Canvas, at: Coordinate) {
        let line = format!("[{}] {}", self.id, self.status);
        canvas.write(&line, at, self.sprite.original_color());
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.status)
    }
}

/// One line of the end-of-chase standings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingEntry {
    pub actor: ActorId,
    /// Zero-based; equal life shares a rank.
    pub rank: usize,
    pub color: Color,
    pub line: String,
}

/// Fixed roster of actors, one per player slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actors {
    members: ArrayVec<Actor, { GameConfig::MAX_PLAYERS }>,
}

impl Actors {
    const RANK_TAGS: [&'static str; GameConfig::MAX_PLAYERS] = ["TOP", "2nd", "3rd", "4th"];
    const RANK_COLORS: [Color; GameConfig::MAX_PLAYERS] =
        [Color::Yellow, Color::White, Color::Silver, Color::Gray];

    pub fn new(config: &GameConfig) -> Self {
        let members = (0..config.players())
            .map(|slot| Actor::new(ActorId(slot as u8), config))
            .collect();
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.members.get(id.index())
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.members.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.members.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.members.iter().map(Actor::id)
    }

    pub fn exists_deadman(&self) -> bool {
        self.members.iter().any(Actor::is_dead)
    }

    pub fn reset(&mut self, config: &GameConfig) {
        for member in &mut self.members {
            member.reset(config);
        }
    }

    /// Standings of every actor that joined, by life descending.
    pub fn ranking(&self) -> Vec<RankingEntry> {
        let mut playing: Vec<&Actor> = self.members.iter().filter(|a| a.is_playing()).collect();
        playing.sort_by(|a, b| b.life().cmp(&a.life()).then(a.id().cmp(&b.id())));

        let mut entries = Vec::with_capacity(playing.len());
        let mut rank = 0;
        let mut previous_life = None;
        for actor in playing {
            if let Some(life) = previous_life
                && life != actor.life()
            {
                rank += 1;
            }
            entries.push(RankingEntry {
                actor: actor.id(),
                rank,
                color: Self::RANK_COLORS[rank],
                line: format!("[{}] {}", Self::RANK_TAGS[rank], actor),
            });
            previous_life = Some(actor.life());
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusFlag;

    fn roster() -> (GameConfig, Actors) {
        let config = GameConfig::default();
        let actors = Actors::new(&config);
        (config, actors)
    }

    #[test]
    fn roster_has_one_actor_per_slot() {
        let config = GameConfig::default().with_player_count(3);
        let actors = Actors::new(&config);
        assert_eq!(actors.len(), 3);
        assert_eq!(actors.ids().collect::<Vec<_>>(), [ActorId(0), ActorId(1), ActorId(2)]);
    }

    #[test]
    fn becoming_chaser_swaps_skill_and_glyph() {
        let (_, mut actors) = roster();
        let actor = actors.get_mut(ActorId(0)).unwrap();

        actor.use_skill();
        assert!(actor.status().is_active(StatusFlag::Invisible));

        actor.be_chaser();
        assert!(actor.is_chaser());
        assert_eq!(actor.sprite().glyph(), Actor::CHASER_GLYPH);
        assert_eq!(actor.skill().kind(), crate::state::SkillKind::Dash);
        // The runner skill was deactivated before the swap.
        assert!(!actor.status().is_active(StatusFlag::Invisible));
    }

    #[test]
    fn becoming_runner_restores_walk_speed() {
        let (config, mut actors) = roster();
        let actor = actors.get_mut(ActorId(1)).unwrap();
        actor.be_chaser();
        actor.use_skill();
        assert_eq!(actor.status().walk_wait_frames(), config.dash_wait_frames);

        actor.be_runner();
        assert_eq!(actor.status().walk_wait_frames(), config.walk_wait_frames);
        assert_eq!(actor.sprite().glyph(), Actor::RUNNER_GLYPH);
    }

    #[test]
    fn ranking_shares_rank_on_equal_life() {
        let (_, mut actors) = roster();
        for actor in actors.iter_mut() {
            actor.be_playing();
        }
        actors.get_mut(ActorId(0)).unwrap().damage(3);
        actors.get_mut(ActorId(2)).unwrap().damage(1);
        actors.get_mut(ActorId(3)).unwrap().damage(1);

        let ranking = actors.ranking();
        let ranks: Vec<(ActorId, usize)> = ranking.iter().map(|e| (e.actor, e.rank)).collect();
        assert_eq!(
            ranks,
            [(ActorId(1), 0), (ActorId(2), 1), (ActorId(3), 1), (ActorId(0), 2)]
        );
        assert_eq!(ranking[0].line, "[TOP] 2P Life: 10 ");
        assert_eq!(ranking[3].color, Color::Silver);
    }

    #[test]
    fn ranking_skips_players_who_never_joined() {
        let (_, mut actors) = roster();
        actors.get_mut(ActorId(2)).unwrap().be_playing();
        let ranking = actors.ranking();
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].actor, ActorId(2));
    }

    #[test]
    fn reset_restores_life_and_runner_role() {
        let (config, mut actors) = roster();
        {
            let actor = actors.get_mut(ActorId(0)).unwrap();
            actor.be_playing();
            actor.be_chaser();
            actor.damage(config.max_life);
        }
        assert!(actors.exists_deadman());

        actors.reset(&config);
        assert!(!actors.exists_deadman());
        let actor = actors.get(ActorId(0)).unwrap();
        assert!(actor.is_runner());
        assert!(!actor.is_playing());
        assert_eq!(actor.life(), config.max_life);
    }
}
