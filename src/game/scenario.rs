//! High level logic to play the Attack of the Orcs scenario.

use crate::combat::{attack, CombatEvent};
use crate::constants::HUT_COUNT;
use crate::game::console::{bold, read_line, write_bold};
use crate::game::hut::Hut;
use crate::units::{GameUnit, Knight, OrcRider, UnitType};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

/// The main scenario: fight the enemy and bring all huts under control.
pub struct AttackOfTheOrcs {
    pub huts: Vec<Hut>,
    pub player: Knight,
    /// Everything that happened in combat during the last game
    pub combat_log: Vec<CombatEvent>,
}

impl AttackOfTheOrcs {
    pub fn new() -> Self {
        Self {
            huts: Vec::new(),
            player: Knight::default(),
            combat_log: Vec::new(),
        }
    }

    /// Randomly occupies the huts with an enemy, a friend, or nothing.
    pub fn setup_game_scenario<R: Rng>(&mut self, rng: &mut R) {
        self.huts.clear();
        for i in 1..=HUT_COUNT {
            let occupant: Option<Box<dyn GameUnit>> = match rng.gen_range(0..3) {
                0 => Some(Box::new(OrcRider::new(format!("enemy-{}", i)))),
                1 => Some(Box::new(Knight::new(format!("knight-{}", i)))),
                _ => None,
            };
            self.huts.push(Hut::new(i, occupant));
        }
    }

    /// Occupant types for all huts, used for the status display.
    pub fn occupants(&self) -> Vec<&'static str> {
        self.huts.iter().map(|hut| hut.occupant_type()).collect()
    }

    /// Number of huts the player has taken so far.
    pub fn acquired_count(&self) -> usize {
        self.huts.iter().filter(|hut| hut.is_acquired).count()
    }

    fn show_game_mission(&self, out: &mut impl Write) -> io::Result<()> {
        write_bold(out, "Mission:")?;
        writeln!(out, "  1. Fight with the enemy.")?;
        writeln!(out, "  2. Bring all the huts in the village under your control")?;
        writeln!(out, "---------------------------------------------------------\n")
    }

    /// Prompts for a hut number until the player names a valid, unacquired hut.
    fn process_user_choice(
        &self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<usize> {
        writeln!(out, "Current occupants: {:?}", self.occupants())?;
        loop {
            write!(out, "Choose a hut number to enter (1-{}): ", HUT_COUNT)?;
            out.flush()?;
            let choice = read_line(input)?;

            let idx: usize = match choice.parse() {
                Ok(idx) => idx,
                Err(e) => {
                    writeln!(out, "Invalid input, args: {} \n", e)?;
                    continue;
                }
            };

            if idx < 1 || idx > HUT_COUNT {
                writeln!(out, "Invalid input : {}", idx)?;
                writeln!(out, "Number should be in the range 1-{}. Try again", HUT_COUNT)?;
                continue;
            }

            if self.huts[idx - 1].is_acquired {
                writeln!(
                    out,
                    "You have already acquired this hut. Try again.\
                     <INFO: You can NOT get healed in already acquired hut.>"
                )?;
                continue;
            }

            return Ok(idx);
        }
    }

    /// Workhorse method to play the game.
    ///
    /// Sets up the scenario, repeatedly asks the player for a hut to enter
    /// and fights or heals accordingly, until every hut is taken or the
    /// player's health meter hits zero.
    pub fn play<R: Rng>(
        &mut self,
        rng: &mut R,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<GameResult> {
        self.player = Knight::default();
        self.combat_log.clear();
        self.setup_game_scenario(rng);

        self.show_game_mission(out)?;
        write_bold(out, &self.player.health_line())?;

        let mut acquired_hut_counter = 0;
        while acquired_hut_counter < HUT_COUNT {
            let idx = self.process_user_choice(input, out)?;
            let events = enter_hut(&mut self.player, &mut self.huts[idx - 1], rng, input, out)?;
            self.combat_log.extend(events);

            if self.player.health() == 0 {
                write_bold(out, "YOU LOSE  :(  Better luck next time")?;
                return Ok(GameResult::Lost);
            }

            if self.huts[idx - 1].is_acquired {
                acquired_hut_counter += 1;
            }
        }

        write_bold(out, "Congratulations! YOU WIN!!!")?;
        Ok(GameResult::Won)
    }
}

impl Default for AttackOfTheOrcs {
    fn default() -> Self {
        Self::new()
    }
}

/// Enters a hut: fight the occupant if it is an enemy, otherwise take the
/// hut and get healed. Returns the combat events that occurred inside.
fn enter_hut<R: Rng>(
    player: &mut Knight,
    hut: &mut Hut,
    rng: &mut R,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Vec<CombatEvent>> {
    write!(out, "{} ", bold(&format!("Entering hut {}...", hut.number)))?;
    let mut events = Vec::new();

    let is_enemy = hut
        .occupant
        .as_ref()
        .is_some_and(|occupant| occupant.unit_type() == UnitType::Enemy);

    if !is_enemy {
        if hut.occupant.is_none() {
            write_bold(out, "Hut is unoccupied")?;
        } else {
            write_bold(out, "Friend sighted!")?;
        }
        acquire(hut, player, out)?;
        heal_player(player, out)?;
        return Ok(events);
    }

    write_bold(out, "Enemy sighted!")?;
    if let Some(enemy) = hut.occupant.as_deref() {
        writeln!(out, "{} {}", bold(&player.health_line()), bold(&enemy.health_line()))?;
    }

    let mut enemy_defeated = None;
    loop {
        write!(out, "\n...continue attack? (y/n): ")?;
        out.flush()?;
        if read_line(input)? == "n" {
            write_bold(out, "RUNNING AWAY...")?;
            events.push(CombatEvent::RanAway);
            break;
        }

        let Some(enemy) = hut.occupant.as_deref_mut() else {
            break;
        };
        let outcome = attack(player, enemy, rng);
        events.push(CombatEvent::Attack(outcome));
        writeln!(out, "ATTACK! {}  {}", player.health_line(), enemy.health_line())?;

        if enemy.health() == 0 {
            enemy_defeated = Some(enemy.name().to_string());
            break;
        }
        if player.health() == 0 {
            events.push(CombatEvent::PlayerDefeated);
            writeln!(out)?;
            break;
        }
    }

    if let Some(name) = enemy_defeated {
        events.push(CombatEvent::EnemyDefeated { name });
        writeln!(out)?;
        acquire(hut, player, out)?;
    }

    Ok(events)
}

fn acquire(hut: &mut Hut, player: &Knight, out: &mut impl Write) -> io::Result<()> {
    hut.acquire(Box::new(player.clone()));
    write_bold(out, &format!("GOOD JOB! Hut {} acquired", hut.number))
}

fn heal_player(player: &mut Knight, out: &mut impl Write) -> io::Result<()> {
    match player.heal_default() {
        Ok(()) => {
            write!(out, "{} ", bold("You are HEALED!"))?;
            write_bold(out, &player.health_line())
        }
        // Full healing cannot overshoot; surface the framed message if it
        // somehow does.
        Err(e) => writeln!(out, "{}", e),
    }
}
