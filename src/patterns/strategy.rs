//! Strategy: jump behavior injected into a unit as a plain function value,
//! swappable at runtime.

use std::io::{self, Write};

/// A jump behavior.
pub type JumpStrategy = fn() -> &'static str;

pub fn can_not_jump() -> &'static str {
    "I can not jump"
}

pub fn power_jump() -> &'static str {
    "I can jump 100 feet from the ground!"
}

pub fn horse_jump() -> &'static str {
    "Jumping my horse."
}

/// A fighter whose jump behavior is decided by the strategy it carries.
pub struct DwarfFighter {
    pub name: String,
    jump_strategy: JumpStrategy,
}

impl DwarfFighter {
    pub fn new(name: impl Into<String>, jump_strategy: JumpStrategy) -> Self {
        Self {
            name: name.into(),
            jump_strategy,
        }
    }

    pub fn set_jump_strategy(&mut self, jump_strategy: JumpStrategy) {
        self.jump_strategy = jump_strategy;
    }

    pub fn jump(&self) -> &'static str {
        (self.jump_strategy)()
    }

    pub fn info(&self) -> String {
        format!("I am {}, a great dwarf of the eastern foo mountain!", self.name)
    }
}

/// Transcript of one dwarf changing how it jumps.
pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Strategy pattern example")?;
    writeln!(out, "{}", "-".repeat(25))?;

    let mut dwarf = DwarfFighter::new("Dwarf", can_not_jump);
    writeln!(out, "{}", dwarf.info())?;
    writeln!(out, "Dwarf trying to jump: {}", dwarf.jump())?;

    dwarf.set_jump_strategy(power_jump);
    writeln!(out, "Dwarf given a power jump: {}", dwarf.jump())?;

    dwarf.set_jump_strategy(horse_jump);
    writeln!(out, "Dwarf on horseback: {}", dwarf.jump())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_decides_the_jump() {
        let dwarf = DwarfFighter::new("Gimli", can_not_jump);
        assert_eq!(dwarf.jump(), "I can not jump");
    }

    #[test]
    fn test_strategy_swaps_at_runtime() {
        let mut dwarf = DwarfFighter::new("Gimli", can_not_jump);
        dwarf.set_jump_strategy(power_jump);
        assert_eq!(dwarf.jump(), "I can jump 100 feet from the ground!");
        dwarf.set_jump_strategy(horse_jump);
        assert_eq!(dwarf.jump(), "Jumping my horse.");
    }
}
