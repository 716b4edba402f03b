//! Adapter: make third-party units answer the interface the client expects.
//!
//! The client calls `jump()`. Foreign units know how to `leap` or `spring`
//! instead, so a generic adapter bridges the call with a closure.

use std::io::{self, Write};

/// The interface the client code expects of a unit.
pub trait Jump {
    fn jump(&self) -> String;
}

/// A unit that already speaks the client's interface.
pub struct ElfRider;

impl Jump for ElfRider {
    fn jump(&self) -> String {
        "ElfRider jumps".to_string()
    }
}

/// An imaginary third-party unit with an incompatible interface.
pub struct WoodElf;

impl WoodElf {
    /// Equivalent of the `jump` the client expects.
    pub fn leap(&self) -> String {
        "WoodElf leaps".to_string()
    }

    /// Unrelated ability the adapter leaves alone.
    pub fn climb(&self) -> String {
        "WoodElf climbs".to_string()
    }
}

/// Another third-party unit, with yet another name for jumping.
pub struct MountainElf;

impl MountainElf {
    pub fn spring(&self) -> String {
        "MountainElf springs".to_string()
    }
}

/// Adapts any foreign unit to [`Jump`] by delegating to a closure over the
/// wrapped unit.
pub struct ForeignUnitAdapter<T, F>
where
    F: Fn(&T) -> String,
{
    unit: T,
    jump_fn: F,
}

impl<T, F> ForeignUnitAdapter<T, F>
where
    F: Fn(&T) -> String,
{
    pub fn new(unit: T, jump_fn: F) -> Self {
        Self { unit, jump_fn }
    }

    /// Access to the wrapped unit for its native methods.
    pub fn unit(&self) -> &T {
        &self.unit
    }
}

impl<T, F> Jump for ForeignUnitAdapter<T, F>
where
    F: Fn(&T) -> String,
{
    fn jump(&self) -> String {
        (self.jump_fn)(&self.unit)
    }
}

/// Transcript of the client jumping native and adapted units alike.
pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Adapter pattern example")?;
    writeln!(out, "{}", "-".repeat(25))?;

    let elf = ElfRider;
    let wood_elf = ForeignUnitAdapter::new(WoodElf, WoodElf::leap);
    let mountain_elf = ForeignUnitAdapter::new(MountainElf, MountainElf::spring);

    let units: [&dyn Jump; 3] = [&elf, &wood_elf, &mountain_elf];
    for unit in units {
        writeln!(out, "{}", unit.jump())?;
    }
    writeln!(out, "{}", wood_elf.unit().climb())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_bridges_leap_to_jump() {
        let adapted = ForeignUnitAdapter::new(WoodElf, WoodElf::leap);
        assert_eq!(adapted.jump(), "WoodElf leaps");
    }

    #[test]
    fn test_adapter_bridges_spring_to_jump() {
        let adapted = ForeignUnitAdapter::new(MountainElf, MountainElf::spring);
        assert_eq!(adapted.jump(), "MountainElf springs");
    }

    #[test]
    fn test_native_methods_stay_reachable() {
        let adapted = ForeignUnitAdapter::new(WoodElf, WoodElf::leap);
        assert_eq!(adapted.unit().climb(), "WoodElf climbs");
    }

    #[test]
    fn test_adapter_accepts_closures() {
        let adapted = ForeignUnitAdapter::new(MountainElf, |elf: &MountainElf| {
            format!("adapted: {}", elf.spring())
        });
        assert_eq!(adapted.jump(), "adapted: MountainElf springs");
    }
}
