//! Simple factory: a kingdom recruits units without naming their concrete
//! types.

use crate::units::{GameUnit, Knight, OrcRider};
use std::io::{self, Write};

/// The unit types a kingdom can order from a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    ElfRider,
    Knight,
    DwarfFighter,
    OrcRider,
    Fairy,
    Wizard,
    ElfLord,
    OrcFighter,
}

impl UnitKind {
    pub fn all() -> [UnitKind; 8] {
        [
            UnitKind::ElfRider,
            UnitKind::Knight,
            UnitKind::DwarfFighter,
            UnitKind::OrcRider,
            UnitKind::Fairy,
            UnitKind::Wizard,
            UnitKind::ElfLord,
            UnitKind::OrcFighter,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitKind::ElfRider => "elf rider",
            UnitKind::Knight => "knight",
            UnitKind::DwarfFighter => "dwarf fighter",
            UnitKind::OrcRider => "orc rider",
            UnitKind::Fairy => "fairy",
            UnitKind::Wizard => "wizard",
            UnitKind::ElfLord => "elf lord",
            UnitKind::OrcFighter => "orc fighter",
        }
    }

    /// Whether the unit fights on the orc side.
    fn is_orc(&self) -> bool {
        matches!(self, UnitKind::OrcRider | UnitKind::OrcFighter)
    }
}

/// A factory that creates and returns game unit instances.
pub trait UnitFactory {
    fn create_unit(&self, kind: UnitKind) -> Box<dyn GameUnit>;
}

/// The default factory: friendly kinds come out as knights-in-arms, orc
/// kinds as orc riders.
pub struct BarracksFactory;

impl UnitFactory for BarracksFactory {
    fn create_unit(&self, kind: UnitKind) -> Box<dyn GameUnit> {
        if kind.is_orc() {
            Box::new(OrcRider::new(kind.label()))
        } else {
            Box::new(Knight::new(kind.label()))
        }
    }
}

/// A kingdom that orders units from a factory, pays for them and keeps a
/// recruitment record.
pub struct Kingdom<F: UnitFactory> {
    factory: F,
    pub gold_paid: u32,
    pub roster: Vec<String>,
}

impl<F: UnitFactory> Kingdom<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            gold_paid: 0,
            roster: Vec::new(),
        }
    }

    /// Orders a unit from the factory, pays the price, updates the records
    /// and hands the unit over.
    pub fn recruit(&mut self, kind: UnitKind) -> Box<dyn GameUnit> {
        let unit = self.factory.create_unit(kind);
        self.pay_gold();
        self.update_records(unit.as_ref());
        unit
    }

    fn pay_gold(&mut self) {
        self.gold_paid += 1;
    }

    fn update_records(&mut self, unit: &dyn GameUnit) {
        self.roster.push(unit.name().to_string());
    }
}

/// Transcript of recruiting a couple of units through the factory.
pub fn demo(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Simple factory example")?;
    writeln!(out, "{}", "-".repeat(25))?;
    let mut kingdom = Kingdom::new(BarracksFactory);
    for kind in [UnitKind::ElfRider, UnitKind::OrcFighter] {
        let unit = kingdom.recruit(kind);
        writeln!(out, "Recruited: {} ({})", unit.name(), unit.unit_type().label())?;
        writeln!(out, "  {}", unit.info())?;
    }
    writeln!(out, "Gold paid: {}", kingdom.gold_paid)
}
