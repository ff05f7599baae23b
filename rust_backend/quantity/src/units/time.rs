//! Time units. The second is canonical.

use super::UnitDef;
use crate::Dimension;

pub(crate) const DEFINITIONS: &[UnitDef] = &[
    UnitDef::prefixed("second", "s", &["sec"], 1.0, Dimension::TIME),
    UnitDef::plain("minute", "min", &[], 60.0, Dimension::TIME),
    UnitDef::plain("hour", "h", &["hr"], 3_600.0, Dimension::TIME),
    UnitDef::plain("day", "d", &[], 86_400.0, Dimension::TIME),
];
