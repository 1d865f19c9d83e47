/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix::{Prefix, SiPrefix};

/// Localized names, symbols and definitions of units.
///
/// Lookups are keyed by a unit's bare identifier (eg. `"meter"`) and an
/// optional culture name. The engine uses the returned strings as-is.
pub trait UnitText: Send + Sync {
    fn name(&self, id: &str, culture: Option<&str>) -> Option<String>;
    fn symbol(&self, id: &str, culture: Option<&str>) -> Option<String>;
    fn definition(&self, id: &str, culture: Option<&str>) -> Option<String>;

    /// Name of `10^power` times the unit named `base` (eg. kilogram).
    fn prefixed_name(
        &self,
        power: i32,
        base: &str,
        culture: Option<&str>,
    ) -> Option<String>;

    /// Symbol of `10^power` times the unit with symbol `base` (eg. kg).
    fn prefixed_symbol(
        &self,
        power: i32,
        base: &str,
        culture: Option<&str>,
    ) -> Option<String>;
}

/// Invariant-culture (English) text for the built-in units. Other
/// cultures fall back to it.
#[derive(Clone, Copy, Default, Debug)]
pub struct BuiltinText;

/// Identifier, name, symbol, definition.
type TextEntry = (&'static str, &'static str, Option<&'static str>, &'static str);

#[rustfmt::skip]
static TEXT: &[TextEntry] = &[
    /* SI */
    ("meter", "meter", Some("m"), "SI base unit of length"),
    ("gram", "gram", Some("g"), "one thousandth of a kilogram"),
    ("second", "second", Some("s"), "SI base unit of time"),
    ("minute", "minute", Some("min"), "60 seconds"),
    ("hour", "hour", Some("h"), "60 minutes"),
    ("day", "day", Some("d"), "24 hours"),
    ("kelvin", "kelvin", Some("K"), "SI base unit of thermodynamic temperature"),
    ("celsius", "degree Celsius", Some("°C"), "kelvin offset by 273.15"),
    ("ampere", "ampere", Some("A"), "SI base unit of electric current"),
    ("mole", "mole", Some("mol"), "SI base unit of amount of substance"),
    ("candela", "candela", Some("cd"), "SI base unit of luminous intensity"),
    ("square_meter", "square meter", None, "area of a square with sides of one meter"),
    ("cubic_meter", "cubic meter", None, "volume of a cube with sides of one meter"),
    ("liter", "liter", Some("L"), "one thousandth of a cubic meter"),
    ("meter_per_second", "meter per second", None, "SI unit of speed"),
    ("newton", "newton", Some("N"), "force giving one kilogram an acceleration of 1 m/s²"),
    ("joule", "joule", Some("J"), "work done by one newton over one meter"),
    ("hertz", "hertz", Some("Hz"), "one cycle per second"),
    /* Imperial */
    ("inch", "inch", Some("in"), "exactly 25.4 millimeters"),
    ("foot", "foot", Some("ft"), "12 inches"),
    ("yard", "yard", Some("yd"), "3 feet"),
    ("mile", "mile", Some("mi"), "1760 yards"),
    ("ounce", "ounce", Some("oz"), "one sixteenth of a pound"),
    ("pound", "pound", Some("lb"), "exactly 0.45359237 kilograms"),
    ("stone", "stone", Some("st"), "14 pounds"),
    ("imperial_fluid_ounce", "imperial fluid ounce", Some("fl oz"), "one twentieth of an imperial pint"),
    ("imperial_pint", "imperial pint", Some("pt"), "one eighth of an imperial gallon"),
    ("imperial_gallon", "imperial gallon", Some("gal"), "exactly 4.54609 liters"),
    /* US customary */
    ("us_fluid_ounce", "US fluid ounce", Some("fl oz"), "one eighth of a US cup"),
    ("us_cup", "US cup", Some("cp"), "one half of a US pint"),
    ("us_pint", "US pint", Some("pt"), "one half of a US quart"),
    ("us_quart", "US quart", Some("qt"), "one quarter of a US gallon"),
    ("us_gallon", "US gallon", Some("gal"), "231 cubic inches"),
    ("fahrenheit", "degree Fahrenheit", Some("°F"), "1.8 degrees Fahrenheit per degree Celsius, offset by 32"),
    /* Natural */
    ("electronvolt", "electronvolt", Some("eV"), "energy gained by an electron through a potential of one volt"),
    ("speed_of_light", "speed of light", Some("c"), "natural unit of speed"),
];

impl BuiltinText {
    fn entry(id: &str) -> Option<&'static TextEntry> {
        TEXT.iter().find(|(i, _, _, _)| *i == id)
    }
}

impl UnitText for BuiltinText {
    fn name(&self, id: &str, _culture: Option<&str>) -> Option<String> {
        Self::entry(id).map(|(_, n, _, _)| n.to_string())
    }

    fn symbol(&self, id: &str, _culture: Option<&str>) -> Option<String> {
        Self::entry(id).and_then(|(_, _, s, _)| s.map(String::from))
    }

    fn definition(&self, id: &str, _culture: Option<&str>) -> Option<String> {
        Self::entry(id).map(|(_, _, _, d)| d.to_string())
    }

    fn prefixed_name(
        &self,
        power: i32,
        base: &str,
        _culture: Option<&str>,
    ) -> Option<String> {
        SiPrefix::from_exponent(power as i64)
            .map(|p| format!("{}{}", p.name(), base))
    }

    fn prefixed_symbol(
        &self,
        power: i32,
        base: &str,
        _culture: Option<&str>,
    ) -> Option<String> {
        SiPrefix::from_exponent(power as i64)
            .map(|p| format!("{}{}", p.prefix(), base))
    }
}
