use std::str::FromStr;

use super::{DataError, PropertyTable};

/// Parses the tab-separated text format.
///
/// The first line is a header and is skipped. Each following non-blank line
/// holds temperature (K), conductivity (W/m·K), kinematic viscosity (m²/s)
/// and Prandtl number separated by tabs. A `,` decimal separator is accepted
/// in place of `.`.
///
/// # Example
///
/// ```
/// use twine_insulation::support::properties::{Property, PropertyTable};
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
///
/// let text = "T\tk\tnu\tPr\n300\t0,0263\t1,589e-5\t0,707\n350\t0,0300\t2,092e-5\t0,700\n";
/// let table: PropertyTable = text.parse().unwrap();
///
/// let t = ThermodynamicTemperature::new::<kelvin>(300.0);
/// assert!((table.value_at(t, Property::Conductivity) - 0.0263).abs() < 1e-12);
/// ```
impl FromStr for PropertyTable {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .enumerate()
            .skip(1)
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, text)| {
                let line = index + 1;
                parse_row(line, text).map(|row| (line, row))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_numbered_rows(&rows)
    }
}

fn parse_row(line: usize, text: &str) -> Result<[f64; 4], DataError> {
    let fields: Vec<&str> = text.trim_end_matches('\r').split('\t').collect();
    if fields.len() != 4 {
        return Err(DataError::ColumnCount {
            line,
            found: fields.len(),
        });
    }

    let mut row = [0.0; 4];
    for (index, (slot, field)) in row.iter_mut().zip(&fields).enumerate() {
        let field = field.trim();
        *slot = field
            .replace(',', ".")
            .parse()
            .map_err(|_| DataError::Parse {
                line,
                column: index + 1,
                text: field.to_owned(),
            })?;
    }
    Ok(row)
}
