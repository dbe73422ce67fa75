//! Indented, human readable rendering of a value tree.
//!
//! ```text
//! a: 1
//! b:
//!   b_a: 2-1
//! c:
//!   0:
//!     c_a_1: 3-1_1
//! ```

use {
    super::{FlatMapping, StructuredValue},
    std::fmt::{self, Display, Write},
};

const INDENT_STEP: usize = 2;

pub struct Indented<'a>(&'a StructuredValue);

impl StructuredValue {
    pub fn indented(&self) -> Indented<'_> {
        Indented(self)
    }
}

impl FlatMapping {
    /// Renders as the mapping of scalars this flat mapping reinterprets to.
    pub fn indented(&self) -> String {
        StructuredValue::from(self.clone()).indented().to_string()
    }
}

fn write_entry(
    f: &mut impl Write,
    label: impl Display,
    value: &StructuredValue,
    indent: usize,
) -> fmt::Result {
    write!(f, "{:indent$}{label}:", "")?;
    match value {
        StructuredValue::Scalar(scalar) => writeln!(f, " {scalar}"),
        container => {
            f.write_char('\n')?;
            write_indented(f, container, indent + INDENT_STEP)
        }
    }
}

fn write_indented(f: &mut impl Write, value: &StructuredValue, indent: usize) -> fmt::Result {
    match value {
        StructuredValue::Scalar(scalar) => writeln!(f, "{scalar}"),
        StructuredValue::Sequence(values) => values
            .iter()
            .enumerate()
            .try_for_each(|(idx, value)| write_entry(f, idx, value, indent)),
        StructuredValue::Mapping(map) => map
            .iter()
            .try_for_each(|(key, value)| write_entry(f, key, value, indent)),
    }
}

impl Display for Indented<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_indented(f, self.0, 0)
    }
}
