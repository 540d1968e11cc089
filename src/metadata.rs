//! NetCDF metadata inspection and the dataset structure summary
//!
//! This module collects dimension, coordinate, variable and attribute
//! information from an open NetCDF file and renders it as the textual
//! summary the loader prints.

use crate::errors::Result;
use netcdf::{AttributeValue, File, Variable};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Information about a dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionInfo {
    pub name: String,
    pub length: usize,
    pub is_unlimited: bool,
}

/// Structured metadata for a NetCDF variable
#[derive(Debug, Clone, PartialEq)]
pub struct VariableMetadata {
    pub name: String,
    pub data_type: String,
    pub dimensions: Vec<String>,
    pub shape: Vec<usize>,
    pub attributes: BTreeMap<String, String>,
}

impl VariableMetadata {
    /// Value of a string attribute such as `units` or `long_name`
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A coordinate variable and the range of values it spans
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateInfo {
    pub name: String,
    pub dimension: String,
    /// Rendered `first .. last` range, absent when the values could not be read
    pub range: Option<String>,
    pub units: Option<String>,
}

/// Structural summary of a loaded dataset
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatasetSummary {
    pub source: PathBuf,
    pub dimensions: Vec<DimensionInfo>,
    pub coordinates: Vec<CoordinateInfo>,
    pub variables: Vec<VariableMetadata>,
    pub global_attributes: BTreeMap<String, String>,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<Dataset> {}", self.source.display())?;

        let dims: Vec<String> = self
            .dimensions
            .iter()
            .map(|d| {
                if d.is_unlimited {
                    format!("{}: {} (unlimited)", d.name, d.length)
                } else {
                    format!("{}: {}", d.name, d.length)
                }
            })
            .collect();
        writeln!(f, "Dimensions:  ({})", dims.join(", "))?;

        writeln!(f, "Coordinates:")?;
        if self.coordinates.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for coord in &self.coordinates {
            let range = coord.range.as_deref().unwrap_or("(unreadable)");
            match &coord.units {
                Some(units) => writeln!(
                    f,
                    "  * {:<12} ({}) {} [{}]",
                    coord.name, coord.dimension, range, units
                )?,
                None => writeln!(f, "  * {:<12} ({}) {}", coord.name, coord.dimension, range)?,
            }
        }

        writeln!(f, "Data variables:")?;
        if self.variables.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for var in &self.variables {
            let dims = if var.dimensions.is_empty() {
                "scalar".to_string()
            } else {
                var.dimensions.join(", ")
            };
            writeln!(f, "    {:<14} ({}) {}", var.name, dims, var.data_type)?;

            let key_attrs: Vec<String> = ["units", "long_name", "_FillValue"]
                .iter()
                .filter_map(|key| var.attribute(key).map(|v| format!("{key}: {v}")))
                .collect();
            if !key_attrs.is_empty() {
                writeln!(f, "      └─ {}", key_attrs.join(", "))?;
            }
        }

        writeln!(f, "Attributes:")?;
        if self.global_attributes.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for (name, value) in &self.global_attributes {
            writeln!(f, "    {name}: {value}")?;
        }

        Ok(())
    }
}

/// Renders an attribute value for display.
#[must_use]
pub fn attribute_to_string(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Str(s) => s.clone(),
        AttributeValue::Strs(ss) => ss.join(", "),
        AttributeValue::Float(v) => v.to_string(),
        AttributeValue::Floats(vs) => format!("{vs:?}"),
        AttributeValue::Double(v) => v.to_string(),
        AttributeValue::Doubles(vs) => format!("{vs:?}"),
        AttributeValue::Int(v) => v.to_string(),
        AttributeValue::Ints(vs) => format!("{vs:?}"),
        AttributeValue::Short(v) => v.to_string(),
        AttributeValue::Shorts(vs) => format!("{vs:?}"),
        other => format!("{other:?}"),
    }
}

/// Every element of a numeric attribute value as `f64`, `None` for text.
///
/// 64-bit integers beyond 2^53 lose precision, matching how the data values
/// themselves are read.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn attribute_numbers(value: AttributeValue) -> Option<Vec<f64>> {
    let numbers = match value {
        AttributeValue::Uchar(v) => vec![f64::from(v)],
        AttributeValue::Uchars(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Schar(v) => vec![f64::from(v)],
        AttributeValue::Schars(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Ushort(v) => vec![f64::from(v)],
        AttributeValue::Ushorts(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Short(v) => vec![f64::from(v)],
        AttributeValue::Shorts(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Uint(v) => vec![f64::from(v)],
        AttributeValue::Uints(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Int(v) => vec![f64::from(v)],
        AttributeValue::Ints(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Ulonglong(v) => vec![v as f64],
        AttributeValue::Ulonglongs(vs) => vs.into_iter().map(|v| v as f64).collect(),
        AttributeValue::Longlong(v) => vec![v as f64],
        AttributeValue::Longlongs(vs) => vs.into_iter().map(|v| v as f64).collect(),
        AttributeValue::Float(v) => vec![f64::from(v)],
        AttributeValue::Floats(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Double(v) => vec![v],
        AttributeValue::Doubles(vs) => vs,
        AttributeValue::Str(_) | AttributeValue::Strs(_) => return None,
    };
    Some(numbers)
}

/// Numeric value of a scalar attribute (`scale_factor`, `add_offset`, ...)
#[must_use]
pub fn numeric_attribute(var: &Variable, name: &str) -> Option<f64> {
    match numeric_attribute_values(var, name).as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

/// All values of a numeric attribute; empty when absent or textual.
///
/// CF allows `missing_value` to hold several sentinels.
#[must_use]
pub fn numeric_attribute_values(var: &Variable, name: &str) -> Vec<f64> {
    var.attribute(name)
        .and_then(|attr| attr.value().ok())
        .and_then(attribute_numbers)
        .unwrap_or_default()
}

/// Value of a text attribute
#[must_use]
pub fn string_attribute(var: &Variable, name: &str) -> Option<String> {
    match var.attribute(name)?.value().ok()? {
        AttributeValue::Str(s) => Some(s),
        _ => None,
    }
}

/// Lists the file's dimensions in definition order.
#[must_use]
pub fn collect_dimensions(file: &File) -> Vec<DimensionInfo> {
    file.dimensions()
        .map(|d| DimensionInfo {
            name: d.name().to_string(),
            length: d.len(),
            is_unlimited: d.is_unlimited(),
        })
        .collect()
}

/// Reads the global attributes of a file.
///
/// # Errors
///
/// Returns an error if an attribute value cannot be read.
pub fn collect_global_attributes(file: &File) -> Result<BTreeMap<String, String>> {
    let mut attributes = BTreeMap::new();
    for attr in file.attributes() {
        attributes.insert(attr.name().to_string(), attribute_to_string(&attr.value()?));
    }
    Ok(attributes)
}

/// Get structured metadata for a variable
#[must_use]
pub fn get_variable_metadata(var: &Variable) -> VariableMetadata {
    let mut attributes = BTreeMap::new();
    for attr in var.attributes() {
        if let Ok(value) = attr.value() {
            attributes.insert(attr.name().to_string(), attribute_to_string(&value));
        }
    }

    VariableMetadata {
        name: var.name().to_string(),
        data_type: format!("{:?}", var.vartype()).to_lowercase(),
        dimensions: var
            .dimensions()
            .iter()
            .map(|d| d.name().to_string())
            .collect(),
        shape: var.dimensions().iter().map(netcdf::Dimension::len).collect(),
        attributes,
    }
}

/// True for 1-D variables named after their own dimension (CF coordinates).
#[must_use]
pub fn is_coordinate_variable(var: &Variable) -> bool {
    match var.dimensions() {
        [only] => only.name() == var.name(),
        _ => false,
    }
}
