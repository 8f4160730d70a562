//! Fixed one-hot feature schema for the classifier

/// The ten one-hot columns the classifier was selected on, in model order
const TOP_FEATURES: [&str; 10] = [
    "OPERA_Latin American Wings",
    "MES_7",
    "MES_10",
    "OPERA_Grupo LATAM",
    "MES_12",
    "TIPOVUELO_I",
    "MES_4",
    "MES_11",
    "OPERA_Sky Airline",
    "OPERA_Copa Air",
];

/// The fixed feature schema. Encoding output always has exactly these
/// columns, in this order, regardless of what appears in a batch.
pub struct FeatureSchema;

impl FeatureSchema {
    pub const fn len() -> usize {
        TOP_FEATURES.len()
    }

    pub fn columns() -> &'static [&'static str] {
        &TOP_FEATURES
    }

    pub fn index_of(name: &str) -> Option<usize> {
        TOP_FEATURES.iter().position(|column| *column == name)
    }
}
