use super::Tags;

/// Fields shared by every kind of reading
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseReading {
    pub id: String,
    pub origin: i64,
    pub device_name: String,
    pub resource_name: String,
    pub profile_name: String,
    pub value_type: String,
    pub units: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleReading {
    pub base: BaseReading,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BinaryReading {
    pub base: BaseReading,
    pub binary_value: Vec<u8>,
    pub media_type: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectReading {
    pub base: BaseReading,
    pub object_value: serde_json::Value,
}

/// A single sensor value, shaped by its value type
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Simple(SimpleReading),
    Binary(BinaryReading),
    Object(ObjectReading),
}

impl Reading {
    pub fn base(&self) -> &BaseReading {
        match self {
            Reading::Simple(r) => &r.base,
            Reading::Binary(r) => &r.base,
            Reading::Object(r) => &r.base,
        }
    }
}
