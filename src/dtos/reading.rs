use crate::{
    error::{EdgexError, EdgexResult},
    models::{self, BinaryReading, ObjectReading, Reading, SimpleReading},
    validation::{self, Validator},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

const VALUE_TYPE_BINARY: &str = "Binary";
const VALUE_TYPE_OBJECT: &str = "Object";

/// Wire form of a reading. Which payload field is set depends on the
/// value type: `binaryValue`/`mediaType` for binary readings, `objectValue`
/// for object readings and `value` for everything else.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema, garde::Validate)]
#[serde(rename_all = "camelCase")]
pub struct BaseReading {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(custom(validation::empty_or_uuid))]
    pub id: String,
    #[serde(default)]
    #[garde(range(min = 1))]
    pub origin: i64,
    #[serde(default)]
    #[garde(custom(validation::non_empty))]
    pub device_name: String,
    #[serde(default)]
    #[garde(custom(validation::non_empty))]
    pub resource_name: String,
    #[serde(default)]
    #[garde(custom(validation::non_empty))]
    pub profile_name: String,
    #[serde(default)]
    #[garde(custom(validation::value_type))]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[garde(skip)]
    pub units: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    #[garde(skip)]
    pub tags: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "base64_bytes")]
    #[schema(value_type = Option<String>)]
    #[garde(skip)]
    pub binary_value: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub object_value: Option<serde_json::Value>,
}

impl Validator for BaseReading {
    /// Field rules plus the payload the value type calls for: `binaryValue`
    /// and a non-empty `mediaType` for binary readings, `objectValue` for
    /// object readings and `value` otherwise
    fn validate(&self) -> EdgexResult<()> {
        validation::validate_struct(self)?;
        let missing = if self.value_type.eq_ignore_ascii_case(VALUE_TYPE_BINARY) {
            if self.binary_value.is_none() {
                Some("binaryValue")
            } else if self.media_type.as_deref().map_or(true, str::is_empty) {
                Some("mediaType")
            } else {
                None
            }
        } else if self.value_type.eq_ignore_ascii_case(VALUE_TYPE_OBJECT) {
            self.object_value.is_none().then_some("objectValue")
        } else {
            self.value.is_none().then_some("value")
        };

        match missing {
            Some(field) => Err(EdgexError::contract_invalid(format!(
                "{} is required for a {} reading",
                field, self.value_type
            ))),
            None => Ok(()),
        }
    }
}

/// Binary payloads travel as standard base64 strings
mod base64_bytes {
    use base64::{engine::general_purpose, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&general_purpose::STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?;
        encoded
            .map(|s| general_purpose::STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

fn to_base_reading_model(dto: &BaseReading) -> models::BaseReading {
    models::BaseReading {
        id: dto.id.clone(),
        origin: dto.origin,
        device_name: dto.device_name.clone(),
        resource_name: dto.resource_name.clone(),
        profile_name: dto.profile_name.clone(),
        value_type: dto.value_type.clone(),
        units: dto.units.clone(),
        tags: dto.tags.clone(),
    }
}

/// Transform the Reading DTO to the Reading model, choosing the reading kind
/// from the value type
pub fn to_reading_model(dto: BaseReading) -> Reading {
    let base = to_base_reading_model(&dto);
    if dto.value_type.eq_ignore_ascii_case(VALUE_TYPE_BINARY) {
        Reading::Binary(BinaryReading {
            base,
            binary_value: dto.binary_value.unwrap_or_default(),
            media_type: dto.media_type.unwrap_or_default(),
        })
    } else if dto.value_type.eq_ignore_ascii_case(VALUE_TYPE_OBJECT) {
        Reading::Object(ObjectReading {
            base,
            object_value: dto.object_value.unwrap_or_default(),
        })
    } else {
        Reading::Simple(SimpleReading {
            base,
            value: dto.value.unwrap_or_default(),
        })
    }
}

pub fn to_reading_models(dtos: Vec<BaseReading>) -> Vec<Reading> {
    dtos.into_iter().map(to_reading_model).collect()
}

/// Transform the Reading model to the Reading DTO
pub fn from_reading_model_to_dto(model: Reading) -> BaseReading {
    let base = model.base().clone();
    let mut dto = BaseReading {
        id: base.id,
        origin: base.origin,
        device_name: base.device_name,
        resource_name: base.resource_name,
        profile_name: base.profile_name,
        value_type: base.value_type,
        units: base.units,
        tags: base.tags,
        ..Default::default()
    };
    match model {
        Reading::Simple(r) => dto.value = Some(r.value),
        Reading::Binary(r) => {
            dto.binary_value = Some(r.binary_value);
            dto.media_type = Some(r.media_type);
        }
        Reading::Object(r) => dto.object_value = Some(r.object_value),
    }
    dto
}

pub fn from_reading_models_to_dtos(models: Vec<Reading>) -> Vec<BaseReading> {
    models.into_iter().map(from_reading_model_to_dto).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::validation::validate_struct;
    use serde_json::json;

    fn base(value_type: &str) -> BaseReading {
        BaseReading {
            id: "3b9a9e4c-2f4e-4d0e-8b61-1f1b6a1b6f10".to_string(),
            origin: 1_700_000_000_000_000_000,
            device_name: "Random-Integer-Device".to_string(),
            resource_name: "Int8".to_string(),
            profile_name: "Random-Integer-Device".to_string(),
            value_type: value_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_reading_round_trip() {
        let dto = BaseReading {
            value: Some("-12".to_string()),
            units: "C".to_string(),
            ..base("Int8")
        };
        let model = to_reading_model(dto.clone());
        assert!(matches!(&model, Reading::Simple(r) if r.value == "-12"));
        assert_eq!(from_reading_model_to_dto(model), dto);
    }

    #[test]
    fn test_binary_reading_round_trip_and_wire_format() {
        let dto = BaseReading {
            binary_value: Some(vec![0xde, 0xad, 0xbe, 0xef]),
            media_type: Some("application/octet-stream".to_string()),
            ..base("Binary")
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["binaryValue"], "3q2+7w==");
        assert!(value.get("value").is_none());

        let decoded: BaseReading = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, dto);

        let model = to_reading_model(dto.clone());
        assert!(matches!(&model, Reading::Binary(r) if r.binary_value.len() == 4));
        assert_eq!(from_reading_model_to_dto(model), dto);
    }

    #[test]
    fn test_object_reading_round_trip() {
        let dto = BaseReading {
            object_value: Some(json!({"x": 1, "y": [true, false]})),
            ..base("Object")
        };
        let model = to_reading_model(dto.clone());
        assert!(matches!(model, Reading::Object(_)));
        assert_eq!(from_reading_model_to_dto(model), dto);
    }

    #[test]
    fn test_reading_validation() {
        assert!(validate_struct(&base("Float32")).is_ok());

        let mut bad = base("Float32");
        bad.origin = 0;
        assert!(validate_struct(&bad).is_err());

        assert!(validate_struct(&base("Complex")).is_err());
    }

    #[test]
    fn test_reading_without_payload_is_rejected() {
        let simple = base("Int8");
        assert_eq!(simple.validate().unwrap_err().kind(), ErrorKind::ContractInvalid);

        let binary_without_media_type = BaseReading {
            binary_value: Some(vec![1, 2, 3]),
            ..base("Binary")
        };
        assert!(binary_without_media_type.validate().is_err());

        let binary_without_value = BaseReading {
            media_type: Some("image/png".to_string()),
            ..base("Binary")
        };
        assert!(binary_without_value.validate().is_err());

        assert!(base("Object").validate().is_err());
    }

    #[test]
    fn test_valid_readings_round_trip() {
        let readings = [
            BaseReading {
                value: Some("-12".to_string()),
                ..base("Int8")
            },
            BaseReading {
                value: Some(String::new()),
                ..base("String")
            },
            BaseReading {
                binary_value: Some(vec![]),
                media_type: Some("application/octet-stream".to_string()),
                ..base("Binary")
            },
            BaseReading {
                object_value: Some(json!({"x": 1})),
                ..base("Object")
            },
        ];
        for dto in readings {
            dto.validate().unwrap();
            assert_eq!(from_reading_model_to_dto(to_reading_model(dto.clone())), dto);
        }
    }
}
