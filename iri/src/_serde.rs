use super::IriValue;
use serde::{
    de::{Error, Unexpected},
    Deserialize, Serialize,
};

impl<'a> Deserialize<'a> for IriValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let inner = String::deserialize(deserializer)?;
        inner
            .parse()
            .map_err(|_| D::Error::invalid_value(Unexpected::Str(&inner), &"valid IRI reference"))
    }
}

impl Serialize for IriValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
