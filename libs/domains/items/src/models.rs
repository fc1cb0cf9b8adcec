use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Store-assigned item identifier
pub type ItemId = i64;

/// Item entity as stored and as returned on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Assigned by the store, never reused
    #[schema(value_type = i64)]
    pub id: ItemId,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

/// Request body for create and update.
///
/// Missing and `null` fields take their zero value and unknown fields are
/// ignored. A client-supplied `id` must still be an integer (or null) but is
/// always discarded: create assigns the next counter value, update uses the
/// path id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ItemPayload {
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole-number prices are written without a fraction (`1`, not `1.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // beyond i64 range the float form is kept
    if price.fract() == 0.0 && price.abs() < 9.0e18 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

impl Item {
    /// Builds the full record stored under `id`, ignoring `payload.id`.
    pub fn from_payload(id: ItemId, payload: ItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
        }
    }
}
