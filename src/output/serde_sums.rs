use serde::Serialize;

/// A serde view of the computed sums.
///
/// Serializes as `{"sums":[0,0,9,-9]}`.
#[derive(Serialize, Debug)]
pub struct SerializableSums<'a> {
    sums: &'a [i64],
}

impl<'a> SerializableSums<'a> {
    pub fn new(sums: &'a [i64]) -> Self {
        Self { sums }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_sums() {
        let serialized = serde_json::to_string(&SerializableSums::new(&[0, 0, 9, -9])).unwrap();
        assert_eq!(serialized, r#"{"sums":[0,0,9,-9]}"#);
    }

    #[test]
    fn serialize_no_sums() {
        let serialized = serde_json::to_string(&SerializableSums::new(&[])).unwrap();
        assert_eq!(serialized, r#"{"sums":[]}"#);
    }
}
