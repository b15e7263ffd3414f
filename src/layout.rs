//! Byte-size computation for source types.
//!
//! The allocation path treats these sizes as authoritative: the GC receives
//! exactly this many bytes, and field access code generation assumes the
//! same layout.

use crate::ty::Ty;

/// Calculate the size of a type in bytes.
pub fn size_of(ty: &Ty) -> u64 {
    match ty {
        Ty::Number => 8,
        Ty::Boolean => 1,
        // Opaque runtime handles, pointer-sized
        Ty::String | Ty::Array => 8,
        // Record payload is the sum of its field sizes
        Ty::Record(record) => record.fields.iter().map(size_of).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_sizes() {
        assert_eq!(size_of(&Ty::Number), 8);
        assert_eq!(size_of(&Ty::Boolean), 1);
        assert_eq!(size_of(&Ty::String), 8);
        assert_eq!(size_of(&Ty::Array), 8);
    }

    #[test]
    fn test_record_size_is_field_sum() {
        let point = Ty::record("Point", vec![Ty::Number, Ty::Number, Ty::Number]);
        assert_eq!(size_of(&point), 24);

        let empty = Ty::record("Empty", vec![]);
        assert_eq!(size_of(&empty), 0);
    }

    #[test]
    fn test_nested_record_size() {
        let inner = Ty::record("Inner", vec![Ty::Number, Ty::Number]);
        let outer = Ty::record("Outer", vec![Ty::Number, inner]);
        assert_eq!(size_of(&outer), 24);
    }
}
