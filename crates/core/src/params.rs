//! Lenient typed lookups into a `serde_json::Value` params object.
//!
//! Each helper returns `default` when the key is missing or holds the wrong
//! JSON type. Range checks are the caller's job.

use serde_json::Value;

/// Extracts an `f64`, accepting JSON integers as well as floats.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a non-negative integer that fits in `u32`.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_float_and_integer() {
        let params = json!({"scale": 0.03, "offset_x": 10});
        assert_eq!(param_f64(&params, "scale", 1.0), 0.03);
        assert_eq!(param_f64(&params, "offset_x", 0.0), 10.0);
    }

    #[test]
    fn param_f64_falls_back_on_missing_or_wrong_type() {
        let params = json!({"scale": "fine", "falloff": null});
        assert_eq!(param_f64(&params, "scale", 0.5), 0.5);
        assert_eq!(param_f64(&params, "falloff", 0.25), 0.25);
        assert_eq!(param_f64(&params, "absent", 2.0), 2.0);
    }

    #[test]
    fn param_f64_falls_back_for_non_object() {
        assert_eq!(param_f64(&json!([1, 2, 3]), "scale", 7.0), 7.0);
    }

    #[test]
    fn param_u32_extracts_integer() {
        assert_eq!(param_u32(&json!({"octaves": 6}), "octaves", 1), 6);
    }

    #[test]
    fn param_u32_rejects_negative_float_and_oversized() {
        assert_eq!(param_u32(&json!({"octaves": -1}), "octaves", 4), 4);
        assert_eq!(param_u32(&json!({"octaves": 2.5}), "octaves", 4), 4);
        assert_eq!(
            param_u32(&json!({"octaves": u64::from(u32::MAX) + 1}), "octaves", 4),
            4
        );
    }

    #[test]
    fn param_u32_keeps_zero() {
        // Zero is passed through; the engine decides whether it is valid.
        assert_eq!(param_u32(&json!({"octaves": 0}), "octaves", 4), 0);
    }

    #[test]
    fn param_bool_extracts_and_falls_back() {
        assert!(param_bool(&json!({"radial": true}), "radial", false));
        assert!(!param_bool(&json!({"radial": 1}), "radial", false));
        assert!(param_bool(&json!({}), "radial", true));
    }
}
