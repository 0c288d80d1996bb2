//! Integration tests for display transform resolution.
//!
//! Exercises the vector, transform and display-table resolvers through the
//! public API with synthetic documents.

use serde_json::{json, Value};

use display_transforms::transform::{
    parse_display_table, parse_transformation, parse_vector3, DisplayContext, Hand, SchemaError,
    Transformation, Vector3, MAX_SCALE, MAX_TRANSLATION, TRANSLATION_UNIT,
};

fn object(value: &Value) -> &serde_json::Map<String, Value> {
    value.as_object().expect("fixture must be an object")
}

// ===========================================================================
// Vector parsing
// ===========================================================================

#[test]
fn test_vector_matches_array_elements() {
    let samples = [
        [0.0f32, 0.0, 0.0],
        [1.0, -2.0, 3.5],
        [-1000.25, 0.125, 1e6],
    ];

    for s in samples {
        let doc = json!({ "v": s });
        let v = parse_vector3(object(&doc), "v", Vector3::splat(9.0)).unwrap();
        assert_eq!(v, Vector3::from_array(s));
    }
}

#[test]
fn test_vector_absent_key_returns_default_unchanged() {
    let doc = json!({ "rotation": [1, 2, 3] });
    for default in [Vector3::ZERO, Vector3::ONE, Vector3::new(-7.0, 8.5, 1e9)] {
        assert_eq!(parse_vector3(object(&doc), "scale", default), Ok(default));
    }
}

#[test]
fn test_vector_wrong_arity_reports_length() {
    for len in [0usize, 1, 2, 4, 7] {
        let doc = json!({ "translation": vec![1.0; len] });
        assert_eq!(
            parse_vector3(object(&doc), "translation", Vector3::ZERO),
            Err(SchemaError::ArityMismatch {
                field: "translation".to_string(),
                expected: 3,
                found: len,
            })
        );
    }
}

// ===========================================================================
// Single transform blocks
// ===========================================================================

#[test]
fn test_empty_block_is_identity() {
    let t = parse_transformation(&json!({})).unwrap();
    assert_eq!(t, Transformation::IDENTITY);
    assert_eq!(t.rotation, Vector3::ZERO);
    assert_eq!(t.translation, Vector3::ZERO);
    assert_eq!(t.scale, Vector3::ONE);
}

#[test]
fn test_translation_at_bounds_is_unchanged() {
    let t = parse_transformation(&json!({ "translation": [80, 0, -80] })).unwrap();
    assert_eq!(t.translation, Vector3::new(5.0, 0.0, -5.0));
}

#[test]
fn test_translation_beyond_bounds_is_clamped() {
    let t = parse_transformation(&json!({ "translation": [160, 0, 0] })).unwrap();
    assert_eq!(t.translation, Vector3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_translation_and_scale_always_in_range() {
    let inputs = [-1e30f64, -10000.0, -81.0, -80.0, -3.0, 0.0, 0.5, 79.9, 80.0, 4096.0, 1e30];

    for &x in &inputs {
        let t = parse_transformation(&json!({ "translation": [x, -x, x], "scale": [x, -x, x] }))
            .unwrap();
        for c in t.translation.to_array() {
            assert!((-MAX_TRANSLATION..=MAX_TRANSLATION).contains(&c), "translation {}", c);
        }
        for c in t.scale.to_array() {
            assert!((-MAX_SCALE..=MAX_SCALE).contains(&c), "scale {}", c);
        }
    }
}

#[test]
fn test_in_range_translation_only_scaled() {
    let t = parse_transformation(&json!({ "translation": [-32, 48, 2] })).unwrap();
    assert_eq!(
        t.translation,
        Vector3::new(-32.0 * TRANSLATION_UNIT, 48.0 * TRANSLATION_UNIT, 2.0 * TRANSLATION_UNIT)
    );
}

#[test]
fn test_malformed_rotation_reports_field() {
    assert_eq!(
        parse_transformation(&json!({ "rotation": [1, 2] })),
        Err(SchemaError::ArityMismatch {
            field: "rotation".to_string(),
            expected: 3,
            found: 2,
        })
    );
}

// ===========================================================================
// Display tables
// ===========================================================================

#[test]
fn test_empty_display_all_identity() {
    let table = parse_display_table(&json!({})).unwrap();
    for ctx in DisplayContext::ALL {
        assert_eq!(table[ctx], Transformation::IDENTITY, "{}", ctx);
        assert!(!table.is_defined(ctx));
    }
}

#[test]
fn test_third_person_left_copies_right() {
    let table = parse_display_table(&json!({
        "thirdperson_righthand": { "scale": [2, 2, 2] }
    }))
    .unwrap();

    let right = table[DisplayContext::ThirdPersonRight];
    let left = table[DisplayContext::ThirdPersonLeft];
    assert_eq!(right.scale, Vector3::splat(2.0));
    assert_eq!(left, right);

    // The inherited entry is a separate value.
    let mut left_owned = table.get(DisplayContext::ThirdPersonLeft);
    left_owned.scale = Vector3::ONE;
    assert_ne!(left_owned, right);
    assert_eq!(table[DisplayContext::ThirdPersonRight].scale, Vector3::splat(2.0));
    assert_eq!(table[DisplayContext::ThirdPersonLeft].scale, Vector3::splat(2.0));
}

#[test]
fn test_full_vanilla_style_display() {
    let table = parse_display_table(&json!({
        "thirdperson_righthand": { "rotation": [0, 0, 0], "translation": [0, 3, 1], "scale": [0.55, 0.55, 0.55] },
        "firstperson_righthand": { "rotation": [0, -90, 25], "translation": [1.13, 3.2, 1.13], "scale": [0.68, 0.68, 0.68] },
        "head": { "rotation": [0, 180, 0], "translation": [0, 13, 7] },
        "gui": { "rotation": [30, 225, 0], "scale": [0.625, 0.625, 0.625] },
        "ground": { "translation": [0, 2, 0], "scale": [0.5, 0.5, 0.5] },
        "fixed": { "rotation": [0, 180, 0] }
    }))
    .unwrap();

    assert_eq!(table[DisplayContext::ThirdPersonLeft], table[DisplayContext::ThirdPersonRight]);
    assert_eq!(table[DisplayContext::FirstPersonLeft], table[DisplayContext::FirstPersonRight]);
    assert_eq!(table[DisplayContext::Head].translation, Vector3::new(0.0, 0.8125, 0.4375));
    assert_eq!(table[DisplayContext::Ground].translation, Vector3::new(0.0, 0.125, 0.0));
    assert_eq!(table[DisplayContext::Fixed].rotation, Vector3::new(0.0, 180.0, 0.0));
    assert!(DisplayContext::ALL.iter().all(|&ctx| table.is_defined(ctx)));
}

#[test]
fn test_malformed_context_yields_no_table() {
    let result = parse_display_table(&json!({
        "thirdperson_righthand": { "scale": [2, 2, 2] },
        "gui": { "rotation": [1, 2] }
    }));
    assert_eq!(
        result,
        Err(SchemaError::ArityMismatch {
            field: "rotation".to_string(),
            expected: 3,
            found: 2,
        })
    );
}

#[test]
fn test_display_must_be_object() {
    assert_eq!(parse_display_table(&json!([])), Err(SchemaError::NotAnObject));
    assert_eq!(parse_display_table(&json!(1)), Err(SchemaError::NotAnObject));
}

// ===========================================================================
// Applying resolved transforms
// ===========================================================================

#[test]
fn test_left_hand_matrix_mirrors_right() {
    let table = parse_display_table(&json!({
        "firstperson_righthand": { "translation": [16, 0, 0] }
    }))
    .unwrap();

    let right = table[DisplayContext::FirstPersonRight];
    let left = table[DisplayContext::FirstPersonLeft];

    let p_right = right.transform_point([0.0; 3], DisplayContext::FirstPersonRight.hand());
    let p_left = left.transform_point([0.0; 3], DisplayContext::FirstPersonLeft.hand());
    assert_eq!(p_right, [1.0, 0.0, 0.0]);
    assert_eq!(p_left, [-1.0, 0.0, 0.0]);
    assert_eq!(Transformation::IDENTITY.to_mat4(Hand::Left), glam::Mat4::IDENTITY);
}

#[test]
fn test_resolution_is_thread_safe() {
    let doc = json!({ "gui": { "scale": [3, 3, 3] } });

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = doc.clone();
            std::thread::spawn(move || parse_display_table(&doc).unwrap())
        })
        .collect();

    for handle in handles {
        let table = handle.join().unwrap();
        assert_eq!(table[DisplayContext::Gui].scale, Vector3::splat(3.0));
    }
}
