//! End-to-end animation scenarios driven the way a per-frame caller would
//! drive them: register an entity, start a session, tick at frame-sized
//! increments, observe the transform.

use vector_sim_core::{
    AnimationKind, AnimationStatus, EntityRegistry, Transform, Vec3,
};

#[test]
fn test_translation_tween_full_lifecycle() {
    let mut registry = EntityRegistry::new();
    let id = registry.register();
    let animator = registry.get_mut(id).unwrap();

    animator
        .start(AnimationKind::TranslationTween {
            target_delta: Vec3::new(10.0, 0.0, 0.0),
            duration: 2.0,
        })
        .unwrap();

    animator.tick(1.0);
    let halfway = animator.transform().position;
    assert!(
        (halfway.x - 5.0).abs() < 1e-9,
        "expected ~(5,0,0) at halfway, got {halfway}"
    );

    animator.tick(1.0);
    assert_eq!(animator.transform().position, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(animator.status(), Some(AnimationStatus::Completed));
    assert!(animator.active_axes().is_empty());
}

#[test]
fn test_frame_sized_ticks_land_exactly_on_target() {
    let mut registry = EntityRegistry::new();
    let id = registry.register();
    let animator = registry.get_mut(id).unwrap();

    animator
        .start(AnimationKind::TranslationTween {
            target_delta: Vec3::new(1.0, 2.0, 3.0),
            duration: 1.0,
        })
        .unwrap();

    // 70 frames of 1/60s overshoot the one-second duration; the final
    // transform must be the exact target, not the last lerp.
    for _ in 0..70 {
        animator.tick(1.0 / 60.0);
    }
    assert_eq!(animator.transform().position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(animator.status(), Some(AnimationStatus::Completed));
}

#[test]
fn test_force_integration_runs_until_cancelled() {
    let mut registry = EntityRegistry::new();
    let id = registry.register();
    let animator = registry.get_mut(id).unwrap();

    animator
        .start(AnimationKind::force(Vec3::new(0.5, 0.0, 0.0), 2.0))
        .unwrap();

    for _ in 0..10 {
        animator.tick(1.0);
    }
    assert_eq!(animator.transform().position.x, 10.0);
    assert_eq!(animator.status(), Some(AnimationStatus::Running));

    animator.cancel();
    assert_eq!(animator.status(), Some(AnimationStatus::Cancelled));

    // Ticks after cancellation change nothing
    animator.tick(1.0);
    assert_eq!(animator.transform().position.x, 10.0);
}

#[test]
fn test_force_integration_runaway_reset() {
    let mut registry = EntityRegistry::new();
    let id = registry.register();
    let animator = registry.get_mut(id).unwrap();

    animator
        .start(AnimationKind::ForceIntegration {
            acceleration: Vec3::new(1.0, 0.0, 0.0),
        })
        .unwrap();

    animator.tick(2001.0);
    assert_eq!(animator.transform().position, Vec3::ZERO);
}

#[test]
fn test_supersession_mid_tween() {
    let mut registry = EntityRegistry::new();
    let id = registry.register_with(Transform::default());
    let animator = registry.get_mut(id).unwrap();

    let scale_handle = animator
        .start(AnimationKind::ScaleTween {
            target_delta: Vec3::new(5.0, 0.0, 0.0),
            duration: 2.0,
        })
        .unwrap();
    animator.tick(1.0); // scale.x = lerp(1, 5, 0.5) = 3

    let rotation_handle = animator
        .start(AnimationKind::RotationTween {
            target_delta: Vec3::new(0.0, 180.0, 0.0),
            duration: 2.0,
        })
        .unwrap();

    assert!(animator.is_stale(scale_handle));
    assert!(!animator.is_stale(rotation_handle));

    // The scale keeps its last ticked value through the whole rotation
    animator.tick(2.0);
    assert_eq!(animator.transform().scale.x, 3.0);
    assert_eq!(animator.transform().rotation, Vec3::new(0.0, 180.0, 0.0));
    assert_eq!(animator.status(), Some(AnimationStatus::Completed));
}

#[test]
fn test_invalid_parameters_are_rejected_without_side_effects() {
    let mut registry = EntityRegistry::new();
    let id = registry.register();
    let animator = registry.get_mut(id).unwrap();

    let err = animator
        .start(AnimationKind::TranslationTween {
            target_delta: Vec3::new(f64::NAN, 0.0, 0.0),
            duration: 1.0,
        })
        .unwrap_err();
    assert_eq!(err.name, "target_delta.x");

    // No session was created and the transform is untouched
    assert!(animator.session().is_none());
    assert_eq!(animator.transform().position, Vec3::ZERO);
}

#[test]
fn test_selected_entity_drives_only_itself() {
    let mut registry = EntityRegistry::new();
    let first = registry.register();
    let _second = registry.register();

    registry
        .selected_mut()
        .unwrap()
        .start(AnimationKind::TranslationTween {
            target_delta: Vec3::new(1.0, 0.0, 0.0),
            duration: 1.0,
        })
        .unwrap();
    registry.selected_mut().unwrap().tick(1.0);

    assert_eq!(
        registry.get(first).unwrap().transform().position,
        Vec3::new(1.0, 0.0, 0.0)
    );

    registry.select_next();
    assert_eq!(registry.selected().unwrap().transform().position, Vec3::ZERO);
}
